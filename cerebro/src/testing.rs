use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Command handler for tests: applies state changes, never touches the network
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Starts on the login screen
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Starts on the dashboard, as after a restored session
    pub fn signed_in() -> Self {
        Self {
            core: AppCore::with_state(AppState::signed_in(), MockDataHandler::new()),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn send_command(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn assert_screen(&self, expected: Screen) {
        assert_eq!(
            self.state().current_screen(),
            expected,
            "Expected different screen"
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
