use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Runs commands against state. Production spawns network tasks, tests don't.
pub trait DataEventHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core without terminal dependencies
///
/// Key presses go through the key handler and then the command handler;
/// data events go straight to the reducer.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self::with_state(AppState::new(), handler)
    }

    pub fn with_state(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler.execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Run a command directly, bypassing key mapping
    pub fn handle_command(&mut self, command: AppCommand) {
        self.handler.execute_with_context(command, &mut self.ui_state);
    }

    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
