use anyhow::Result;
use cerebro_api::Client;
use cerebro_auth::{restore_session, Settings, TokenStore};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers, AppCommand};
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::state::{AppState, Preferences};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging()?;

        tracing::info!("cerebro starting, logging to {}", log_path.display());

        let token_store = Arc::new(TokenStore::new()?);
        let api_client = Arc::new(Client::new(&self.settings.api_base_url));

        let mut ui_state = match restore_session(&token_store) {
            Some(token) => {
                api_client.set_token(Some(token.secret()));
                AppState::signed_in()
            }
            None => AppState::new(),
        };
        ui_state.preferences = Preferences {
            group_separator: self.settings.group_separator.clone(),
            recent_expenses: self.settings.recent_expenses,
        };

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut task_manager = BackgroundTaskManager::new();
        let data_loader = DataLoader::new(api_client, token_store, data_tx);

        let mut event_stream = EventStream::new();

        if api_client_ready(&ui_state) {
            tracing::info!("Session restored, loading dashboard");
            executor::execute_command(
                AppCommand::Refresh,
                &mut ui_state,
                &mut task_manager,
                &data_loader,
            );
        }

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                // Form keystrokes can carry a password, so only the variant name is logged
                                tracing::debug!("Executing command: {}", command_name(&command));
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &data_loader,
                                );
                            }
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {}", event_name(&data_event));
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

fn api_client_ready(state: &AppState) -> bool {
    state.current_screen() != crate::ui::screens::Screen::Login
}

fn command_name(command: &AppCommand) -> String {
    match command {
        AppCommand::AppendFormFieldChar(_) => "AppendFormFieldChar".to_string(),
        other => format!("{:?}", other),
    }
}

/// Event name without its payload; snapshots are large
fn event_name(event: &crate::events::DataEvent) -> String {
    let debug = format!("{:?}", event);
    debug
        .split(|c: char| c == ' ' || c == '{' || c == '(')
        .next()
        .unwrap_or_default()
        .to_string()
}
