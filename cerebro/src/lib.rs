mod app;
pub mod app_core;
pub mod background;
pub mod commands;
pub mod events;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;

pub use app::App;

// Always expose testing module (integration tests need it)
pub mod testing;
