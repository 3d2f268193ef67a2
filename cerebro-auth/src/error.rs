use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("No cache directory available for the session file")]
    NoCacheDir,

    #[error("Failed to {action} session file: {source}")]
    Session {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Session file is not valid JSON: {0}")]
    CorruptSession(#[from] serde_json::Error),
}

impl AuthError {
    pub(crate) fn session(action: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| AuthError::Session { action, source }
    }
}
