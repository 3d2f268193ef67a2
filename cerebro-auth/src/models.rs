use chrono::{DateTime, Utc, serde::ts_seconds};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Bearer token persisted between runs when the user asks to be remembered.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoredToken {
    access_token: String,
    #[serde(with = "ts_seconds")]
    pub saved_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            saved_at: Utc::now(),
        }
    }

    pub fn secret(&self) -> SecretString {
        SecretString::from(self.access_token.clone())
    }

    pub fn is_blank(&self) -> bool {
        self.access_token.trim().is_empty()
    }
}

impl std::fmt::Debug for StoredToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredToken")
            .field("access_token", &"[REDACTED]")
            .field("saved_at", &self.saved_at)
            .finish()
    }
}
