use crate::error::AuthError;
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Thousands separator used when formatting amounts.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    /// How many expenses the dashboard lists.
    #[serde(default = "default_recent_expenses")]
    pub recent_expenses: usize,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8001/api/v1".to_string()
}

fn default_group_separator() -> String {
    ".".to_string()
}

fn default_recent_expenses() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            group_separator: default_group_separator(),
            recent_expenses: default_recent_expenses(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, AuthError> {
        let config_path =
            std::env::var("CEREBRO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_file(&config_path)
    }

    /// Optional TOML file overlaid by `CEREBRO__*` environment variables.
    pub fn from_file(config_path: &str) -> Result<Self, AuthError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CEREBRO").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("api_base_url is required".to_string());
        }
        if !self.api_base_url.starts_with("http") {
            return Err("api_base_url must be a valid HTTP(S) URL".to_string());
        }
        if self.recent_expenses == 0 {
            return Err("recent_expenses must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8001/api/v1");
        assert_eq!(settings.group_separator, ".");
        assert_eq!(settings.recent_expenses, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "api_base_url = \"https://cerebro.example.com/api/v1\"\ngroup_separator = \",\"\n",
        )
        .unwrap();

        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api_base_url, "https://cerebro.example.com/api/v1");
        assert_eq!(settings.group_separator, ",");
        assert_eq!(settings.recent_expenses, 5);
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let settings = Settings {
            api_base_url: "ftp://nope".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            api_base_url: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
