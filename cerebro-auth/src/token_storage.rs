use crate::error::AuthError;
use crate::models::StoredToken;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TOKEN_FILE: &str = "token.json";

pub struct TokenStore {
    token_path: PathBuf,
}

impl TokenStore {
    /// Store rooted at `<cache_dir>/cerebro`.
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or(AuthError::NoCacheDir)?
            .join("cerebro");
        Self::in_dir(cache_dir)
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(AuthError::session("create directory for"))?;
        }

        Ok(Self {
            token_path: dir.join(TOKEN_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.token_path
    }

    pub fn save_token(&self, token: &StoredToken) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(token)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner read/write only, from the moment the file exists
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.token_path)
            .map_err(AuthError::session("open"))?;
        // An older file keeps its mode on open
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(AuthError::session("restrict"))?;
        }
        file.write_all(json.as_bytes())
            .map_err(AuthError::session("write"))?;

        tracing::debug!("Token saved to {}", self.token_path.display());
        Ok(())
    }

    pub fn load_token(&self) -> Result<Option<StoredToken>, AuthError> {
        if !self.token_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.token_path)
            .map_err(AuthError::session("read"))?;

        let token: StoredToken = serde_json::from_str(&json)?;
        Ok(Some(token))
    }

    pub fn delete_token(&self) -> Result<(), AuthError> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)
                .map_err(AuthError::session("delete"))?;
        }
        Ok(())
    }
}
