use crate::models::StoredToken;
use crate::token_storage::TokenStore;

/// Token to start with, if a usable one was remembered.
///
/// An unreadable or blank token file is removed so the next start goes
/// straight to the login screen.
pub fn restore_session(store: &TokenStore) -> Option<StoredToken> {
    match store.load_token() {
        Ok(Some(token)) if !token.is_blank() => {
            tracing::info!("Restored session saved at {}", token.saved_at);
            Some(token)
        }
        Ok(Some(_)) => {
            tracing::warn!("Stored token is blank, discarding");
            forget_session(store);
            None
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Failed to load stored token: {}", e);
            forget_session(store);
            None
        }
    }
}

/// Remove the remembered token. Failures are logged, not returned.
pub fn forget_session(store: &TokenStore) {
    if let Err(e) = store.delete_token() {
        tracing::error!("Failed to delete stored token: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn restores_saved_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path()).unwrap();
        store.save_token(&StoredToken::new("abc")).unwrap();
        assert!(restore_session(&store).is_some());
    }

    #[test]
    fn corrupt_token_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path()).unwrap();
        fs::write(store.path(), "{").unwrap();

        assert!(restore_session(&store).is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn blank_token_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path()).unwrap();
        store.save_token(&StoredToken::new("  ")).unwrap();

        assert!(restore_session(&store).is_none());
        assert!(!store.path().exists());
    }
}
