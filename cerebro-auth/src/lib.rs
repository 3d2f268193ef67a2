mod error;
mod models;
mod session;
mod settings;
mod token_storage;

pub use error::AuthError;
pub use models::StoredToken;
pub use session::{forget_session, restore_session};
pub use settings::Settings;
pub use token_storage::TokenStore;
