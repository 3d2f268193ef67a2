use crate::error::ApiError;
use crate::request::{Request, RequestBody};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Requests

/// Exchange credentials for a bearer token. Sent as form data.
#[derive(Debug, Clone)]
pub struct Login {
    username: String,
    password: SecretString,
}

impl Login {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl Request for Login {
    type Response = LoginResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/auth/login".into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        Ok(RequestBody::Form(vec![
            ("username".to_string(), self.username.clone()),
            (
                "password".to_string(),
                self.password.expose_secret().to_string(),
            ),
        ]))
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
