pub mod endpoints;
mod error;
mod macros;
pub mod repositories;
mod request;

pub use crate::error::ApiError;
pub use crate::request::{Part, PartValue, Request as ApiRequest, RequestBody};
use repositories::*;
use secrecy::{ExposeSecret, SecretString};
use std::sync::RwLock;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001/api/v1";

/// HTTP gateway to the finance API.
///
/// Holds at most one bearer token. Requests go out with `Authorization: Bearer`
/// when a token is installed and without it otherwise.
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    pub fn with_token(self, access_token: SecretString) -> Self {
        self.set_token(Some(access_token));
        self
    }

    pub fn set_token(&self, access_token: Option<SecretString>) {
        if let Ok(mut token) = self.token.write() {
            *token = access_token;
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.read().map(|t| t.is_some()).unwrap_or(false)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|s| s.expose_secret().to_string()))
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, ApiError>
    where
        R: ApiRequest,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let mut builder = self.inner.request(R::METHOD, &url);

        if let Some(token) = self.bearer() {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body()? {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(parts) => builder.multipart(request::into_multipart(parts)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text));
        }

        // Mutation endpoints may answer with an empty body.
        let text = if text.trim().is_empty() { "null" } else { &text };
        Ok(serde_json::from_str(text)?)
    }
}

pub struct Request;

impl Request {
    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn dashboard() -> DashboardRepository {
        DashboardRepository::new()
    }

    pub fn expenses() -> ExpenseRepository {
        ExpenseRepository::new()
    }

    pub fn categories() -> CategoryRepository {
        CategoryRepository::new()
    }

    pub fn commitments() -> CommitmentRepository {
        CommitmentRepository::new()
    }
}
