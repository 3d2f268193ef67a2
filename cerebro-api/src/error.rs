use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, broken body).
    Network(reqwest::Error),
    /// The server answered with a non-2xx status.
    Http { status: StatusCode, detail: String },
    /// A request body could not be encoded or a 2xx body could not be decoded.
    Json(serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: extract_detail(body),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided detail text, if the server sent any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    /// A 401 means the session is gone and the user has to log in again.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        ApiError::Network(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Json(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Connection error: {}", e),
            ApiError::Http { status, detail } if detail.is_empty() => write!(f, "({})", status),
            ApiError::Http { status, detail } => write!(f, "({}) {}", status, detail),
            ApiError::Json(e) => write!(f, "Invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: serde_json::Value,
}

/// Error bodies look like `{"detail": "..."}`; validation errors carry a list instead of a string.
fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorResponse { detail }) => detail.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_unwrapped() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"detail":"Sección no existe"}"#);
        assert_eq!(err.detail(), Some("Sección no existe"));
        assert_eq!(err.to_string(), "(400 Bad Request) Sección no existe");
    }

    #[test]
    fn structured_detail_is_kept_as_json() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","amount"],"msg":"field required"}]}"#,
        );
        assert!(err.detail().unwrap().contains("field required"));
    }

    #[test]
    fn plain_body_falls_back_to_text() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error\n");
        assert_eq!(err.detail(), Some("Internal Server Error"));
    }

    #[test]
    fn empty_body_has_no_detail() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.detail(), None);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "(401 Unauthorized)");
    }
}
