use crate::error::ApiError;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// A typed API call: where it goes, how its body is encoded, what comes back.
///
/// The body encoding is a property of the endpoint. Login and expense creation
/// post form data, everything else that carries a body sends JSON.
pub trait Request {
    type Response: DeserializeOwned;
    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn body(&self) -> Result<RequestBody, ApiError> {
        Ok(RequestBody::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    Multipart(Vec<Part>),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ApiError> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    /// Look up a field of a form or multipart body by name.
    #[cfg(test)]
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        match self {
            RequestBody::Form(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            RequestBody::Multipart(parts) => parts.iter().find(|p| p.name == name).and_then(|p| {
                match &p.value {
                    PartValue::Text(text) => Some(text.as_str()),
                    PartValue::File { .. } => None,
                }
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File {
                file_name: file_name.into(),
                mime: mime.into(),
                bytes,
            },
        }
    }
}

pub(crate) fn into_multipart(parts: Vec<Part>) -> Result<reqwest::multipart::Form, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part.value {
            PartValue::Text(text) => form.text(part.name, text),
            PartValue::File {
                file_name,
                mime,
                bytes,
            } => {
                let file = reqwest::multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)?;
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}
