use crate::error::ApiError;
use crate::request::{Request, RequestBody};
use reqwest::Method;
use serde::Serialize;
use std::borrow::Cow;

const CATEGORIES_PATH: &str = "/expenses/categories/";

// Requests
//
// All three share one path and differ by method. Section and category names
// together identify a category.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCategory {
    section: String,
    category: String,
    budget: i64,
}

impl CreateCategory {
    pub fn new(section: impl Into<String>, category: impl Into<String>, budget: i64) -> Self {
        Self {
            section: section.into(),
            category: category.into(),
            budget,
        }
    }
}

impl Request for CreateCategory {
    type Response = serde_json::Value;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        CATEGORIES_PATH.into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCategory {
    section: String,
    category: String,
    new_budget: i64,
}

impl UpdateCategory {
    pub fn new(section: impl Into<String>, category: impl Into<String>, new_budget: i64) -> Self {
        Self {
            section: section.into(),
            category: category.into(),
            new_budget,
        }
    }
}

impl Request for UpdateCategory {
    type Response = serde_json::Value;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        CATEGORIES_PATH.into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteCategory {
    section: String,
    category: String,
}

impl DeleteCategory {
    pub fn new(section: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Request for DeleteCategory {
    type Response = serde_json::Value;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        CATEGORIES_PATH.into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(self)
    }
}
