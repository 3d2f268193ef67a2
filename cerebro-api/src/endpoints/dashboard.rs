use super::Amount;
use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

// Common

/// Everything the dashboard shows, computed server-side in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub user_name: Option<String>,
    pub available_balance: Amount,
    pub monthly_budget: Amount,
    #[serde(default)]
    pub categories: BTreeMap<String, Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub budget: Amount,
    pub spent: Amount,
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryBudget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub budget: Amount,
    pub spent: Amount,
}

impl DashboardSnapshot {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.categories.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

impl Section {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

// Requests

#[derive(Default, Debug, Clone)]
pub struct GetDashboard;

impl GetDashboard {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetDashboard {
    type Response = DashboardSnapshot;

    fn endpoint(&self) -> Cow<'_, str> {
        "/expenses/dashboard".into()
    }
}
