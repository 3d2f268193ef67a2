use super::Amount;
use crate::error::ApiError;
use crate::macros::payload_fields;
use crate::request::{Request, RequestBody};
use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommitmentId(i64);

impl CommitmentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CommitmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Money I owe (`Debt`) or money owed to me (`Loan`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommitmentKind {
    Debt,
    Loan,
}

impl std::fmt::Display for CommitmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debt => f.write_str("Debt"),
            Self::Loan => f.write_str("Loan"),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommitmentStatus {
    #[default]
    Pending,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    pub id: CommitmentId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CommitmentKind,
    pub total_amount: Amount,
    #[serde(default)]
    pub paid_amount: Amount,
    #[serde(default)]
    pub status: CommitmentStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Commitment {
    pub fn is_paid(&self) -> bool {
        self.status == CommitmentStatus::Paid
    }

    pub fn remaining(&self) -> Amount {
        self.total_amount - self.paid_amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCommitment {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CommitmentKind,
    pub total_amount: Amount,
    pub due_date: Option<NaiveDate>,
    pub status: CommitmentStatus,
}

impl NewCommitment {
    pub fn new(title: impl Into<String>, kind: CommitmentKind, total_amount: Amount) -> Self {
        Self {
            title: title.into(),
            kind,
            total_amount,
            due_date: None,
            status: CommitmentStatus::Pending,
        }
    }

    payload_fields! {
        maybe due_date: NaiveDate,
    }
}

/// Status change for an existing commitment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommitmentUpdate {
    pub status: CommitmentStatus,
    pub paid_amount: Amount,
}

// Requests

#[derive(Default, Debug, Clone)]
pub struct ListCommitments;

impl ListCommitments {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListCommitments {
    type Response = Vec<Commitment>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/commitments/".into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommitment {
    commitment: NewCommitment,
}

impl CreateCommitment {
    pub fn new(commitment: NewCommitment) -> Self {
        Self { commitment }
    }
}

impl Request for CreateCommitment {
    type Response = serde_json::Value;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/commitments/".into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self.commitment)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommitment {
    id: CommitmentId,
    update: CommitmentUpdate,
}

impl UpdateCommitment {
    pub fn new(id: CommitmentId, update: CommitmentUpdate) -> Self {
        Self { id, update }
    }
}

impl Request for UpdateCommitment {
    type Response = serde_json::Value;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/commitments/{}", self.id).into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self.update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn commitment_decodes_uppercase_enums() {
        let json = r#"{"id": 3, "title": "Préstamo Juan", "type": "LOAN",
                       "total_amount": 50000, "paid_amount": 0, "status": "PENDING",
                       "due_date": "2025-12-01"}"#;
        let c: Commitment = serde_json::from_str(json).unwrap();
        assert_eq!(c.kind, CommitmentKind::Loan);
        assert_eq!(c.status, CommitmentStatus::Pending);
        assert_eq!(c.due_date, NaiveDate::from_ymd_opt(2025, 12, 1));
        assert_eq!(c.remaining(), Amount::new(50000));
    }

    #[test]
    fn new_commitment_sends_null_due_date() {
        let req = CreateCommitment::new(NewCommitment::new(
            "Tarjeta",
            CommitmentKind::Debt,
            Amount::new(120000),
        ));
        assert_eq!(
            req.body().unwrap(),
            RequestBody::Json(json!({
                "title": "Tarjeta",
                "type": "DEBT",
                "total_amount": 120000,
                "due_date": null,
                "status": "PENDING"
            }))
        );
    }

    #[test]
    fn update_targets_commitment_path() {
        let req = UpdateCommitment::new(
            CommitmentId::new(42),
            CommitmentUpdate {
                status: CommitmentStatus::Paid,
                paid_amount: Amount::new(900),
            },
        );
        assert_eq!(req.endpoint(), "/commitments/42");
        assert_eq!(
            req.body().unwrap(),
            RequestBody::Json(json!({"status": "PAID", "paid_amount": 900}))
        );
    }
}
