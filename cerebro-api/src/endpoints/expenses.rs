use super::Amount;
use crate::error::ApiError;
use crate::macros::payload_fields;
use crate::request::{Part, Request, RequestBody};
use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Amount,
    pub concept: String,
    #[serde(default)]
    pub section: Option<String>,
    pub category: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Receipt photo attached to a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Receipt {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: i64,
    pub concept: String,
    pub section: String,
    pub category: String,
    pub payment_method: String,
    pub image: Option<Receipt>,
}

impl NewExpense {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            concept: String::new(),
            section: String::new(),
            category: String::new(),
            payment_method: String::new(),
            image: None,
        }
    }

    payload_fields! {
        text concept: String,
        text section: String,
        text category: String,
        text payment_method: String,
        maybe image: Receipt,
    }
}

// Requests

#[derive(Default, Debug, Clone)]
pub struct ListExpenses;

impl ListExpenses {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListExpenses {
    type Response = Vec<Expense>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/expenses/".into()
    }
}

/// Create an expense. Always multipart, with the receipt as an optional file part.
#[derive(Debug, Clone)]
pub struct CreateExpense {
    expense: NewExpense,
}

impl CreateExpense {
    pub fn new(expense: NewExpense) -> Self {
        Self { expense }
    }
}

impl Request for CreateExpense {
    type Response = serde_json::Value;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/expenses/".into()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        let expense = &self.expense;
        let mut parts = vec![
            Part::text("amount", expense.amount.to_string()),
            Part::text("concept", expense.concept.clone()),
            Part::text("section", expense.section.clone()),
            Part::text("category", expense.category.clone()),
            Part::text("payment_method", expense.payment_method.clone()),
        ];
        if let Some(ref image) = expense.image {
            parts.push(Part::file(
                "image",
                image.file_name.clone(),
                image.mime.clone(),
                image.bytes.clone(),
            ));
        }
        Ok(RequestBody::Multipart(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PartValue;

    #[test]
    fn expense_decodes_without_optional_fields() {
        let json = r#"[{"id": 7, "amount": 4500, "concept": "Almuerzo", "category": "General", "date": "2025-03-14"}]"#;
        let expenses: Vec<Expense> = serde_json::from_str(json).unwrap();
        assert_eq!(expenses[0].id, 7);
        assert_eq!(expenses[0].section, None);
        assert_eq!(expenses[0].payment_method, None);
        assert_eq!(expenses[0].date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn create_expense_sends_every_text_field() {
        let req = CreateExpense::new(
            NewExpense::new(123)
                .concept("  Bencina ")
                .section("TRANSPORTE")
                .category("Auto")
                .payment_method("EFECTIVO"),
        );
        let body = req.body().unwrap();
        assert_eq!(body.field("amount"), Some("123"));
        assert_eq!(body.field("concept"), Some("Bencina"));
        assert_eq!(body.field("section"), Some("TRANSPORTE"));
        assert_eq!(body.field("category"), Some("Auto"));
        assert_eq!(body.field("payment_method"), Some("EFECTIVO"));
        let RequestBody::Multipart(parts) = body else {
            panic!("expense creation must be multipart");
        };
        assert!(parts.iter().all(|p| p.name != "image"));
    }

    #[test]
    fn receipt_becomes_file_part() {
        let req = CreateExpense::new(
            NewExpense::new(10).image(Receipt::new("boleta.JPG", vec![0xFF, 0xD8])),
        );
        let RequestBody::Multipart(parts) = req.body().unwrap() else {
            panic!("expense creation must be multipart");
        };
        let image = parts.iter().find(|p| p.name == "image").unwrap();
        assert_eq!(
            image.value,
            PartValue::File {
                file_name: "boleta.JPG".to_string(),
                mime: "image/jpeg".to_string(),
                bytes: vec![0xFF, 0xD8],
            }
        );
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(Receipt::new("scan", vec![]).mime, "application/octet-stream");
        assert_eq!(Receipt::new("ticket.png", vec![]).mime, "image/png");
    }
}
