use crate::state::form::Form;
use cerebro_api::endpoints::{
    commitments::{CommitmentKind, NewCommitment},
    expenses::NewExpense,
    Amount,
};
use chrono::NaiveDate;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: SecretString,
    pub remember: bool,
}

/// A validated expense. The receipt is read from disk when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub expense: NewExpense,
    pub receipt: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSectionInput {
    pub section: String,
    pub category: String,
    pub budget: i64,
}

/// Parse a required whole-number amount
pub fn validate_amount(input: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Amount is required".to_string());
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("Invalid amount '{}'. Use whole numbers only", trimmed))
}

/// Optional budgets fall back to 0 when empty or unparseable
fn budget_or_zero(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

fn required(form: &Form, name: &str, label: &str) -> Result<String, String> {
    let value = form.value(name).trim();
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value.to_string())
    }
}

pub fn validate_login(form: &Form) -> Result<LoginInput, String> {
    let username = required(form, "username", "Email")?;
    // Passwords are taken verbatim
    let password = form.value("password");
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    Ok(LoginInput {
        username,
        password: SecretString::from(password.to_string()),
        remember: form.is_checked("remember"),
    })
}

pub fn validate_expense(form: &Form) -> Result<ExpenseDraft, String> {
    let amount = validate_amount(form.value("amount"))?;

    let receipt = match form.value("receipt").trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    };

    let expense = NewExpense::new(amount)
        .concept(form.value("concept"))
        .section(form.value("section"))
        .category(form.value("category"))
        .payment_method(form.value("payment_method"));

    Ok(ExpenseDraft { expense, receipt })
}

pub fn validate_commitment(form: &Form) -> Result<NewCommitment, String> {
    let title = required(form, "title", "Title")?;
    let kind = match form.value("type") {
        "LOAN" => CommitmentKind::Loan,
        _ => CommitmentKind::Debt,
    };
    let amount = validate_amount(form.value("amount"))?;

    let commitment = NewCommitment::new(title, kind, Amount::new(amount));
    match form.value("due_date").trim() {
        "" => Ok(commitment),
        date => {
            let due_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| format!("Invalid due date '{}'. Use YYYY-MM-DD", date))?;
            Ok(commitment.due_date(due_date))
        }
    }
}

pub fn validate_new_category(form: &Form) -> Result<(String, i64), String> {
    let name = required(form, "category", "Category name")?;
    Ok((name, budget_or_zero(form.value("budget"))))
}

pub fn validate_budget_edit(form: &Form) -> Result<i64, String> {
    validate_amount(form.value("budget"))
}

pub fn validate_new_section(form: &Form) -> Result<NewSectionInput, String> {
    let section = required(form, "section", "Section name")?.to_uppercase();
    let category = required(form, "category", "First category")?;

    Ok(NewSectionInput {
        section,
        category,
        budget: budget_or_zero(form.value("budget")),
    })
}
