use crate::endpoints::{
    Amount,
    auth::Login,
    categories::{CreateCategory, DeleteCategory, UpdateCategory},
    commitments::{
        CommitmentId, CommitmentUpdate, CreateCommitment, ListCommitments, NewCommitment,
        UpdateCommitment,
    },
    dashboard::GetDashboard,
    expenses::{CreateExpense, ListExpenses, NewExpense},
};
use secrecy::SecretString;

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn login(&self, username: impl Into<String>, password: SecretString) -> Login {
        Login::new(username, password)
    }
}

pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get(&self) -> GetDashboard {
        GetDashboard::new()
    }
}

pub struct ExpenseRepository;

impl ExpenseRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListExpenses {
        ListExpenses::new()
    }

    pub fn create(&self, expense: NewExpense) -> CreateExpense {
        CreateExpense::new(expense)
    }
}

pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn create(
        &self,
        section: impl Into<String>,
        category: impl Into<String>,
        budget: i64,
    ) -> CreateCategory {
        CreateCategory::new(section, category, budget)
    }

    pub fn update(
        &self,
        section: impl Into<String>,
        category: impl Into<String>,
        new_budget: i64,
    ) -> UpdateCategory {
        UpdateCategory::new(section, category, new_budget)
    }

    pub fn delete(&self, section: impl Into<String>, category: impl Into<String>) -> DeleteCategory {
        DeleteCategory::new(section, category)
    }
}

pub struct CommitmentRepository;

impl CommitmentRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCommitments {
        ListCommitments::new()
    }

    pub fn create(&self, commitment: NewCommitment) -> CreateCommitment {
        CreateCommitment::new(commitment)
    }

    pub fn update(
        &self,
        id: CommitmentId,
        status: crate::endpoints::commitments::CommitmentStatus,
        paid_amount: Amount,
    ) -> UpdateCommitment {
        UpdateCommitment::new(
            id,
            CommitmentUpdate {
                status,
                paid_amount,
            },
        )
    }
}
