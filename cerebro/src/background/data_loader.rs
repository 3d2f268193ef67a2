use crate::events::DataEvent;
use crate::model::commitments::toggled;
use crate::state::validators::{ExpenseDraft, NewSectionInput};
use cerebro_api::{
    endpoints::{
        commitments::{Commitment, NewCommitment},
        expenses::Receipt,
    },
    ApiError, Client, Request,
};
use cerebro_auth::{forget_session, StoredToken, TokenStore};
use secrecy::SecretString;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::mpsc;

/// Runs API calls off the UI loop and reports results as data events
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub token_store: Arc<TokenStore>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
    refresh_generation: Arc<AtomicU64>,
}

impl DataLoader {
    pub fn new(
        api_client: Arc<Client>,
        token_store: Arc<TokenStore>,
        data_tx: mpsc::UnboundedSender<DataEvent>,
    ) -> Self {
        Self {
            api_client,
            token_store,
            data_tx,
            refresh_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Exchange credentials for a token, then load the dashboard
    pub async fn login(&self, username: String, password: SecretString, remember: bool) {
        tracing::info!("Logging in as {}", username);

        let req = Request::auth().login(username, password);
        match self.api_client.send(req).await {
            Ok(response) => {
                let token = StoredToken::new(response.access_token);
                self.api_client.set_token(Some(token.secret()));
                if remember {
                    if let Err(e) = self.token_store.save_token(&token) {
                        tracing::warn!("Could not remember session: {}", e);
                    }
                }
                tracing::info!("Login succeeded (remember={})", remember);
                let _ = self.data_tx.send(DataEvent::LoginSucceeded);
                self.refresh_all(false).await;
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                let error = if e.is_unauthorized() {
                    "Invalid credentials".to_string()
                } else if e.is_network() {
                    "Connection error".to_string()
                } else {
                    e.to_string()
                };
                let _ = self.data_tx.send(DataEvent::LoginFailed { error });
            }
        }
    }

    /// Drop the token from the client and from disk
    pub fn end_session(&self) {
        self.api_client.set_token(None);
        forget_session(&self.token_store);
    }

    fn expire_session(&self) {
        tracing::warn!("Session rejected by server, returning to login");
        self.end_session();
        let _ = self.data_tx.send(DataEvent::SessionExpired);
    }

    /// Route a failed call: a 401 ends the session, anything else becomes the given event
    fn report_failure(&self, e: &ApiError, event: impl FnOnce(String) -> DataEvent) {
        if e.is_unauthorized() {
            self.expire_session();
        } else {
            let _ = self.data_tx.send(event(failure_message(e)));
        }
    }

    /// Dashboard, then recent expenses, then commitments when that view is open.
    ///
    /// Refreshes may overlap (a manual one and the one after a mutation). Only
    /// the most recently started refresh reports what it loaded.
    pub async fn refresh_all(&self, include_commitments: bool) {
        let generation = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.load_dashboard(generation).await {
            return;
        }
        if !self.load_expenses(generation).await {
            return;
        }
        if include_commitments && self.is_latest(generation) {
            self.load_commitments().await;
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.refresh_generation.load(Ordering::SeqCst) == generation
    }

    /// Returns false when the rest of the refresh should be skipped
    async fn load_dashboard(&self, generation: u64) -> bool {
        tracing::info!("Loading dashboard");
        let result = self.api_client.send(Request::dashboard().get()).await;
        if !self.is_latest(generation) {
            tracing::debug!("Dropping dashboard from superseded refresh {}", generation);
            return false;
        }

        match result {
            Ok(snapshot) => {
                tracing::debug!("Loaded dashboard with {} sections", snapshot.categories.len());
                let _ = self.data_tx.send(DataEvent::DashboardLoaded { snapshot });
                true
            }
            Err(e) if e.is_unauthorized() => {
                self.expire_session();
                false
            }
            Err(e) => {
                tracing::error!("Failed to load dashboard: {}", e);
                let error = match e.status() {
                    Some(status) => format!("Err {}", status.as_u16()),
                    None if e.is_network() => "Err connection".to_string(),
                    None => "Err invalid data".to_string(),
                };
                let _ = self.data_tx.send(DataEvent::DashboardLoadFailed { error });
                true
            }
        }
    }

    async fn load_expenses(&self, generation: u64) -> bool {
        tracing::debug!("Loading expenses");
        let result = self.api_client.send(Request::expenses().list()).await;
        if !self.is_latest(generation) {
            tracing::debug!("Dropping expenses from superseded refresh {}", generation);
            return false;
        }

        match result {
            Ok(expenses) => {
                let _ = self.data_tx.send(DataEvent::ExpensesLoaded { expenses });
                true
            }
            Err(e) if e.is_unauthorized() => {
                self.expire_session();
                false
            }
            Err(e) => {
                tracing::error!("Failed to load expenses: {}", e);
                let _ = self.data_tx.send(DataEvent::ExpensesLoadFailed {
                    error: e.to_string(),
                });
                true
            }
        }
    }

    pub async fn load_commitments(&self) {
        tracing::info!("Loading commitments");
        match self.api_client.send(Request::commitments().list()).await {
            Ok(commitments) => {
                tracing::debug!("Loaded {} commitments", commitments.len());
                let _ = self
                    .data_tx
                    .send(DataEvent::CommitmentsLoaded { commitments });
            }
            Err(e) => {
                tracing::error!("Failed to load commitments: {}", e);
                self.report_failure(&e, |error| DataEvent::CommitmentsLoadFailed { error });
            }
        }
    }

    /// Statistics are derived from the dashboard snapshot; there is nothing to fetch
    pub async fn load_statistics(&self) {
        tracing::debug!("Statistics view opened");
        let _ = self.data_tx.send(DataEvent::StatisticsLoaded);
    }

    pub async fn create_expense(&self, draft: ExpenseDraft, include_commitments: bool) {
        let ExpenseDraft {
            mut expense,
            receipt,
        } = draft;

        if let Some(path) = receipt {
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let file_name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "receipt".to_string());
                    expense = expense.image(Receipt::new(file_name, bytes));
                }
                Err(e) => {
                    tracing::warn!("Could not read receipt {}: {}", path.display(), e);
                    let _ = self.data_tx.send(DataEvent::ExpenseCreateFailed {
                        error: format!("Could not read receipt {}: {}", path.display(), e),
                    });
                    return;
                }
            }
        }

        tracing::info!("Creating expense of {} in {}", expense.amount, expense.section);
        match self.api_client.send(Request::expenses().create(expense)).await {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::ExpenseCreated);
                self.refresh_all(include_commitments).await;
            }
            Err(e) => {
                tracing::error!("Failed to create expense: {}", e);
                self.report_failure(&e, |error| DataEvent::ExpenseCreateFailed { error });
            }
        }
    }

    pub async fn create_commitment(&self, commitment: NewCommitment) {
        tracing::info!("Creating commitment {}", commitment.title);
        match self
            .api_client
            .send(Request::commitments().create(commitment))
            .await
        {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::CommitmentCreated);
                self.load_commitments().await;
            }
            Err(e) => {
                tracing::error!("Failed to create commitment: {}", e);
                self.report_failure(&e, |error| DataEvent::CommitmentCreateFailed { error });
            }
        }
    }

    pub async fn toggle_commitment(&self, commitment: Commitment) {
        let update = toggled(&commitment);
        tracing::info!(
            "Marking commitment {} as {:?}",
            commitment.id,
            update.status
        );
        let req = Request::commitments().update(commitment.id, update.status, update.paid_amount);
        match self.api_client.send(req).await {
            Ok(_) => self.load_commitments().await,
            Err(e) => {
                tracing::error!("Failed to update commitment {}: {}", commitment.id, e);
                self.report_failure(&e, |error| DataEvent::CommitmentUpdateFailed { error });
            }
        }
    }

    pub async fn create_category(
        &self,
        section: String,
        category: String,
        budget: i64,
        include_commitments: bool,
    ) {
        tracing::info!("Creating category {}/{}", section, category);
        let req = Request::categories().create(section, category.clone(), budget);
        match self.api_client.send(req).await {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::CategoryCreated { category });
                self.refresh_all(include_commitments).await;
            }
            Err(e) => {
                tracing::error!("Failed to create category: {}", e);
                self.report_failure(&e, |error| DataEvent::CategoryActionFailed { error });
            }
        }
    }

    pub async fn update_category(
        &self,
        section: String,
        category: String,
        budget: i64,
        include_commitments: bool,
    ) {
        tracing::info!("Setting budget of {}/{} to {}", section, category, budget);
        let req = Request::categories().update(section, category.clone(), budget);
        match self.api_client.send(req).await {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::CategoryUpdated { category });
                self.refresh_all(include_commitments).await;
            }
            Err(e) => {
                tracing::error!("Failed to update category: {}", e);
                self.report_failure(&e, |error| DataEvent::CategoryActionFailed { error });
            }
        }
    }

    pub async fn delete_category(
        &self,
        section: String,
        category: String,
        include_commitments: bool,
    ) {
        tracing::info!("Deleting category {}/{}", section, category);
        let req = Request::categories().delete(section, category.clone());
        match self.api_client.send(req).await {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::CategoryDeleted { category });
                self.refresh_all(include_commitments).await;
            }
            Err(e) => {
                tracing::error!("Failed to delete category: {}", e);
                self.report_failure(&e, |error| DataEvent::CategoryActionFailed { error });
            }
        }
    }

    /// A section exists through its categories, so creating one means creating its first category
    pub async fn create_section(&self, input: NewSectionInput, include_commitments: bool) {
        tracing::info!("Creating section {}", input.section);
        let req =
            Request::categories().create(input.section.clone(), input.category, input.budget);
        match self.api_client.send(req).await {
            Ok(_) => {
                let _ = self.data_tx.send(DataEvent::SectionCreated {
                    section: input.section,
                });
                self.refresh_all(include_commitments).await;
            }
            Err(e) => {
                tracing::error!("Failed to create section: {}", e);
                self.report_failure(&e, |error| DataEvent::SectionCreateFailed { error });
            }
        }
    }

    /// Delete every category of a section, one request at a time.
    ///
    /// Keeps going after a failure and reports how many were removed. Nothing
    /// is rolled back. A 401 stops the loop and ends the session.
    pub async fn delete_section(
        &self,
        section: String,
        categories: Vec<String>,
        include_commitments: bool,
    ) {
        tracing::info!(
            "Deleting section {} ({} categories)",
            section,
            categories.len()
        );
        let total = categories.len();
        let mut removed = 0;
        let mut last_error = None;

        for category in categories {
            let req = Request::categories().delete(section.clone(), category.clone());
            match self.api_client.send(req).await {
                Ok(_) => removed += 1,
                Err(e) if e.is_unauthorized() => {
                    self.expire_session();
                    return;
                }
                Err(e) => {
                    tracing::error!("Failed to delete {}/{}: {}", section, category, e);
                    last_error = Some(failure_message(&e));
                }
            }
        }

        let _ = self.data_tx.send(DataEvent::SectionDeleted {
            section,
            removed,
            total,
            error: last_error,
        });
        self.refresh_all(include_commitments).await;
    }
}

/// Server-provided detail when there is one, the full error otherwise
fn failure_message(e: &ApiError) -> String {
    e.detail()
        .map(str::to_string)
        .unwrap_or_else(|| e.to_string())
}
