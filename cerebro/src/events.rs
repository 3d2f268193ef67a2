use crate::model::stats::StatsKind;
use crate::ui::screens::Screen;
use cerebro_api::endpoints::{
    commitments::{Commitment, CommitmentId},
    dashboard::DashboardSnapshot,
    expenses::Expense,
};

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Quit,
    ToggleHelp,
    DismissAlert,
    CloseModal,

    // Navigation
    SwitchScreen(Screen),
    SelectNext,
    SelectPrevious,
    Refresh,

    // Session
    SubmitLogin,
    Logout,

    // Form editing (applies to whichever form is active)
    NavigateFormField {
        forward: bool,
    },
    CycleFormOption {
        forward: bool,
    },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,

    // Expenses
    OpenAddExpense,
    SubmitExpense,

    // Commitments
    OpenAddCommitment,
    SubmitCommitment,
    ToggleCommitment {
        id: CommitmentId,
    },

    // Sections and categories
    OpenDetail {
        section: String,
    },
    OpenNewSection,
    SubmitNewSection,
    PromptEditBudget {
        category: String,
    },
    PromptNewCategory,
    PromptDeleteCategory {
        category: String,
    },
    PromptDeleteSection,
    CancelPrompt,
    SubmitBudgetEdit,
    SubmitNewCategory,
    ConfirmDeleteCategory,
    ConfirmDeleteSection,

    // Statistics
    OpenStatsDetail(StatsKind),
}

/// Data events (background tasks → UI state)
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    // Session
    LoginSucceeded,
    LoginFailed {
        error: String,
    },
    SessionExpired,

    // Loading
    DashboardLoaded {
        snapshot: DashboardSnapshot,
    },
    DashboardLoadFailed {
        error: String,
    },
    ExpensesLoaded {
        expenses: Vec<Expense>,
    },
    ExpensesLoadFailed {
        error: String,
    },
    CommitmentsLoaded {
        commitments: Vec<Commitment>,
    },
    CommitmentsLoadFailed {
        error: String,
    },
    StatisticsLoaded,

    // Mutations
    ExpenseCreated,
    ExpenseCreateFailed {
        error: String,
    },
    CommitmentCreated,
    CommitmentCreateFailed {
        error: String,
    },
    CommitmentUpdateFailed {
        error: String,
    },
    CategoryCreated {
        category: String,
    },
    CategoryUpdated {
        category: String,
    },
    CategoryDeleted {
        category: String,
    },
    CategoryActionFailed {
        error: String,
    },
    SectionCreated {
        section: String,
    },
    SectionCreateFailed {
        error: String,
    },
    /// Cascade finished. `error` holds the last failure, if any.
    SectionDeleted {
        section: String,
        removed: usize,
        total: usize,
        error: Option<String>,
    },
}
