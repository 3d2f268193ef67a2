pub mod form;
pub mod reducer;
pub mod validators;

use crate::model::stats::StatsKind;
use crate::ui::screens::Screen;
use cerebro_api::endpoints::{
    commitments::Commitment, dashboard::DashboardSnapshot, expenses::Expense,
};
use chrono::{DateTime, Local};
use form::Form;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn loading() -> Self {
        LoadingState::Loading(ThrobberState::default())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }
}

/// Question waiting for an answer inside the section detail dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    EditBudget { category: String, form: Form },
    NewCategory(Form),
    ConfirmDeleteCategory { category: String },
    ConfirmDeleteSection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub section: String,
    pub table_state: RefCell<TableState>,
    pub prompt: Option<Prompt>,
    /// A category or section request is in flight.
    pub busy: bool,
}

impl DetailState {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            table_state: RefCell::new(TableState::default().with_selected(0)),
            prompt: None,
            busy: false,
        }
    }
}

/// Overlays drawn on top of the current screen. At most one is open.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    AddExpense(Form),
    Detail(DetailState),
    StatsDetail(StatsKind),
    AddCommitment(Form),
    NewSection(Form),
}

impl Modal {
    pub fn form(&self) -> Option<&Form> {
        match self {
            Modal::AddExpense(form) | Modal::AddCommitment(form) | Modal::NewSection(form) => {
                Some(form)
            }
            Modal::Detail(detail) => match &detail.prompt {
                Some(Prompt::EditBudget { form, .. }) | Some(Prompt::NewCategory(form)) => {
                    Some(form)
                }
                _ => None,
            },
            Modal::StatsDetail(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Modal::AddExpense(form) | Modal::AddCommitment(form) | Modal::NewSection(form) => {
                Some(form)
            }
            Modal::Detail(detail) => match &mut detail.prompt {
                Some(Prompt::EditBudget { form, .. }) | Some(Prompt::NewCategory(form)) => {
                    Some(form)
                }
                _ => None,
            },
            Modal::StatsDetail(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// Blocking message, dismissed with Enter or Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Display preferences loaded from settings
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub group_separator: String,
    pub recent_expenses: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            group_separator: ".".to_string(),
            recent_expenses: 5,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub modal: Option<Modal>,
    pub alert: Option<Alert>,
    pub login_form: Form,

    pub snapshot: Option<DashboardSnapshot>,
    pub expenses: Vec<Expense>,
    pub commitments: Vec<Commitment>,

    pub dashboard_loading: LoadingState,
    pub commitments_loading: LoadingState,
    pub stats_loading: LoadingState,
    pub last_sync: Option<DateTime<Local>>,

    pub sections_table: RefCell<TableState>,
    pub commitments_table: RefCell<TableState>,
    pub stats_table: RefCell<TableState>,

    pub preferences: Preferences,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state on the login screen
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            modal: None,
            alert: None,
            login_form: Form::login(),
            snapshot: None,
            expenses: Vec::new(),
            commitments: Vec::new(),
            dashboard_loading: LoadingState::NotStarted,
            commitments_loading: LoadingState::NotStarted,
            stats_loading: LoadingState::NotStarted,
            last_sync: None,
            sections_table: RefCell::new(TableState::default().with_selected(0)),
            commitments_table: RefCell::new(TableState::default().with_selected(0)),
            stats_table: RefCell::new(TableState::default().with_selected(0)),
            preferences: Preferences::default(),
            help_visible: false,
            should_quit: false,
        }
    }

    /// State for a restored session: dashboard first, data still to load
    pub fn signed_in() -> Self {
        Self {
            screen: Screen::Dashboard,
            ..Self::new()
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Whether a refresh should also reload commitments
    pub fn commitments_visible(&self) -> bool {
        self.screen == Screen::Commitments
    }

    /// The form receiving keystrokes, if any
    pub fn active_form(&self) -> Option<&Form> {
        match &self.modal {
            Some(modal) => modal.form(),
            None if self.screen == Screen::Login => Some(&self.login_form),
            None => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match &mut self.modal {
            Some(modal) => modal.form_mut(),
            None if self.screen == Screen::Login => Some(&mut self.login_form),
            None => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.modal {
            Some(Modal::Detail(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailState> {
        match &mut self.modal {
            Some(Modal::Detail(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn selected_section(&self) -> Option<&str> {
        let index = self.sections_table.borrow().selected()?;
        self.snapshot.as_ref()?.section_names().nth(index)
    }

    /// Selected category inside the open detail dialog
    pub fn selected_category(&self) -> Option<&str> {
        let detail = self.detail()?;
        let index = detail.table_state.borrow().selected()?;
        self.snapshot
            .as_ref()?
            .section(&detail.section)?
            .category_names()
            .nth(index)
    }

    pub fn selected_commitment(&self) -> Option<&Commitment> {
        let index = self.commitments_table.borrow().selected()?;
        self.commitments.get(index)
    }

    pub fn selected_stats_kind(&self) -> StatsKind {
        let index = self.stats_table.borrow().selected().unwrap_or(0);
        StatsKind::ALL[index.min(StatsKind::ALL.len() - 1)]
    }

    /// Throbber of whatever is loading on the current screen
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        let loading = match self.screen {
            Screen::Login => return None,
            Screen::Dashboard => &mut self.dashboard_loading,
            Screen::Commitments => &mut self.commitments_loading,
            Screen::Stats => &mut self.stats_loading,
        };
        match loading {
            LoadingState::Loading(throbber_state) => Some(throbber_state),
            _ => None,
        }
    }

    /// Number of rows in the list the selection keys move through
    fn selectable_len(&self) -> usize {
        if let Some(detail) = self.detail() {
            return self
                .snapshot
                .as_ref()
                .and_then(|s| s.section(&detail.section))
                .map(|section| section.categories.len())
                .unwrap_or(0);
        }
        match self.screen {
            Screen::Login => 0,
            Screen::Dashboard => self.snapshot.as_ref().map_or(0, |s| s.categories.len()),
            Screen::Commitments => self.commitments.len(),
            Screen::Stats => StatsKind::ALL.len(),
        }
    }

    fn selectable_table(&self) -> Option<&RefCell<TableState>> {
        if let Some(detail) = self.detail() {
            return Some(&detail.table_state);
        }
        match self.screen {
            Screen::Login => None,
            Screen::Dashboard => Some(&self.sections_table),
            Screen::Commitments => Some(&self.commitments_table),
            Screen::Stats => Some(&self.stats_table),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.selectable_len();
        if let Some(table) = self.selectable_table() {
            step_selection(table, len, true);
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.selectable_len();
        if let Some(table) = self.selectable_table() {
            step_selection(table, len, false);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a selection one row, wrapping at both ends
pub fn step_selection(table: &RefCell<TableState>, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let mut table_state = table.borrow_mut();
    let current = table_state.selected().unwrap_or(0).min(len - 1);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    table_state.select(Some(next));
}

/// Keep a selection inside a list that may have shrunk
pub fn clamp_selection(table: &RefCell<TableState>, len: usize) {
    let mut table_state = table.borrow_mut();
    match table_state.selected() {
        _ if len == 0 => table_state.select(Some(0)),
        Some(index) if index >= len => table_state.select(Some(len - 1)),
        None => table_state.select(Some(0)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        let table = RefCell::new(TableState::default().with_selected(0));
        step_selection(&table, 3, false);
        assert_eq!(table.borrow().selected(), Some(2));
        step_selection(&table, 3, true);
        assert_eq!(table.borrow().selected(), Some(0));
    }

    #[test]
    fn empty_list_keeps_selection() {
        let table = RefCell::new(TableState::default().with_selected(0));
        step_selection(&table, 0, true);
        assert_eq!(table.borrow().selected(), Some(0));
    }

    #[test]
    fn clamp_pulls_selection_back() {
        let table = RefCell::new(TableState::default().with_selected(5));
        clamp_selection(&table, 2);
        assert_eq!(table.borrow().selected(), Some(1));
    }

    #[test]
    fn login_form_is_active_only_without_modal() {
        let mut state = AppState::new();
        assert!(state.active_form().is_some());
        state.modal = Some(Modal::StatsDetail(StatsKind::General));
        assert!(state.active_form().is_none());
    }
}
