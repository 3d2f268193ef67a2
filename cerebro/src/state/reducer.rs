use super::{clamp_selection, form::Form, Alert, AppState, LoadingState, Modal};
use crate::events::DataEvent;
use crate::ui::screens::Screen;
use chrono::Local;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::LoginSucceeded => {
            state.login_form = Form::login();
            state.screen = Screen::Dashboard;
            state.dashboard_loading = LoadingState::loading();
        }

        DataEvent::LoginFailed { error } => {
            state.login_form.submitting = false;
            state.login_form.error = Some(error);
        }

        // Any 401 lands here: drop everything the old session loaded
        DataEvent::SessionExpired => {
            let preferences = std::mem::take(&mut state.preferences);
            *state = AppState::new();
            state.preferences = preferences;
            state.login_form.error = Some("Session expired, please log in again".to_string());
        }

        DataEvent::DashboardLoaded { snapshot } => {
            clamp_selection(&state.sections_table, snapshot.categories.len());
            state.snapshot = Some(snapshot);
            state.dashboard_loading = LoadingState::Loaded;
            state.last_sync = Some(Local::now());

            // Open dialogs pick up renamed or removed sections
            let snapshot = state.snapshot.as_ref();
            match state.modal.as_mut() {
                Some(Modal::AddExpense(form)) => form.sync_sections(snapshot),
                Some(Modal::Detail(detail)) => {
                    let len = snapshot
                        .and_then(|s| s.section(&detail.section))
                        .map_or(0, |section| section.categories.len());
                    clamp_selection(&detail.table_state, len);
                }
                _ => {}
            }
        }

        DataEvent::DashboardLoadFailed { error } => {
            state.dashboard_loading = LoadingState::Error(error);
        }

        DataEvent::ExpensesLoaded { expenses } => {
            state.expenses = expenses;
        }

        DataEvent::ExpensesLoadFailed { error } => {
            tracing::warn!("Recent expenses unavailable: {}", error);
        }

        DataEvent::CommitmentsLoaded { commitments } => {
            clamp_selection(&state.commitments_table, commitments.len());
            state.commitments = commitments;
            state.commitments_loading = LoadingState::Loaded;
        }

        DataEvent::CommitmentsLoadFailed { error } => {
            state.commitments_loading = LoadingState::Error(error);
        }

        DataEvent::StatisticsLoaded => {
            state.stats_loading = LoadingState::Loaded;
        }

        DataEvent::ExpenseCreated => {
            if matches!(state.modal, Some(Modal::AddExpense(_))) {
                state.modal = None;
            }
        }

        DataEvent::ExpenseCreateFailed { error } => {
            fail_form_submit(state, format!("Failed to save expense: {}", error));
        }

        DataEvent::CommitmentCreated => {
            if matches!(state.modal, Some(Modal::AddCommitment(_))) {
                state.modal = None;
            }
        }

        DataEvent::CommitmentCreateFailed { error } => {
            fail_form_submit(state, format!("Failed to save commitment: {}", error));
        }

        DataEvent::CommitmentUpdateFailed { error } => {
            state.alert = Some(Alert::error(format!(
                "Failed to update commitment: {}",
                error
            )));
        }

        DataEvent::CategoryCreated { category } => {
            tracing::debug!("Category {} created", category);
            close_detail(state);
        }

        DataEvent::CategoryUpdated { category } => {
            close_detail(state);
            state.alert = Some(Alert::info(format!("Budget updated for {}", category)));
        }

        DataEvent::CategoryDeleted { category } => {
            close_detail(state);
            state.alert = Some(Alert::info(format!("Category {} deleted", category)));
        }

        DataEvent::CategoryActionFailed { error } => {
            if let Some(detail) = state.detail_mut() {
                detail.prompt = None;
                detail.busy = false;
            }
            state.alert = Some(Alert::error(error));
        }

        DataEvent::SectionCreated { section } => {
            if matches!(state.modal, Some(Modal::NewSection(_))) {
                state.modal = None;
            }
            state.alert = Some(Alert::info(format!("Section {} created", section)));
        }

        DataEvent::SectionCreateFailed { error } => {
            fail_form_submit(state, format!("Failed to create section: {}", error));
        }

        DataEvent::SectionDeleted {
            section,
            removed,
            total,
            error,
        } => {
            close_detail(state);
            state.alert = Some(match error {
                None => Alert::info(format!(
                    "Section {} deleted ({} categories)",
                    section, removed
                )),
                Some(error) => Alert::error(format!(
                    "Removed {} of {} categories from {}. Last error: {}",
                    removed, total, section, error
                )),
            });
        }
    }
}

fn close_detail(state: &mut AppState) {
    if matches!(state.modal, Some(Modal::Detail(_))) {
        state.modal = None;
    }
}

/// Re-enable the open form and show the failure as an alert
fn fail_form_submit(state: &mut AppState, message: String) {
    if let Some(form) = state.modal.as_mut().and_then(Modal::form_mut) {
        form.submitting = false;
    }
    state.alert = Some(Alert::error(message));
}
