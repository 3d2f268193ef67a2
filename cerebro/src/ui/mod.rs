pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::{AppState, Modal};
use chrono::Local;
use components::{alert, form, help_popup, section_detail, stats_detail};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher: current screen, then the open modal, then the
/// help popup and finally any alert. Never mutates state.
pub fn render_app(f: &mut Frame, state: &AppState) {
    match state.current_screen() {
        Screen::Login => login_screen::render(f, state),
        Screen::Dashboard => dashboard_screen::render(f, state),
        Screen::Commitments => commitments_screen::render(f, state),
        Screen::Stats => stats_screen::render(f, state),
    }

    if let Some(modal) = &state.modal {
        render_modal(f, state, modal);
    }

    if state.help_visible {
        help_popup::render_help_popup(f, state.current_screen());
    }

    if let Some(alert) = &state.alert {
        alert::render_alert(f, alert);
    }
}

fn render_modal(f: &mut Frame, state: &AppState, modal: &Modal) {
    let sep = state.preferences.group_separator.as_str();
    match modal {
        Modal::AddExpense(expense_form) => {
            form::render_form_popup(
                f,
                "New expense",
                expense_form,
                "Enter: save | ←/→: change selection | Esc: cancel",
            );
        }
        Modal::AddCommitment(commitment_form) => {
            form::render_form_popup(
                f,
                "New commitment",
                commitment_form,
                "Enter: save | ←/→: debt or loan | Esc: cancel",
            );
        }
        Modal::NewSection(section_form) => {
            form::render_form_popup(
                f,
                "New section",
                section_form,
                "Enter: create | Esc: cancel",
            );
        }
        Modal::Detail(detail) => {
            section_detail::render_section_detail(f, detail, state.snapshot.as_ref(), sep);
        }
        Modal::StatsDetail(kind) => {
            stats_detail::render_stats_detail(
                f,
                *kind,
                state.snapshot.as_ref(),
                Local::now().date_naive(),
                sep,
            );
        }
    }
}
