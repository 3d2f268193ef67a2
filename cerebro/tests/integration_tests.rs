use cerebro::events::DataEvent;
use cerebro::input::{Key, KeyEvent};
use cerebro::state::{form::Form, AlertKind, LoadingState, Modal, Prompt};
use cerebro::testing::TestApp;
use cerebro::ui::screens::Screen;
use cerebro_api::endpoints::{
    commitments::{Commitment, CommitmentId, CommitmentKind, CommitmentStatus},
    dashboard::{CategoryBudget, DashboardSnapshot, Section},
    Amount,
};
use std::collections::BTreeMap;

fn category(budget: i64, spent: i64) -> CategoryBudget {
    CategoryBudget {
        budget: Amount::new(budget),
        spent: Amount::new(spent),
    }
}

fn test_snapshot() -> DashboardSnapshot {
    let mut comida = BTreeMap::new();
    comida.insert("Almuerzo".to_string(), category(200, 250));
    comida.insert("Cafe".to_string(), category(100, 80));

    let mut transporte = BTreeMap::new();
    transporte.insert("Bencina".to_string(), category(150, 50));

    let mut sections = BTreeMap::new();
    sections.insert(
        "COMIDA".to_string(),
        Section {
            budget: Amount::new(300),
            spent: Amount::new(330),
            categories: comida,
        },
    );
    sections.insert(
        "TRANSPORTE".to_string(),
        Section {
            budget: Amount::new(150),
            spent: Amount::new(50),
            categories: transporte,
        },
    );

    DashboardSnapshot {
        user_name: Some("Christian".to_string()),
        available_balance: Amount::new(200),
        monthly_budget: Amount::new(1000),
        categories: sections,
    }
}

fn test_commitment(id: i64, status: CommitmentStatus) -> Commitment {
    Commitment {
        id: CommitmentId::new(id),
        title: format!("Commitment {}", id),
        kind: CommitmentKind::Debt,
        total_amount: Amount::new(1000),
        paid_amount: Amount::ZERO,
        status,
        due_date: None,
    }
}

/// Signed-in app with the dashboard already loaded
fn loaded_app() -> TestApp {
    let mut app = TestApp::signed_in();
    app.send_data_event(DataEvent::DashboardLoaded {
        snapshot: test_snapshot(),
    });
    app
}

fn open_form(app: &TestApp) -> &Form {
    app.state().active_form().expect("a form should be open")
}

#[test]
fn test_esc_quits_from_login() {
    let mut app = TestApp::new();
    app.assert_screen(Screen::Login);
    app.assert_not_quit();

    app.send_key(Key::Esc);

    app.assert_should_quit();
}

#[test]
fn test_q_is_typed_into_login_form() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('q'));

    app.assert_not_quit();
    assert_eq!(app.state().login_form.value("username"), "q");
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut app = TestApp::new();

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));

    app.assert_should_quit();
}

#[test]
fn test_quit_from_dashboard() {
    let mut app = loaded_app();

    app.send_key(Key::Char('q'));

    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = loaded_app();
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Navigation is blocked while help is open
    app.send_key(Key::Char('2'));
    app.assert_screen(Screen::Dashboard);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_login_submit_and_success() {
    let mut app = TestApp::new();

    app.type_text("christian@cerebro.com");
    app.send_key(Key::Tab);
    app.type_text("123456");
    app.send_key(Key::Enter);

    assert!(app.state().login_form.submitting);
    assert!(app.state().login_form.error.is_none());

    // A second Enter while the request runs changes nothing
    app.send_key(Key::Enter);
    assert!(app.state().login_form.submitting);

    app.send_data_event(DataEvent::LoginSucceeded);
    app.assert_screen(Screen::Dashboard);
    assert!(app.state().dashboard_loading.is_loading());
}

#[test]
fn test_login_requires_password() {
    let mut app = TestApp::new();

    app.type_text("christian@cerebro.com");
    app.send_key(Key::Enter);

    assert!(!app.state().login_form.submitting);
    assert_eq!(
        app.state().login_form.error.as_deref(),
        Some("Password is required")
    );
}

#[test]
fn test_invalid_login_stays_on_login_with_error() {
    let mut app = TestApp::new();
    app.type_text("christian@cerebro.com");
    app.send_key(Key::Tab);
    app.type_text("wrong");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::LoginFailed {
        error: "Invalid credentials".to_string(),
    });

    app.assert_screen(Screen::Login);
    assert!(!app.state().login_form.submitting);
    assert_eq!(
        app.state().login_form.error.as_deref(),
        Some("Invalid credentials")
    );
}

#[test]
fn test_remember_me_toggles_with_space() {
    let mut app = TestApp::new();
    assert!(app.state().login_form.is_checked("remember"));

    app.send_keys(&[Key::Tab, Key::Tab, Key::Char(' ')]);

    assert!(!app.state().login_form.is_checked("remember"));
}

#[test]
fn test_number_keys_switch_screens() {
    let mut app = loaded_app();

    app.send_key(Key::Char('2'));
    app.assert_screen(Screen::Commitments);
    assert!(app.state().commitments_loading.is_loading());

    app.send_key(Key::Char('3'));
    app.assert_screen(Screen::Stats);
    assert!(app.state().stats_loading.is_loading());

    app.send_data_event(DataEvent::StatisticsLoaded);
    assert_eq!(app.state().stats_loading, LoadingState::Loaded);

    app.send_key(Key::Char('1'));
    app.assert_screen(Screen::Dashboard);
}

#[test]
fn test_tab_cycles_screens() {
    let mut app = loaded_app();

    app.send_key(Key::Tab);
    app.assert_screen(Screen::Commitments);
    app.send_key(Key::Tab);
    app.assert_screen(Screen::Stats);
    app.send_key(Key::Tab);
    app.assert_screen(Screen::Dashboard);
    app.send_key(Key::BackTab);
    app.assert_screen(Screen::Stats);
}

#[test]
fn test_dashboard_error_shows_in_sync_status() {
    let mut app = TestApp::signed_in();

    app.send_data_event(DataEvent::DashboardLoadFailed {
        error: "Err 500".to_string(),
    });

    app.assert_screen(Screen::Dashboard);
    assert_eq!(
        app.state().dashboard_loading,
        LoadingState::Error("Err 500".to_string())
    );
}

#[test]
fn test_selection_moves_through_sections() {
    let mut app = loaded_app();
    assert_eq!(app.state().selected_section(), Some("COMIDA"));

    app.send_key(Key::Char('j'));
    assert_eq!(app.state().selected_section(), Some("TRANSPORTE"));

    // Wraps back to the top
    app.send_key(Key::Down);
    assert_eq!(app.state().selected_section(), Some("COMIDA"));

    app.send_key(Key::Char('k'));
    assert_eq!(app.state().selected_section(), Some("TRANSPORTE"));
}

#[test]
fn test_open_detail_and_edit_budget() {
    let mut app = loaded_app();

    app.send_key(Key::Enter);
    let detail = app.state().detail().expect("detail should be open");
    assert_eq!(detail.section, "COMIDA");

    app.send_key(Key::Char('e'));
    let form = open_form(&app);
    assert_eq!(form.value("budget"), "200");

    app.send_keys(&[Key::Backspace, Key::Backspace, Key::Backspace]);
    app.type_text("250");
    app.send_key(Key::Enter);

    assert!(app.state().detail().unwrap().busy);

    app.send_data_event(DataEvent::CategoryUpdated {
        category: "Almuerzo".to_string(),
    });

    assert!(app.state().modal.is_none());
    let alert = app.state().alert.as_ref().expect("alert expected");
    assert_eq!(alert.kind, AlertKind::Info);
    assert_eq!(alert.message, "Budget updated for Almuerzo");

    app.send_key(Key::Enter);
    assert!(app.state().alert.is_none());
}

#[test]
fn test_non_numeric_budget_is_rejected_locally() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);
    app.send_key(Key::Char('e'));

    app.type_text("abc");
    app.send_key(Key::Enter);

    let detail = app.state().detail().unwrap();
    assert!(!detail.busy);
    assert!(open_form(&app).error.is_some());
}

#[test]
fn test_delete_category_can_be_cancelled() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);

    app.send_key(Key::Char('d'));
    assert!(matches!(
        app.state().detail().unwrap().prompt,
        Some(Prompt::ConfirmDeleteCategory { ref category }) if category == "Almuerzo"
    ));

    app.send_key(Key::Char('n'));
    assert!(app.state().detail().unwrap().prompt.is_none());
    assert!(!app.state().detail().unwrap().busy);
}

#[test]
fn test_section_delete_reports_partial_failure() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);

    app.send_key(Key::Char('D'));
    assert_eq!(
        app.state().detail().unwrap().prompt,
        Some(Prompt::ConfirmDeleteSection)
    );

    app.send_key(Key::Char('y'));
    assert!(app.state().detail().unwrap().busy);

    // Only Esc works while the cascade runs
    app.send_key(Key::Char('d'));
    assert!(app.state().detail().unwrap().prompt.is_none());

    app.send_data_event(DataEvent::SectionDeleted {
        section: "COMIDA".to_string(),
        removed: 1,
        total: 2,
        error: Some("Error al eliminar".to_string()),
    });

    assert!(app.state().modal.is_none());
    let alert = app.state().alert.as_ref().unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(
        alert.message,
        "Removed 1 of 2 categories from COMIDA. Last error: Error al eliminar"
    );
}

#[test]
fn test_new_category_prompt() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);

    app.send_key(Key::Char('n'));
    app.type_text("Once");
    app.send_key(Key::Enter);

    assert!(app.state().detail().unwrap().busy);

    app.send_data_event(DataEvent::CategoryCreated {
        category: "Once".to_string(),
    });
    assert!(app.state().modal.is_none());
}

#[test]
fn test_category_failure_reopens_detail_for_input() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);
    app.send_key(Key::Char('d'));
    app.send_key(Key::Char('y'));

    app.send_data_event(DataEvent::CategoryActionFailed {
        error: "Categoría no encontrada".to_string(),
    });

    let detail = app.state().detail().expect("detail stays open");
    assert!(!detail.busy);
    assert!(detail.prompt.is_none());
    assert_eq!(app.state().alert.as_ref().unwrap().kind, AlertKind::Error);
}

#[test]
fn test_session_expiry_returns_to_login() {
    let mut app = loaded_app();
    app.send_key(Key::Enter);
    assert!(app.state().modal.is_some());

    app.send_data_event(DataEvent::SessionExpired);

    app.assert_screen(Screen::Login);
    assert!(app.state().modal.is_none());
    assert!(app.state().snapshot.is_none());
    assert_eq!(
        app.state().login_form.error.as_deref(),
        Some("Session expired, please log in again")
    );
}

#[test]
fn test_logout_clears_session_state() {
    let mut app = loaded_app();

    app.send_key(Key::Char('L'));

    app.assert_screen(Screen::Login);
    assert!(app.state().snapshot.is_none());
    app.assert_not_quit();
}

#[test]
fn test_add_expense_flow() {
    let mut app = loaded_app();

    app.send_key(Key::Char('a'));
    assert!(matches!(app.state().modal, Some(Modal::AddExpense(_))));

    let form = open_form(&app);
    assert_eq!(form.value("section"), "COMIDA");
    assert_eq!(form.value("category"), "Almuerzo");
    assert_eq!(form.value("payment_method"), "EFECTIVO");

    // Bad amount blocks submission
    app.type_text("12a");
    app.send_key(Key::Enter);
    assert!(!open_form(&app).submitting);
    assert!(open_form(&app).error.is_some());

    app.send_key(Key::Backspace);
    app.send_key(Key::Tab);
    app.type_text("Almuerzo");
    // Move to section and pick the next one
    app.send_key(Key::Tab);
    app.send_key(Key::Right);
    assert_eq!(open_form(&app).value("section"), "TRANSPORTE");
    assert_eq!(open_form(&app).value("category"), "Bencina");

    app.send_key(Key::Enter);
    assert!(open_form(&app).submitting);

    app.send_data_event(DataEvent::ExpenseCreated);
    assert!(app.state().modal.is_none());
}

#[test]
fn test_expense_failure_keeps_form_open() {
    let mut app = loaded_app();
    app.send_key(Key::Char('a'));
    app.type_text("4500");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::ExpenseCreateFailed {
        error: "HTTP 500".to_string(),
    });

    assert!(matches!(app.state().modal, Some(Modal::AddExpense(_))));
    assert!(!open_form(&app).submitting);
    assert_eq!(
        app.state().alert.as_ref().unwrap().message,
        "Failed to save expense: HTTP 500"
    );
}

#[test]
fn test_add_opens_commitment_form_on_commitments() {
    let mut app = loaded_app();
    app.send_key(Key::Char('2'));

    app.send_key(Key::Char('a'));
    assert!(matches!(app.state().modal, Some(Modal::AddCommitment(_))));

    app.type_text("Tarjeta");
    app.send_key(Key::Tab);
    app.send_key(Key::Right);
    assert_eq!(open_form(&app).value("type"), "LOAN");
    app.send_key(Key::Tab);
    app.type_text("1000");
    app.send_key(Key::Enter);
    assert!(open_form(&app).submitting);

    app.send_data_event(DataEvent::CommitmentCreated);
    assert!(app.state().modal.is_none());
}

#[test]
fn test_commitments_list_and_toggle_failure() {
    let mut app = loaded_app();
    app.send_key(Key::Char('2'));

    app.send_data_event(DataEvent::CommitmentsLoaded {
        commitments: vec![
            test_commitment(1, CommitmentStatus::Pending),
            test_commitment(2, CommitmentStatus::Paid),
        ],
    });
    assert_eq!(app.state().commitments_loading, LoadingState::Loaded);

    app.send_key(Key::Char('j'));
    assert_eq!(
        app.state().selected_commitment().map(|c| c.id),
        Some(CommitmentId::new(2))
    );

    app.send_key(Key::Char(' '));
    app.send_data_event(DataEvent::CommitmentUpdateFailed {
        error: "HTTP 500".to_string(),
    });
    assert_eq!(
        app.state().alert.as_ref().unwrap().message,
        "Failed to update commitment: HTTP 500"
    );
}

#[test]
fn test_commitments_error_shows_in_list() {
    let mut app = loaded_app();
    app.send_key(Key::Char('2'));

    app.send_data_event(DataEvent::CommitmentsLoadFailed {
        error: "HTTP 500".to_string(),
    });

    app.assert_screen(Screen::Commitments);
    assert_eq!(
        app.state().commitments_loading,
        LoadingState::Error("HTTP 500".to_string())
    );
}

#[test]
fn test_stats_detail_opens_and_closes() {
    let mut app = loaded_app();
    app.send_key(Key::Char('3'));

    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);
    assert!(matches!(
        app.state().modal,
        Some(Modal::StatsDetail(cerebro::model::stats::StatsKind::Prediction))
    ));

    app.send_key(Key::Esc);
    assert!(app.state().modal.is_none());
}

#[test]
fn test_new_section_form_uppercases_name() {
    let mut app = loaded_app();

    app.send_key(Key::Char('n'));
    assert!(matches!(app.state().modal, Some(Modal::NewSection(_))));

    app.type_text("mascotas");
    app.send_key(Key::Tab);
    app.type_text("Comida perro");
    app.send_key(Key::Tab);
    app.type_text("50");
    app.send_key(Key::Enter);
    assert!(open_form(&app).submitting);

    app.send_data_event(DataEvent::SectionCreated {
        section: "MASCOTAS".to_string(),
    });
    assert!(app.state().modal.is_none());
    assert_eq!(
        app.state().alert.as_ref().unwrap().message,
        "Section MASCOTAS created"
    );
}

#[test]
fn test_alert_blocks_other_keys() {
    let mut app = loaded_app();
    app.send_data_event(DataEvent::CommitmentUpdateFailed {
        error: "boom".to_string(),
    });

    app.send_key(Key::Char('q'));
    app.assert_not_quit();

    app.send_key(Key::Esc);
    assert!(app.state().alert.is_none());
}
