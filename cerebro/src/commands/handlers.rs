use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::form::{FieldKind, Form};
use crate::state::{AppState, DetailState, Modal, Prompt};
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C quits from anywhere
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: A blocking alert swallows everything until dismissed
    if state.alert.is_some() {
        return match key {
            Key::Enter | Key::Esc | Key::Char(' ') => Some(AppCommand::DismissAlert),
            _ => None,
        };
    }

    // Priority 2: Login form
    if state.screen == Screen::Login {
        return match key {
            Key::Esc => Some(AppCommand::Quit),
            Key::Enter => Some(AppCommand::SubmitLogin),
            _ => handle_form_keys(event, &state.login_form),
        };
    }

    // Priority 3: Open dialog
    if let Some(modal) = &state.modal {
        return handle_modal_keys(event, modal, state);
    }

    // Priority 4: Help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 5: Global keys shared by the main screens
    match key {
        Key::Char('q') => return Some(AppCommand::Quit),
        Key::Char('?') => return Some(AppCommand::ToggleHelp),
        Key::Char('r') => return Some(AppCommand::Refresh),
        Key::Char('L') => return Some(AppCommand::Logout),
        Key::Char('1') => return Some(AppCommand::SwitchScreen(Screen::Dashboard)),
        Key::Char('2') => return Some(AppCommand::SwitchScreen(Screen::Commitments)),
        Key::Char('3') => return Some(AppCommand::SwitchScreen(Screen::Stats)),
        Key::Tab => return Some(AppCommand::SwitchScreen(adjacent_tab(state.screen, true))),
        Key::BackTab => {
            return Some(AppCommand::SwitchScreen(adjacent_tab(state.screen, false)))
        }
        Key::Char('j') | Key::Down => return Some(AppCommand::SelectNext),
        Key::Char('k') | Key::Up => return Some(AppCommand::SelectPrevious),
        _ => {}
    }

    // Priority 6: Screen-specific keys
    match state.screen {
        Screen::Dashboard => match key {
            Key::Enter | Key::Char('l') | Key::Right => state
                .selected_section()
                .map(|section| AppCommand::OpenDetail {
                    section: section.to_string(),
                }),
            Key::Char('a') => Some(AppCommand::OpenAddExpense),
            Key::Char('n') => Some(AppCommand::OpenNewSection),
            _ => None,
        },
        Screen::Commitments => match key {
            Key::Char(' ') | Key::Enter => state
                .selected_commitment()
                .map(|commitment| AppCommand::ToggleCommitment { id: commitment.id }),
            Key::Char('a') => Some(AppCommand::OpenAddCommitment),
            _ => None,
        },
        Screen::Stats => match key {
            Key::Enter | Key::Char('l') | Key::Right => {
                Some(AppCommand::OpenStatsDetail(state.selected_stats_kind()))
            }
            Key::Char('a') => Some(AppCommand::OpenAddExpense),
            _ => None,
        },
        Screen::Login => None,
    }
}

fn adjacent_tab(current: Screen, forward: bool) -> Screen {
    let tabs = Screen::TABS;
    let index = tabs.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % tabs.len()
    } else {
        (index + tabs.len() - 1) % tabs.len()
    };
    tabs[next]
}

/// Keys shared by every form: field focus, choice cycling and text entry
fn handle_form_keys(event: KeyEvent, form: &Form) -> Option<AppCommand> {
    let on_selector = matches!(
        form.focused_field().map(|f| &f.kind),
        Some(FieldKind::Choice { .. }) | Some(FieldKind::Toggle(_))
    );

    if let Some(c) = event.typed_char().filter(|c| *c != ' ' || !on_selector) {
        return Some(AppCommand::AppendFormFieldChar(c));
    }

    match event.key {
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Right => Some(AppCommand::CycleFormOption { forward: true }),
        Key::Left => Some(AppCommand::CycleFormOption { forward: false }),
        Key::Char(' ') if on_selector => Some(AppCommand::CycleFormOption { forward: true }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        _ => None,
    }
}

fn handle_modal_keys(event: KeyEvent, modal: &Modal, state: &AppState) -> Option<AppCommand> {
    let key = event.key;
    match modal {
        Modal::AddExpense(form) => form_dialog_keys(event, form, AppCommand::SubmitExpense),
        Modal::AddCommitment(form) => form_dialog_keys(event, form, AppCommand::SubmitCommitment),
        Modal::NewSection(form) => form_dialog_keys(event, form, AppCommand::SubmitNewSection),
        Modal::StatsDetail(_) => match key {
            Key::Esc | Key::Enter | Key::Char('q') => Some(AppCommand::CloseModal),
            _ => None,
        },
        Modal::Detail(detail) => handle_detail_keys(event, detail, state),
    }
}

fn form_dialog_keys(event: KeyEvent, form: &Form, submit: AppCommand) -> Option<AppCommand> {
    match event.key {
        Key::Esc => Some(AppCommand::CloseModal),
        Key::Enter => Some(submit),
        _ => handle_form_keys(event, form),
    }
}

fn handle_detail_keys(
    event: KeyEvent,
    detail: &DetailState,
    state: &AppState,
) -> Option<AppCommand> {
    let key = event.key;

    match &detail.prompt {
        Some(Prompt::EditBudget { form, .. }) => {
            return match key {
                Key::Esc => Some(AppCommand::CancelPrompt),
                Key::Enter => Some(AppCommand::SubmitBudgetEdit),
                _ => handle_form_keys(event, form),
            };
        }
        Some(Prompt::NewCategory(form)) => {
            return match key {
                Key::Esc => Some(AppCommand::CancelPrompt),
                Key::Enter => Some(AppCommand::SubmitNewCategory),
                _ => handle_form_keys(event, form),
            };
        }
        Some(Prompt::ConfirmDeleteCategory { .. }) => {
            return match key {
                Key::Char('y') | Key::Char('Y') => Some(AppCommand::ConfirmDeleteCategory),
                Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelPrompt),
                _ => None,
            };
        }
        Some(Prompt::ConfirmDeleteSection) => {
            return match key {
                Key::Char('y') | Key::Char('Y') => Some(AppCommand::ConfirmDeleteSection),
                Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelPrompt),
                _ => None,
            };
        }
        None => {}
    }

    // While a request runs only closing is allowed
    if detail.busy {
        return match key {
            Key::Esc => Some(AppCommand::CloseModal),
            _ => None,
        };
    }

    let category = || state.selected_category().map(str::to_string);
    match key {
        Key::Esc | Key::Char('q') => Some(AppCommand::CloseModal),
        Key::Char('j') | Key::Down => Some(AppCommand::SelectNext),
        Key::Char('k') | Key::Up => Some(AppCommand::SelectPrevious),
        Key::Char('e') | Key::Enter => {
            category().map(|category| AppCommand::PromptEditBudget { category })
        }
        Key::Char('d') => category().map(|category| AppCommand::PromptDeleteCategory { category }),
        Key::Char('n') => Some(AppCommand::PromptNewCategory),
        Key::Char('D') => Some(AppCommand::PromptDeleteSection),
        _ => None,
    }
}
