use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::form::Form;
use crate::state::validators::{self, ExpenseDraft, LoginInput, NewSectionInput};
use crate::state::*;
use crate::ui::screens::Screen;
use cerebro_api::endpoints::commitments::{Commitment, NewCommitment};

/// Network work a command asks for, run by `execute_command`
#[derive(Debug)]
pub enum Effect {
    Login(LoginInput),
    Logout,
    Refresh {
        include_commitments: bool,
    },
    LoadCommitments,
    LoadStatistics,
    CreateExpense {
        draft: ExpenseDraft,
        include_commitments: bool,
    },
    CreateCommitment(NewCommitment),
    ToggleCommitment(Commitment),
    CreateCategory {
        section: String,
        category: String,
        budget: i64,
        include_commitments: bool,
    },
    UpdateCategory {
        section: String,
        category: String,
        budget: i64,
        include_commitments: bool,
    },
    DeleteCategory {
        section: String,
        category: String,
        include_commitments: bool,
    },
    CreateSection {
        input: NewSectionInput,
        include_commitments: bool,
    },
    DeleteSection {
        section: String,
        categories: Vec<String>,
        include_commitments: bool,
    },
}

/// Execute a command: update state, then spawn whatever background work it needs
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let Some(effect) = apply_command(command, state) else {
        return;
    };
    tracing::debug!("Running effect: {:?}", effect);

    let loader = data_loader.clone();
    match effect {
        Effect::Login(input) => {
            task_manager.spawn_load_task("login".to_string(), async move {
                loader
                    .login(input.username, input.password, input.remember)
                    .await;
            });
        }
        Effect::Logout => {
            task_manager.cancel_all();
            data_loader.end_session();
        }
        Effect::Refresh {
            include_commitments,
        } => {
            task_manager.spawn_load_task("refresh".to_string(), async move {
                loader.refresh_all(include_commitments).await;
            });
        }
        Effect::LoadCommitments => {
            task_manager.spawn_load_task("load_commitments".to_string(), async move {
                loader.load_commitments().await;
            });
        }
        Effect::LoadStatistics => {
            task_manager.spawn_load_task("load_statistics".to_string(), async move {
                loader.load_statistics().await;
            });
        }
        Effect::CreateExpense {
            draft,
            include_commitments,
        } => {
            task_manager.spawn_mutation_task("create_expense", async move {
                loader.create_expense(draft, include_commitments).await;
            });
        }
        Effect::CreateCommitment(commitment) => {
            task_manager.spawn_mutation_task("create_commitment", async move {
                loader.create_commitment(commitment).await;
            });
        }
        Effect::ToggleCommitment(commitment) => {
            let label = format!("toggle_commitment_{}", commitment.id);
            task_manager.spawn_mutation_task(&label, async move {
                loader.toggle_commitment(commitment).await;
            });
        }
        Effect::CreateCategory {
            section,
            category,
            budget,
            include_commitments,
        } => {
            let label = format!("create_category_{}_{}", section, category);
            task_manager.spawn_mutation_task(&label, async move {
                loader
                    .create_category(section, category, budget, include_commitments)
                    .await;
            });
        }
        Effect::UpdateCategory {
            section,
            category,
            budget,
            include_commitments,
        } => {
            let label = format!("update_category_{}_{}", section, category);
            task_manager.spawn_mutation_task(&label, async move {
                loader
                    .update_category(section, category, budget, include_commitments)
                    .await;
            });
        }
        Effect::DeleteCategory {
            section,
            category,
            include_commitments,
        } => {
            let label = format!("delete_category_{}_{}", section, category);
            task_manager.spawn_mutation_task(&label, async move {
                loader
                    .delete_category(section, category, include_commitments)
                    .await;
            });
        }
        Effect::CreateSection {
            input,
            include_commitments,
        } => {
            let label = format!("create_section_{}", input.section);
            task_manager.spawn_mutation_task(&label, async move {
                loader.create_section(input, include_commitments).await;
            });
        }
        Effect::DeleteSection {
            section,
            categories,
            include_commitments,
        } => {
            let label = format!("delete_section_{}", section);
            task_manager.spawn_mutation_task(&label, async move {
                loader
                    .delete_section(section, categories, include_commitments)
                    .await;
            });
        }
    }
}

/// Execute a command synchronously without spawning tasks (for tests)
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    if let Some(effect) = apply_command(command, state) {
        tracing::debug!("Skipping effect in sync mode: {:?}", effect);
    }
}

/// Apply a command's state changes and return the background work it needs, if any
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    let include_commitments = state.commitments_visible();

    match command {
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::DismissAlert => state.alert = None,
        AppCommand::CloseModal => state.modal = None,

        AppCommand::SwitchScreen(screen) => {
            if screen == state.screen || screen == Screen::Login {
                return None;
            }
            tracing::debug!("Switching to {:?}", screen);
            state.screen = screen;
            match screen {
                Screen::Commitments => {
                    state.commitments_loading = LoadingState::loading();
                    return Some(Effect::LoadCommitments);
                }
                Screen::Stats => {
                    state.stats_loading = LoadingState::loading();
                    return Some(Effect::LoadStatistics);
                }
                Screen::Dashboard | Screen::Login => {}
            }
        }

        AppCommand::SelectNext => state.select_next(),
        AppCommand::SelectPrevious => state.select_prev(),

        AppCommand::Refresh => {
            state.dashboard_loading = LoadingState::loading();
            if include_commitments {
                state.commitments_loading = LoadingState::loading();
            }
            return Some(Effect::Refresh {
                include_commitments,
            });
        }

        AppCommand::SubmitLogin => {
            let form = &mut state.login_form;
            if form.submitting {
                return None;
            }
            match validators::validate_login(form) {
                Ok(input) => {
                    form.error = None;
                    form.submitting = true;
                    return Some(Effect::Login(input));
                }
                Err(error) => form.error = Some(error),
            }
        }

        AppCommand::Logout => {
            tracing::info!("Logging out");
            let preferences = std::mem::take(&mut state.preferences);
            *state = AppState::new();
            state.preferences = preferences;
            return Some(Effect::Logout);
        }

        AppCommand::NavigateFormField { forward } => {
            if let Some(form) = state.active_form_mut() {
                if forward {
                    form.focus_next();
                } else {
                    form.focus_prev();
                }
            }
        }

        AppCommand::CycleFormOption { forward } => {
            let snapshot = state.snapshot.as_ref();
            if let Some(Modal::AddExpense(form)) = &mut state.modal {
                if form.cycle(forward) == Some("section") {
                    form.sync_categories(snapshot);
                }
            } else if let Some(form) = state.active_form_mut() {
                form.cycle(forward);
            }
        }

        AppCommand::AppendFormFieldChar(c) => {
            if let Some(form) = state.active_form_mut() {
                form.push_char(c);
            }
        }

        AppCommand::DeleteFormFieldChar => {
            if let Some(form) = state.active_form_mut() {
                form.pop_char();
            }
        }

        AppCommand::OpenAddExpense => {
            state.modal = Some(Modal::AddExpense(Form::expense(state.snapshot.as_ref())));
        }

        AppCommand::SubmitExpense => {
            if let Some(Modal::AddExpense(form)) = &mut state.modal {
                if let Some(draft) = submit_form(form, validators::validate_expense) {
                    return Some(Effect::CreateExpense {
                        draft,
                        include_commitments,
                    });
                }
            }
        }

        AppCommand::OpenAddCommitment => {
            state.modal = Some(Modal::AddCommitment(Form::commitment()));
        }

        AppCommand::SubmitCommitment => {
            if let Some(Modal::AddCommitment(form)) = &mut state.modal {
                if let Some(commitment) = submit_form(form, validators::validate_commitment) {
                    return Some(Effect::CreateCommitment(commitment));
                }
            }
        }

        AppCommand::ToggleCommitment { id } => {
            let commitment = state.commitments.iter().find(|c| c.id == id)?;
            return Some(Effect::ToggleCommitment(commitment.clone()));
        }

        AppCommand::OpenDetail { section } => {
            state.modal = Some(Modal::Detail(DetailState::new(section)));
        }

        AppCommand::OpenNewSection => {
            state.modal = Some(Modal::NewSection(Form::new_section()));
        }

        AppCommand::SubmitNewSection => {
            if let Some(Modal::NewSection(form)) = &mut state.modal {
                if let Some(input) = submit_form(form, validators::validate_new_section) {
                    return Some(Effect::CreateSection {
                        input,
                        include_commitments,
                    });
                }
            }
        }

        AppCommand::PromptEditBudget { category } => {
            let current = state
                .detail()
                .and_then(|detail| state.snapshot.as_ref()?.section(&detail.section))
                .and_then(|section| section.categories.get(&category))
                .map_or(0, |c| c.budget.inner());
            if let Some(detail) = state.detail_mut() {
                detail.prompt = Some(Prompt::EditBudget {
                    category,
                    form: Form::budget_edit(current),
                });
            }
        }

        AppCommand::PromptNewCategory => {
            if let Some(detail) = state.detail_mut() {
                detail.prompt = Some(Prompt::NewCategory(Form::new_category()));
            }
        }

        AppCommand::PromptDeleteCategory { category } => {
            if let Some(detail) = state.detail_mut() {
                detail.prompt = Some(Prompt::ConfirmDeleteCategory { category });
            }
        }

        AppCommand::PromptDeleteSection => {
            if let Some(detail) = state.detail_mut() {
                detail.prompt = Some(Prompt::ConfirmDeleteSection);
            }
        }

        AppCommand::CancelPrompt => {
            if let Some(detail) = state.detail_mut() {
                detail.prompt = None;
            }
        }

        AppCommand::SubmitBudgetEdit => {
            let detail = state.detail_mut()?;
            let Some(Prompt::EditBudget { category, form }) = &mut detail.prompt else {
                return None;
            };
            let budget = submit_form(form, validators::validate_budget_edit)?;
            let category = category.clone();
            detail.busy = true;
            return Some(Effect::UpdateCategory {
                section: detail.section.clone(),
                category,
                budget,
                include_commitments,
            });
        }

        AppCommand::SubmitNewCategory => {
            let detail = state.detail_mut()?;
            let Some(Prompt::NewCategory(form)) = &mut detail.prompt else {
                return None;
            };
            let (category, budget) = submit_form(form, validators::validate_new_category)?;
            detail.busy = true;
            return Some(Effect::CreateCategory {
                section: detail.section.clone(),
                category,
                budget,
                include_commitments,
            });
        }

        AppCommand::ConfirmDeleteCategory => {
            let detail = state.detail_mut()?;
            let Some(Prompt::ConfirmDeleteCategory { category }) = detail.prompt.take() else {
                return None;
            };
            detail.busy = true;
            return Some(Effect::DeleteCategory {
                section: detail.section.clone(),
                category,
                include_commitments,
            });
        }

        AppCommand::ConfirmDeleteSection => {
            let section = state.detail()?.section.clone();
            let categories = state
                .snapshot
                .as_ref()
                .and_then(|s| s.section(&section))
                .map(|s| s.category_names().map(str::to_string).collect())
                .unwrap_or_default();
            let detail = state.detail_mut()?;
            detail.prompt = None;
            detail.busy = true;
            return Some(Effect::DeleteSection {
                section,
                categories,
                include_commitments,
            });
        }

        AppCommand::OpenStatsDetail(kind) => {
            state.modal = Some(Modal::StatsDetail(kind));
        }
    }

    None
}

/// Validate a form, flagging it as submitting on success and showing the error otherwise
fn submit_form<T>(form: &mut Form, validate: impl FnOnce(&Form) -> Result<T, String>) -> Option<T> {
    if form.submitting {
        return None;
    }
    match validate(form) {
        Ok(value) => {
            form.error = None;
            form.submitting = true;
            Some(value)
        }
        Err(error) => {
            form.error = Some(error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebro_api::endpoints::{
        dashboard::{CategoryBudget, DashboardSnapshot, Section},
        Amount,
    };
    use std::collections::BTreeMap;

    fn state_with_section() -> AppState {
        let mut categories = BTreeMap::new();
        for name in ["Almuerzo", "Cafe"] {
            categories.insert(
                name.to_string(),
                CategoryBudget {
                    budget: Amount::new(150),
                    spent: Amount::new(10),
                },
            );
        }
        let mut sections = BTreeMap::new();
        sections.insert(
            "COMIDA".to_string(),
            Section {
                budget: Amount::new(300),
                spent: Amount::new(20),
                categories,
            },
        );
        let mut state = AppState::signed_in();
        state.snapshot = Some(DashboardSnapshot {
            user_name: None,
            available_balance: Amount::new(280),
            monthly_budget: Amount::new(300),
            categories: sections,
        });
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            apply_command(AppCommand::AppendFormFieldChar(c), state);
        }
    }

    #[test]
    fn invalid_login_sets_error_without_effect() {
        let mut state = AppState::new();
        let effect = apply_command(AppCommand::SubmitLogin, &mut state);
        assert!(effect.is_none());
        assert_eq!(state.login_form.error.as_deref(), Some("Email is required"));
    }

    #[test]
    fn valid_login_is_submitted_once() {
        let mut state = AppState::new();
        type_text(&mut state, "a@b.c");
        apply_command(AppCommand::NavigateFormField { forward: true }, &mut state);
        type_text(&mut state, "secret");

        assert!(matches!(
            apply_command(AppCommand::SubmitLogin, &mut state),
            Some(Effect::Login(_))
        ));
        assert!(state.login_form.submitting);
        assert!(apply_command(AppCommand::SubmitLogin, &mut state).is_none());
    }

    #[test]
    fn switching_to_commitments_loads_them() {
        let mut state = AppState::signed_in();
        let effect = apply_command(AppCommand::SwitchScreen(Screen::Commitments), &mut state);
        assert!(matches!(effect, Some(Effect::LoadCommitments)));
        assert!(state.commitments_loading.is_loading());
        assert!(apply_command(AppCommand::SwitchScreen(Screen::Commitments), &mut state).is_none());
    }

    #[test]
    fn refresh_includes_commitments_only_on_that_screen() {
        let mut state = AppState::signed_in();
        assert!(matches!(
            apply_command(AppCommand::Refresh, &mut state),
            Some(Effect::Refresh {
                include_commitments: false
            })
        ));
        state.screen = Screen::Commitments;
        assert!(matches!(
            apply_command(AppCommand::Refresh, &mut state),
            Some(Effect::Refresh {
                include_commitments: true
            })
        ));
    }

    #[test]
    fn budget_edit_prefills_current_budget() {
        let mut state = state_with_section();
        apply_command(
            AppCommand::OpenDetail {
                section: "COMIDA".to_string(),
            },
            &mut state,
        );
        apply_command(
            AppCommand::PromptEditBudget {
                category: "Cafe".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.active_form().unwrap().value("budget"), "150");
    }

    #[test]
    fn non_numeric_budget_blocks_the_request() {
        let mut state = state_with_section();
        apply_command(
            AppCommand::OpenDetail {
                section: "COMIDA".to_string(),
            },
            &mut state,
        );
        apply_command(
            AppCommand::PromptEditBudget {
                category: "Cafe".to_string(),
            },
            &mut state,
        );
        type_text(&mut state, "x");

        assert!(apply_command(AppCommand::SubmitBudgetEdit, &mut state).is_none());
        assert!(state.active_form().unwrap().error.is_some());
        assert!(!state.detail().unwrap().busy);
    }

    #[test]
    fn section_delete_collects_every_category() {
        let mut state = state_with_section();
        apply_command(
            AppCommand::OpenDetail {
                section: "COMIDA".to_string(),
            },
            &mut state,
        );
        apply_command(AppCommand::PromptDeleteSection, &mut state);

        match apply_command(AppCommand::ConfirmDeleteSection, &mut state) {
            Some(Effect::DeleteSection {
                section,
                categories,
                ..
            }) => {
                assert_eq!(section, "COMIDA");
                assert_eq!(categories, vec!["Almuerzo", "Cafe"]);
            }
            other => panic!("unexpected effect: {:?}", other),
        }
        assert!(state.detail().unwrap().busy);
    }

    #[test]
    fn cycling_section_updates_category_options() {
        let mut state = state_with_section();
        apply_command(AppCommand::OpenAddExpense, &mut state);
        let form = state.active_form().unwrap();
        assert_eq!(form.value("section"), "COMIDA");
        assert_eq!(form.value("category"), "Almuerzo");

        // Focus the category selector and move to the second option
        apply_command(AppCommand::NavigateFormField { forward: true }, &mut state);
        apply_command(AppCommand::NavigateFormField { forward: true }, &mut state);
        apply_command(AppCommand::NavigateFormField { forward: true }, &mut state);
        apply_command(AppCommand::CycleFormOption { forward: true }, &mut state);
        assert_eq!(state.active_form().unwrap().value("category"), "Cafe");
    }

    #[test]
    fn logout_resets_to_login() {
        let mut state = state_with_section();
        state.preferences.group_separator = ",".to_string();
        assert!(matches!(
            apply_command(AppCommand::Logout, &mut state),
            Some(Effect::Logout)
        ));
        assert_eq!(state.screen, Screen::Login);
        assert!(state.snapshot.is_none());
        assert_eq!(state.preferences.group_separator, ",");
    }
}
