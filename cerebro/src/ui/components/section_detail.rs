//! The section detail dialog: category table plus whichever prompt is open.

use cerebro_api::endpoints::dashboard::DashboardSnapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::model::budget::{category_rows, BudgetLine};
use crate::model::icons::SectionIcon;
use crate::state::{DetailState, Prompt};
use crate::ui::{layouts, theme, utils};

use super::{confirmation, empty_state, form};

const DETAIL_HINT: &str =
    "e/Enter: edit budget | n: new category | d: delete category | D: delete section | Esc: close";

pub fn render_section_detail(
    f: &mut Frame,
    detail: &DetailState,
    snapshot: Option<&DashboardSnapshot>,
    group_separator: &str,
) {
    let title = format!(
        "{} {}",
        SectionIcon::classify(&detail.section).glyph(),
        detail.section
    );
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        14,
        &title,
        theme::accent_border_style(),
    );

    let Some(section) = snapshot.and_then(|s| s.section(&detail.section)) else {
        empty_state::render_empty_state(
            f,
            inner,
            "Categories",
            "This section no longer exists",
            Some("Esc to close"),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let total = BudgetLine::from(section);
    let summary = vec![
        Line::from(vec![
            Span::raw(utils::budget_amounts(&total, group_separator)),
            Span::raw("  "),
            utils::budget_bar(&total),
        ]),
        remaining_line(&total, group_separator),
    ];
    f.render_widget(Paragraph::new(summary), chunks[0]);

    let rows = category_rows(section);
    if rows.is_empty() {
        empty_state::render_empty_state(
            f,
            chunks[1],
            "Categories",
            "No categories yet",
            Some("Press n to add one"),
        );
    } else {
        let header = Row::new(vec![
            Cell::from("Category"),
            Cell::from(Text::from("Spent / Budget").right_aligned()),
            Cell::from("Progress"),
            Cell::from(Text::from("Remaining").right_aligned()),
        ])
        .style(theme::header_style())
        .underlined();

        let table_rows: Vec<Row> = rows
            .iter()
            .map(|(name, line)| {
                let name_cell = if line.is_over() {
                    Cell::from(format!("⚠ {}", name)).style(theme::error_style())
                } else {
                    Cell::from(name.to_string())
                };
                Row::new(vec![
                    name_cell,
                    Cell::from(Text::from(utils::budget_amounts(line, group_separator)).right_aligned()),
                    Cell::from(Line::from(utils::budget_bar(line))),
                    Cell::from(Text::from(remaining_line(line, group_separator)).right_aligned()),
                ])
            })
            .collect();

        let table = Table::new(
            table_rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Length(theme::PROGRESS_BAR_WIDTH as u16),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .column_spacing(theme::TABLE_COLUMN_SPACING)
        .block(Block::default().borders(Borders::ALL).title("Categories"))
        .row_highlight_style(theme::selection_style());

        f.render_stateful_widget(table, chunks[1], &mut detail.table_state.borrow_mut());
    }

    let footer = if detail.busy {
        Paragraph::new("Working...").style(theme::loading_style())
    } else {
        Paragraph::new(DETAIL_HINT).style(theme::help_text_style())
    };
    f.render_widget(footer, chunks[2]);

    render_prompt(f, detail, section.categories.len());
}

fn remaining_line(line: &BudgetLine, group_separator: &str) -> Line<'static> {
    let style = if line.is_over() {
        theme::error_style()
    } else {
        Style::default().fg(theme::COLOR_HELP_TEXT)
    };
    Line::from(Span::styled(utils::remaining_text(line, group_separator), style))
}

fn render_prompt(f: &mut Frame, detail: &DetailState, category_count: usize) {
    match &detail.prompt {
        None => {}
        Some(Prompt::EditBudget { category, form }) => {
            form::render_form_popup(
                f,
                &format!("Budget for {}", category),
                form,
                "Enter: save | Esc: cancel",
            );
        }
        Some(Prompt::NewCategory(form)) => {
            form::render_form_popup(
                f,
                &format!("New category in {}", detail.section),
                form,
                "Enter: create | Esc: cancel",
            );
        }
        Some(Prompt::ConfirmDeleteCategory { category }) => {
            confirmation::render_confirmation(
                f,
                "Delete category",
                &format!("Delete category {} from {}?", category, detail.section),
                "Its budget is removed from the section.",
            );
        }
        Some(Prompt::ConfirmDeleteSection) => {
            confirmation::render_confirmation(
                f,
                "Delete section",
                &format!("Delete section {}?", detail.section),
                &format!(
                    "All {} categories go with it. This cannot be undone.",
                    category_count
                ),
            );
        }
    }
}
