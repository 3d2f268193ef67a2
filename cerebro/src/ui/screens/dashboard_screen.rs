use cerebro_api::endpoints::{dashboard::DashboardSnapshot, expenses::Expense};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

use crate::model::budget::{section_rows, DashboardTotals};
use crate::model::icons::recent_expense_icon;
use crate::state::{AppState, LoadingState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title, summary_card},
    layouts,
    screens::Screen,
    theme, utils,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, state);
    render_content(f, content_area, state);
    help_bar::render_help_bar(f, help_area, help_bar::hint_for(Screen::Dashboard));
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        match &state.dashboard_loading {
            LoadingState::Error(error) => {
                empty_state::render_error_state(f, area, "Dashboard", error)
            }
            _ => empty_state::render_loading_state(f, area, "Dashboard", "Loading dashboard..."),
        }
        return;
    };
    let sep = state.preferences.group_separator.as_str();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8)])
        .split(area);

    let greeting = Paragraph::new(Line::from(Span::styled(
        greeting(snapshot),
        theme::title_style(),
    )));
    f.render_widget(greeting, chunks[0]);

    let (cards, body) = layouts::cards_and_body(chunks[1], 3);
    render_cards(f, &cards, snapshot, sep);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body);

    render_sections(f, columns[0], state, snapshot, sep);
    render_recent_expenses(f, columns[1], state, sep);
}

fn greeting(snapshot: &DashboardSnapshot) -> String {
    let user = snapshot
        .user_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("there");
    format!("Hello, {} 👋", user)
}

fn render_cards(f: &mut Frame, cards: &[Rect], snapshot: &DashboardSnapshot, sep: &str) {
    let totals = DashboardTotals::from_snapshot(snapshot);

    summary_card::render_summary_card(
        f,
        cards[0],
        "Available",
        &utils::format_money(totals.available, sep),
        theme::amount_color(totals.available.inner()),
        None,
    );
    summary_card::render_summary_card(
        f,
        cards[1],
        "Monthly budget",
        &utils::format_money(totals.monthly_budget, sep),
        theme::COLOR_TITLE,
        None,
    );
    let spent_caption = format!("{} of budget", utils::format_percent(totals.percent));
    summary_card::render_summary_card(
        f,
        cards[2],
        "Spent",
        &utils::format_money(totals.spent, sep),
        theme::COLOR_WARNING,
        Some(&spent_caption),
    );
}

fn render_sections(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &DashboardSnapshot,
    sep: &str,
) {
    let rows = section_rows(snapshot);
    if rows.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            "Sections",
            "No sections yet",
            Some("Press n to create one"),
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Section"),
        Cell::from(Text::from("Spent / Budget").right_aligned()),
        Cell::from("Progress"),
        Cell::from(Text::from("Remaining").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let line = &row.line;
            let name = format!("{} {}", row.icon.glyph(), row.name);
            let amounts = if line.is_over() {
                format!("{} ⚠ Over!", utils::budget_amounts(line, sep))
            } else {
                utils::budget_amounts(line, sep)
            };
            let remaining_style = if line.is_over() {
                theme::error_style()
            } else {
                theme::help_text_style()
            };
            Row::new(vec![
                Cell::from(name),
                Cell::from(Text::from(amounts).right_aligned()),
                Cell::from(Line::from(utils::budget_bar(line))),
                Cell::from(Text::from(utils::remaining_text(line, sep)).right_aligned())
                    .style(remaining_style),
            ])
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Length(theme::PROGRESS_BAR_WIDTH as u16),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title("Sections"))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.sections_table.borrow_mut());
}

fn render_recent_expenses(f: &mut Frame, area: Rect, state: &AppState, sep: &str) {
    if state.expenses.is_empty() {
        empty_state::render_empty_state(f, area, "Recent expenses", "No expenses yet", None);
        return;
    }

    let items: Vec<ListItem> = state
        .expenses
        .iter()
        .take(state.preferences.recent_expenses)
        .map(|expense| expense_item(expense, sep))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent expenses"),
    );
    f.render_widget(list, area);
}

fn expense_item(expense: &Expense, sep: &str) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!(
                "{} {}  ",
                recent_expense_icon(expense.section.as_deref()),
                expense.concept
            )),
            Span::styled(utils::format_money(expense.amount, sep), theme::header_style()),
        ]),
        Line::from(Span::styled(
            expense_caption(expense),
            theme::help_text_style(),
        )),
    ])
}

/// `14/03/2025 • Almuerzo • DEBITO`; the payment method is optional
fn expense_caption(expense: &Expense) -> String {
    let mut caption = format!("   {} • {}", expense.date.format("%d/%m/%Y"), expense.category);
    if let Some(method) = &expense.payment_method {
        caption.push_str(&format!(" • {}", method));
    }
    caption
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebro_api::endpoints::Amount;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn snapshot(user_name: Option<&str>) -> DashboardSnapshot {
        DashboardSnapshot {
            user_name: user_name.map(str::to_string),
            available_balance: Amount::new(200),
            monthly_budget: Amount::new(1000),
            categories: BTreeMap::new(),
        }
    }

    #[test]
    fn greets_user_or_falls_back() {
        assert_eq!(greeting(&snapshot(Some("Christian"))), "Hello, Christian 👋");
        assert_eq!(greeting(&snapshot(None)), "Hello, there 👋");
        assert_eq!(greeting(&snapshot(Some("  "))), "Hello, there 👋");
    }

    #[test]
    fn caption_skips_missing_payment_method() {
        let mut expense = Expense {
            id: 1,
            amount: Amount::new(4500),
            concept: "Almuerzo".to_string(),
            section: None,
            category: "General".to_string(),
            payment_method: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            image_url: None,
        };
        assert_eq!(expense_caption(&expense), "   14/03/2025 • General");
        expense.payment_method = Some("DEBITO".to_string());
        assert_eq!(expense_caption(&expense), "   14/03/2025 • General • DEBITO");
    }
}
