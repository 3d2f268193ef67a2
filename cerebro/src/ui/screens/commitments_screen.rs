use cerebro_api::endpoints::commitments::{Commitment, CommitmentKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::model::commitments::{CommitmentSummary, Standing};
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
    help_bar::render_help_bar(f, help_area, help_bar::hint_for(Screen::Commitments));
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let sep = state.preferences.group_separator.as_str();
    let (cards, body) = layouts::cards_and_body(area, 3);

    let summary = CommitmentSummary::from_commitments(&state.commitments);
    render_cards(f, &cards, &summary, sep);

    match &state.commitments_loading {
        LoadingState::Error(error) => {
            empty_state::render_error_state(f, body, "Commitments", error);
        }
        LoadingState::Loading(_) if state.commitments.is_empty() => {
            empty_state::render_loading_state(f, body, "Commitments", "Loading commitments...");
        }
        _ if state.commitments.is_empty() => {
            empty_state::render_empty_state(
                f,
                body,
                "Commitments",
                "No commitments",
                Some("Press a to add one"),
            );
        }
        _ => render_list(f, body, state, sep),
    }
}

fn render_cards(f: &mut Frame, cards: &[Rect], summary: &CommitmentSummary, sep: &str) {
    let debt_color = if summary.debt_total.is_positive() {
        theme::COLOR_NEGATIVE
    } else {
        theme::COLOR_MUTED
    };
    summary_card::render_summary_card(
        f,
        cards[0],
        "I owe",
        &utils::format_money(summary.debt_total, sep),
        debt_color,
        Some(&items_caption(summary.debt_count)),
    );

    let loan_color = if summary.loan_total.is_positive() {
        theme::COLOR_POSITIVE
    } else {
        theme::COLOR_MUTED
    };
    summary_card::render_summary_card(
        f,
        cards[1],
        "Owed to me",
        &utils::format_money(summary.loan_total, sep),
        loan_color,
        Some(&items_caption(summary.loan_count)),
    );

    let standing = summary.standing();
    let balance_color = match standing {
        Standing::Against => theme::COLOR_NEGATIVE,
        Standing::InFavor | Standing::Even => theme::COLOR_POSITIVE,
    };
    summary_card::render_summary_card(
        f,
        cards[2],
        "Balance",
        &utils::format_money(summary.balance().abs(), sep),
        balance_color,
        Some(standing.label()),
    );
}

fn items_caption(count: usize) -> String {
    format!("{} items", count)
}

fn render_list(f: &mut Frame, area: Rect, state: &AppState, sep: &str) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Title"),
        Cell::from("Type"),
        Cell::from(Text::from("Amount").right_aligned()),
        Cell::from("Due"),
        Cell::from("Paid"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .commitments
        .iter()
        .map(|commitment| commitment_row(commitment, sep))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title("Commitments"))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.commitments_table.borrow_mut());
}

fn commitment_row(commitment: &Commitment, sep: &str) -> Row<'static> {
    let marker = match commitment.kind {
        CommitmentKind::Debt => "🔴",
        CommitmentKind::Loan => "🟢",
    };
    let check = if commitment.is_paid() { "✅" } else { "⬜" };
    let title_style = if commitment.is_paid() {
        theme::muted_style().add_modifier(Modifier::CROSSED_OUT)
    } else {
        theme::form_field_style()
    };
    let due = commitment
        .due_date
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default();

    Row::new(vec![
        Cell::from(marker),
        Cell::from(commitment.title.clone()).style(title_style),
        Cell::from(commitment.kind.to_string()),
        Cell::from(Text::from(utils::format_money(commitment.total_amount, sep)).right_aligned()),
        Cell::from(due),
        Cell::from(check),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_counts_items() {
        assert_eq!(items_caption(0), "0 items");
        assert_eq!(items_caption(3), "3 items");
    }
}
