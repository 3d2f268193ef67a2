use cerebro_api::endpoints::Amount;
use itertools::Itertools;
use ratatui::{style::Style, text::Span};

use super::theme;
use crate::model::budget::BudgetLine;

/// Whole-peso amount with thousands grouping, e.g. `$1.234.567`
pub fn format_money(amount: Amount, group_separator: &str) -> String {
    let value = amount.inner();
    let digits = value.unsigned_abs().to_string();

    let grouped = digits
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|chunk| chunk.collect::<Vec<_>>().into_iter().rev().collect::<String>())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .join(group_separator);

    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Money span colored by sign
pub fn money_span(amount: Amount, group_separator: &str) -> Span<'static> {
    Span::styled(
        format_money(amount, group_separator),
        Style::default().fg(theme::amount_color(amount.inner())),
    )
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Fixed-width text bar, `fill` in percent (0..=100)
pub fn progress_bar(fill: f64, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `$spent / $budget (pct)`; the percentage is left out once over budget
pub fn budget_amounts(line: &BudgetLine, group_separator: &str) -> String {
    let amounts = format!(
        "{} / {}",
        format_money(line.spent, group_separator),
        format_money(line.budget, group_separator)
    );
    match line.display_percent() {
        Some(percent) => format!("{} ({})", amounts, format_percent(percent)),
        None => amounts,
    }
}

/// "Left $x" or "Over by $x"
pub fn remaining_text(line: &BudgetLine, group_separator: &str) -> String {
    if line.is_over() {
        format!("Over by {}", format_money(line.overage(), group_separator))
    } else {
        format!("Left {}", format_money(line.remaining, group_separator))
    }
}

/// Colored bar span for a budget line
pub fn budget_bar(line: &BudgetLine) -> Span<'static> {
    Span::styled(
        progress_bar(line.bar_fill(), theme::PROGRESS_BAR_WIDTH),
        Style::default().fg(theme::bar_color(line.bar_color)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_separator() {
        assert_eq!(format_money(Amount::new(1234567), "."), "$1.234.567");
        assert_eq!(format_money(Amount::new(1000), ","), "$1,000");
        assert_eq!(format_money(Amount::new(999), "."), "$999");
    }

    #[test]
    fn zero_and_negative_amounts() {
        assert_eq!(format_money(Amount::ZERO, "."), "$0");
        assert_eq!(format_money(Amount::new(-30000), "."), "-$30.000");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(55.0), "55.0%");
        assert_eq!(format_percent(66.666), "66.7%");
    }

    #[test]
    fn bar_is_capped_at_full_width() {
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(250.0, 4), "████");
        assert_eq!(progress_bar(0.0, 3), "░░░");
    }

    #[test]
    fn overspent_line_hides_percent_and_shows_overage() {
        let line = BudgetLine::new(Amount::new(300), Amount::new(330));
        assert_eq!(budget_amounts(&line, "."), "$330 / $300");
        assert_eq!(remaining_text(&line, "."), "Over by $30");
    }

    #[test]
    fn line_within_budget_shows_percent() {
        let line = BudgetLine::new(Amount::new(2000), Amount::new(1000));
        assert_eq!(budget_amounts(&line, "."), "$1.000 / $2.000 (50.0%)");
        assert_eq!(remaining_text(&line, "."), "Left $1.000");
    }
}
