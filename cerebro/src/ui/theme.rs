//! Centralized theme constants and style functions for consistent UI styling.
//!
//! Colors, layout constants and shared styles live here so every screen,
//! card and dialog draws from the same palette.

use ratatui::style::{Color, Modifier, Style};

use crate::model::budget::BarColor;
use crate::state::AlertKind;

// =============================================================================
// Colors
// =============================================================================

/// Color for money left, loans, paid items
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for overspending, debts, errors
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Warning band of a budget bar
pub const COLOR_WARNING: Color = Color::Indexed(208);

/// Color for zero amounts and muted text
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for danger popups (delete confirmations, error alerts)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the tab header
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Standard column spacing for tables
pub const TABLE_COLUMN_SPACING: u16 = 2;

/// Height of summary cards
pub const SUMMARY_CARD_HEIGHT: u16 = 4;

/// Characters in a text progress bar
pub const PROGRESS_BAR_WIDTH: usize = 12;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_NEGATIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for danger/warning borders (delete confirmations)
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

pub fn alert_border_style(kind: AlertKind) -> Style {
    match kind {
        AlertKind::Info => info_border_style(),
        AlertKind::Error => danger_border_style(),
    }
}

// =============================================================================
// Amount Color Helpers
// =============================================================================

/// Positive = green, negative = red, zero = gray
pub fn amount_color(amount: i64) -> Color {
    if amount > 0 {
        COLOR_POSITIVE
    } else if amount < 0 {
        COLOR_NEGATIVE
    } else {
        COLOR_MUTED
    }
}

pub fn bar_color(color: BarColor) -> Color {
    match color {
        BarColor::Green => COLOR_POSITIVE,
        BarColor::Orange => COLOR_WARNING,
        BarColor::Red => COLOR_NEGATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_colors_follow_thresholds() {
        assert_eq!(bar_color(BarColor::for_percent(69.9)), COLOR_POSITIVE);
        assert_eq!(bar_color(BarColor::for_percent(70.0)), COLOR_WARNING);
        assert_eq!(bar_color(BarColor::for_percent(90.0)), COLOR_NEGATIVE);
    }

    #[test]
    fn zero_amount_is_muted() {
        assert_eq!(amount_color(0), COLOR_MUTED);
        assert_eq!(amount_color(-1), COLOR_NEGATIVE);
    }
}
