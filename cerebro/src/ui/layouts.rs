//! Reusable layout builders for consistent screen structure.
//!
//! Every signed-in screen is a tab header, a content area and a help bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, SUMMARY_CARD_HEIGHT, TITLE_HEIGHT};

/// Standard screen layout with header, content area, and help bar.
///
/// Returns a tuple of (header_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a content area into a row of summary cards and what remains below.
///
/// Returns (card_areas, rest_area)
pub fn cards_and_body(area: Rect, cards: usize) -> (Vec<Rect>, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SUMMARY_CARD_HEIGHT), Constraint::Min(3)])
        .split(area);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.max(1) as u32); cards.max(1)])
        .split(rows[0]);

    (card_areas.to_vec(), rows[1])
}

/// Split a header into tab text and a throbber slot.
///
/// Returns (tabs_area, status_area)
pub fn header_with_status(area: Rect, status_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(status_width)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - for confirmations and alerts
    pub const SMALL: (u16, u16) = (50, 30);

    /// Medium popup (60% x 60%) - for forms
    pub const MEDIUM: (u16, u16) = (60, 60);

    /// Large popup (80% x 80%) - for help and the section detail
    pub const LARGE: (u16, u16) = (80, 80);
}
