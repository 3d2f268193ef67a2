//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::screens::Screen;
use crate::ui::theme;

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// One-line key summary for the bottom of each screen
pub fn hint_for(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "Tab: next field | Space: toggle | Enter: log in | Esc: quit",
        Screen::Dashboard => "j/k: move | Enter: open section | a: add expense | n: new section | ?: help",
        Screen::Commitments => "j/k: move | Space: mark paid | a: add commitment | ?: help",
        Screen::Stats => "j/k: move | Enter: open report | a: add expense | ?: help",
    }
}
