use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// A KPI card: title in the border, a bold value, an optional caption
pub fn render_summary_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    value_color: Color,
    caption: Option<&str>,
) {
    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(value_color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(caption) = caption {
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            theme::help_text_style(),
        )));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::accent_border_style()),
    );
    f.render_widget(card, area);
}
