use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{Alert, AlertKind};
use crate::ui::{layouts, theme};

/// Blocking message on top of everything else
pub fn render_alert(f: &mut Frame, alert: &Alert) {
    let title = match alert.kind {
        AlertKind::Info => "Done",
        AlertKind::Error => "Error",
    };
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        7,
        title,
        theme::alert_border_style(alert.kind),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let style = match alert.kind {
        AlertKind::Info => theme::form_field_style(),
        AlertKind::Error => theme::error_style(),
    };
    let message = Paragraph::new(alert.message.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let hint = Paragraph::new("Enter/Esc to close")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}
