//! Renders any `state::form::Form`: one line per field, then the error or
//! submit status.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::form::{Field, FieldKind, Form};
use crate::ui::{layouts, theme};

/// Render a form inside its own popup
pub fn render_form_popup(f: &mut Frame, title: &str, form: &Form, submit_hint: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        form.fields.len() as u16 + 7,
        title,
        theme::accent_border_style(),
    );
    render_form(f, inner, form, submit_hint);
}

/// Render the fields of a form into `area`
pub fn render_form(f: &mut Frame, area: Rect, form: &Form, submit_hint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(form.fields.len() as u16),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let label_width = form
        .fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);
    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| field_line(field, i == form.focused, label_width))
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[0]);

    // Cursor after the typed text of the focused field
    if let Some(field) = form.focused_field() {
        if matches!(field.kind, FieldKind::Text | FieldKind::Secret) {
            let x = chunks[0].x + (label_width + 2 + field.value.chars().count()) as u16;
            let y = chunks[0].y + form.focused as u16;
            if x < chunks[0].right() && y < chunks[0].bottom() {
                f.set_cursor_position(Position::new(x, y));
            }
        }
    }

    let status = if form.submitting {
        Paragraph::new("Saving...").style(theme::loading_style())
    } else if let Some(error) = &form.error {
        Paragraph::new(error.as_str()).style(theme::error_style())
    } else {
        Paragraph::new("")
    };
    f.render_widget(status.wrap(Wrap { trim: true }), chunks[2]);

    let hint = Paragraph::new(submit_hint).style(theme::help_text_style());
    f.render_widget(hint, chunks[3]);
}

fn field_line(field: &Field, focused: bool, label_width: usize) -> Line<'static> {
    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let label = Span::styled(
        format!("{:>width$}: ", field.label, width = label_width),
        theme::header_style(),
    );
    Line::from(vec![label, Span::styled(display_value(field), style)])
}

/// What the user sees for a field; secrets are masked
fn display_value(field: &Field) -> String {
    match &field.kind {
        FieldKind::Text => field.value.clone(),
        FieldKind::Secret => "•".repeat(field.value.chars().count()),
        FieldKind::Choice { options, .. } if options.is_empty() => "(none)".to_string(),
        FieldKind::Choice { .. } => format!("◀ {} ▶", field.current()),
        FieldKind::Toggle(true) => "[x]".to_string(),
        FieldKind::Toggle(false) => "[ ]".to_string(),
    }
}
