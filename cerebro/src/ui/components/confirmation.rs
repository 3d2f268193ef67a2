use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};

/// Destructive yes/no prompt: the question, what it will cost, then the keys
pub fn render_confirmation(f: &mut Frame, title: &str, question: &str, consequence: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        9,
        title,
        theme::danger_border_style(),
    );

    let [question_area, consequence_area, keys_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(inner);

    f.render_widget(
        Paragraph::new(question)
            .style(theme::loading_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        question_area,
    );
    f.render_widget(
        Paragraph::new(consequence)
            .style(theme::muted_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        consequence_area,
    );
    f.render_widget(
        Paragraph::new(key_line()).alignment(Alignment::Center),
        keys_area,
    );
}

fn key_line() -> Line<'static> {
    let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("[Y]", bold(theme::COLOR_NEGATIVE)),
        Span::raw(" delete   "),
        Span::styled("[N]", bold(theme::COLOR_POSITIVE)),
        Span::raw("/"),
        Span::styled("[Esc]", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" keep"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn shows_question_and_consequence() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_confirmation(f, "Delete", "Delete Cafe?", "Spent history stays"))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Delete Cafe?"));
        assert!(text.contains("Spent history stays"));
        assert!(text.contains("[Y] delete"));
    }
}
