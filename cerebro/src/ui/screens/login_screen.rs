use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::ui::{components::form, layouts, theme};

pub fn render(f: &mut Frame, state: &AppState) {
    let area = layouts::centered_popup(50, 50, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🧠 Cerebro ")
        .title_alignment(Alignment::Center)
        .border_style(theme::accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(inner);

    let welcome = Paragraph::new(Line::from(Span::styled(
        "Sign in to your budget",
        theme::title_style(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(welcome, chunks[0]);

    form::render_form(
        f,
        chunks[1],
        &state.login_form,
        "Enter: log in | Tab: next field | Esc: quit",
    );
}
