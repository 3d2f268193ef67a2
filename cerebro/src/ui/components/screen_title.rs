//! Tab header shared by the signed-in screens, with sync status on the right.

use chrono::{DateTime, Local};
use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::{AppState, LoadingState};
use crate::ui::{layouts, screens::Screen, theme};

const STATUS_WIDTH: u16 = 22;

pub fn render_screen_title(f: &mut Frame, area: Rect, state: &AppState) {
    let (tabs_area, status_area) = layouts::header_with_status(area, STATUS_WIDTH);

    let titles = Screen::TABS
        .iter()
        .enumerate()
        .map(|(i, screen)| format!("{} {}", i + 1, screen.title()));
    let selected = Screen::TABS
        .iter()
        .position(|screen| *screen == state.current_screen())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme::help_text_style())
        .highlight_style(theme::title_style().add_modifier(Modifier::UNDERLINED))
        .divider("|");
    f.render_widget(tabs, tabs_area);

    let loading = match state.current_screen() {
        Screen::Login => return,
        Screen::Dashboard => &state.dashboard_loading,
        Screen::Commitments => &state.commitments_loading,
        Screen::Stats => &state.stats_loading,
    };

    if let LoadingState::Loading(throbber_state) = loading {
        let throbber = Throbber::default()
            .label("Syncing")
            .style(theme::loading_style())
            .throbber_set(BRAILLE_EIGHT);
        f.render_stateful_widget(throbber, status_area, &mut throbber_state.clone());
        return;
    }

    let status = Paragraph::new(status_line(loading, state.last_sync)).alignment(Alignment::Right);
    f.render_widget(status, status_area);
}

/// "Synced 14:03:22", the short error ("Err 500"), or nothing yet
fn status_line(loading: &LoadingState, last_sync: Option<DateTime<Local>>) -> Line<'static> {
    match (loading, last_sync) {
        (LoadingState::Error(error), _) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )),
        (_, Some(at)) => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("Synced {}", at.format("%H:%M:%S")),
                theme::help_text_style(),
            ),
        ]),
        _ => Line::from(""),
    }
}
