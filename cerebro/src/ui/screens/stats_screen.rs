use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::model::stats::StatsKind;
use crate::state::AppState;
use crate::ui::{
    components::{help_bar, screen_title},
    layouts,
    screens::Screen,
    theme,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, state);

    let rows: Vec<Row> = StatsKind::ALL
        .iter()
        .map(|kind| {
            Row::new(vec![
                Cell::from(kind.icon()),
                Cell::from(kind.title()),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(20)])
        .column_spacing(theme::TABLE_COLUMN_SPACING)
        .block(Block::default().borders(Borders::ALL).title("Reports"))
        .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, content_area, &mut state.stats_table.borrow_mut());
    help_bar::render_help_bar(f, help_area, help_bar::hint_for(Screen::Stats));
}
