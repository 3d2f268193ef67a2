use cerebro_api::endpoints::dashboard::DashboardSnapshot;
use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::stats::{report, StatsKind, StatsReport};
use crate::ui::{layouts, theme, utils};

pub fn render_stats_detail(
    f: &mut Frame,
    kind: StatsKind,
    snapshot: Option<&DashboardSnapshot>,
    today: NaiveDate,
    group_separator: &str,
) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        8,
        &format!("{} {}", kind.icon(), kind.title()),
        theme::accent_border_style(),
    );

    let mut lines = vec![Line::from("")];
    lines.extend(report_lines(report(kind, snapshot, today), group_separator));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc to close", theme::help_text_style())));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(body, inner);
}

fn report_lines(report: StatsReport, sep: &str) -> Vec<Line<'static>> {
    match report {
        StatsReport::NoData => vec![Line::from(Span::styled(
            "No data available",
            theme::loading_style(),
        ))],
        StatsReport::General { spent, available } => vec![
            Line::from(vec![
                Span::raw("Spent: "),
                Span::styled(utils::format_money(spent, sep), theme::error_style()),
            ]),
            Line::from(vec![Span::raw("Available: "), utils::money_span(available, sep)]),
        ],
        StatsReport::Prediction { spent, projected } => vec![
            Line::from(format!("Spent so far: {}", utils::format_money(spent, sep))),
            Line::from(Span::styled(
                format!("Projection: {}", utils::format_money(projected, sep)),
                theme::title_style(),
            )),
        ],
        StatsReport::Placeholder => vec![Line::from(Span::styled(
            "Not enough history yet",
            theme::muted_style(),
        ))],
    }
}
