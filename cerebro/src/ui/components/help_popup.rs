use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        20,
        "Help (press ? or Esc to close)",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Login => {
            items.push(("Tab/Shift-Tab", "Move between fields"));
            items.push(("Space", "Toggle remember me"));
            items.push(("Enter", "Log in"));
        }
        Screen::Dashboard => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "Open section detail"));
            items.push(("a", "Add expense"));
            items.push(("n", "New section"));
            items.push(("", ""));
            items.push(("--- Detail ---", ""));
            items.push(("e/Enter", "Edit category budget"));
            items.push(("n", "New category"));
            items.push(("d", "Delete category"));
            items.push(("D", "Delete whole section"));
            items.push(("y/n", "Answer a confirmation"));
        }
        Screen::Commitments => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Space/Enter", "Toggle paid / pending"));
            items.push(("a", "Add commitment"));
        }
        Screen::Stats => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter", "Open report"));
            items.push(("a", "Add expense"));
        }
    }

    items.push(("", ""));
    items.push(("--- Forms ---", ""));
    items.push(("Tab/↓", "Next field"));
    items.push(("Shift-Tab/↑", "Previous field"));
    items.push(("←/→", "Cycle a selection"));
    items.push(("Enter", "Submit"));
    items.push(("Esc", "Cancel"));

    if screen != Screen::Login {
        items.push(("", ""));
        items.push(("--- Global ---", ""));
        items.push(("1/2/3", "Dashboard / Commitments / Stats"));
        items.push(("Tab/Shift-Tab", "Next / previous view"));
        items.push(("r", "Refresh"));
        items.push(("L", "Log out"));
        items.push(("?", "Toggle this help"));
        items.push(("q", "Quit application"));
    }

    items
}
