//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;

/// Render a popup frame and return the inner area for content.
///
/// Centers the popup, clears what is underneath and draws the titled border.
/// `min_height` keeps short dialogs usable on small terminals.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    min_height: u16,
    title: &str,
    border_style: Style,
) -> Rect {
    let area = grow_to(layouts::centered_popup(size.0, size.1, parent_area), min_height, parent_area);

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}

/// Grow `area` vertically around its center, without leaving `parent`
fn grow_to(area: Rect, min_height: u16, parent: Rect) -> Rect {
    let height = area.height.max(min_height).min(parent.height);
    if height == area.height {
        return area;
    }
    let center = area.y + area.height / 2;
    let top = center.saturating_sub(height / 2).max(parent.y);
    let top = top.min(parent.bottom().saturating_sub(height));
    Rect::new(area.x, top, area.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_popup_grows_to_minimum() {
        let parent = Rect::new(0, 0, 100, 20);
        let grown = grow_to(Rect::new(25, 8, 50, 4), 10, parent);
        assert_eq!(grown.height, 10);
        assert!(grown.bottom() <= parent.bottom());
    }

    #[test]
    fn minimum_never_exceeds_parent() {
        let parent = Rect::new(0, 0, 40, 6);
        let grown = grow_to(Rect::new(10, 2, 20, 2), 12, parent);
        assert_eq!(grown.height, 6);
        assert_eq!(grown.y, 0);
    }
}
