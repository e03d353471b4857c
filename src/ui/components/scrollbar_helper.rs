//! Scrollbar shared by the scrollable panels and overlays.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the styling every panel uses.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Record the content length, scroll position and viewport height.
    pub fn update_state(&mut self, total_items: usize, position: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .viewport_content_length(viewport_height)
            .position(position);
    }

    /// Column along the right border of a bordered `rect`, when `total_items`
    /// do not fit into `visible_rows`.
    pub fn scrollbar_area(rect: Rect, total_items: usize, visible_rows: usize) -> Option<Rect> {
        (total_items > visible_rows).then(|| Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        })
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
