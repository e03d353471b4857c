//! Layout management and calculations

use crate::constants::{BOOKMARKS_MAX_HEIGHT_PERCENT, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of every panel for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceAreas {
    pub sidebar: Rect,
    pub bookmarks: Rect,
    pub todos: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the panels, given the bookmark count
    #[must_use]
    pub fn workspace(area: Rect, sidebar_width: u16, bookmark_count: usize) -> WorkspaceAreas {
        let (top, status) = Self::main_layout(area);
        let (sidebar, right) = Self::top_pane_layout(top, sidebar_width);
        let (bookmarks, todos) = Self::right_pane_layout(right, bookmark_count);
        WorkspaceAreas {
            sidebar,
            bookmarks,
            todos,
            status,
        }
    }

    /// Calculate the main layout areas (panels on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));
        (top_area, status_area)
    }

    /// Sidebar on the left, lists on the right
    #[must_use]
    pub fn top_pane_layout(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
        let sidebar_width = sidebar_width
            .clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH)
            .min(area.width / 2);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Bookmarks on top, sized to their rows, todos take the rest
    #[must_use]
    pub fn right_pane_layout(area: Rect, bookmark_count: usize) -> (Rect, Rect) {
        let height = Self::bookmarks_height(area.height, bookmark_count);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// One line per bookmark plus borders, capped to a share of the pane
    #[must_use]
    pub fn bookmarks_height(pane_height: u16, bookmark_count: usize) -> u16 {
        let wanted = u16::try_from(bookmark_count.max(1)).unwrap_or(u16::MAX).saturating_add(2);
        let cap = (pane_height * BOOKMARKS_MAX_HEIGHT_PERCENT / 100).max(3);
        wanted.min(cap).min(pane_height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate overlay dimensions based on screen size
    #[must_use]
    pub fn overlay_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 70 };
        let height = if screen_height < 40 { 90 } else { 75 };
        (width, height)
    }
}
