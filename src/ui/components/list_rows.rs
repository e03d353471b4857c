//! Row geometry shared by the list panels.
//!
//! Panels draw a rounded border and one entry per line inside it, scrolled by
//! `offset`. Mouse hit-testing has to agree with rendering, so both go
//! through the functions here.

use ratatui::layout::Rect;

/// Columns taken by the drag handle glyph and its gap
pub const HANDLE_WIDTH: u16 = 2;

/// Area inside a full border
pub fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Entry index under a screen position, if any
pub fn row_at(rows: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    if !contains(rows, column, row) {
        return None;
    }
    let index = offset + usize::from(row - rows.y);
    (index < len).then_some(index)
}

/// Scroll offset that keeps `cursor` inside a window of `height` rows
pub fn keep_visible(offset: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return offset;
    }
    if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    }
}

/// Step a row cursor by `delta`, staying inside the list
pub fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
