//! Bookmark list panel.
//!
//! Each row reads `[handle] [ordinal + link glyph] [uri field]`. The panel keeps
//! a read-only snapshot of the active task's bookmarks and turns keys, clicks
//! and pastes into store intents. Which row's field owns the keyboard is
//! tracked by a [`FocusRegistry`] and follows the entry id across refreshes.

use crate::constants::{BOOKMARK_PLACEHOLDER, TITLE_BOOKMARKS};
use crate::icons::IconService;
use crate::store::paste::has_line_break;
use crate::store::{Bookmark, Intent};
use crate::ui::components::list_rows::{self, HANDLE_WIDTH};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::focus::FocusRegistry;
use crate::ui::keymap::{FieldCommand, Keymap};
use crate::ui::links::{is_linkable, ordinal_label};
use crate::ui::text_field::{Edit, TextField};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};
use uuid::Uuid;

/// First column of the ordinal and link glyph, relative to the row
const LABEL_COLUMN: u16 = HANDLE_WIDTH;
/// First column of the text field, relative to the row
pub const FIELD_COLUMN: u16 = LABEL_COLUMN + 3;

pub struct BookmarkListComponent {
    bookmarks: Vec<Bookmark>,
    focus: FocusRegistry,
    field: TextField,
    keymap: Keymap,
    icons: IconService,
    /// Row under the navigation cursor
    cursor: usize,
    offset: usize,
    area: Rect,
    /// Row whose handle was pressed
    drag_from: Option<usize>,
    active: bool,
    /// Actions raised while refreshing, drained by the app
    outbox: Vec<Action>,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for BookmarkListComponent {
    fn default() -> Self {
        Self::new(Keymap::default(), IconService::default())
    }
}

impl BookmarkListComponent {
    pub fn new(keymap: Keymap, icons: IconService) -> Self {
        Self {
            bookmarks: Vec::new(),
            focus: FocusRegistry::default(),
            field: TextField::default(),
            keymap,
            icons,
            cursor: 0,
            offset: 0,
            area: Rect::default(),
            drag_from: None,
            active: false,
            outbox: Vec::new(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Replace the snapshot and carry focus over to the new rows
    pub fn update_data(&mut self, bookmarks: Vec<Bookmark>) {
        let previous = self.focused_id();
        self.bookmarks = bookmarks;
        self.focus.set_len(self.bookmarks.len());

        let requested = self.focus.take_request().is_some_and(|index| self.focus.focus(index));
        if !requested {
            match previous.and_then(|id| self.index_of(id)) {
                Some(index) => {
                    self.focus.focus(index as isize);
                }
                None => {
                    self.focus.blur();
                }
            }
        }

        let focused = self.focused_id();
        let candidate = self
            .bookmarks
            .iter()
            .position(|bookmark| bookmark.auto_focus && Some(bookmark.id) != focused);
        if let Some(index) = candidate {
            self.focus.focus(index as isize);
        }

        // The row that lost focus during the refresh counts as blurred
        if let Some(id) = previous {
            if self.focused_id() != Some(id) && self.index_of(id).is_some() {
                self.outbox.push(Action::Dispatch(Intent::ClearBookmarkAutoFocus(id)));
            }
        }

        if let Some(index) = self.focus.focused() {
            self.cursor = index;
            let uri = &self.bookmarks[index].uri;
            if self.focused_id() == previous {
                self.field.clamp(uri);
            } else {
                self.field.place_at_end(uri);
            }
        }
        self.cursor = list_rows::step(self.cursor, 0, self.bookmarks.len());
    }

    pub fn take_outbox(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.outbox)
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus.focused()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn field_cursor(&self) -> usize {
        self.field.cursor()
    }

    /// Give the field of row `index` the keyboard, cursor at the end
    pub fn focus_row(&mut self, index: usize) -> Action {
        self.focus_row_at(index, None)
    }

    fn focus_row_at(&mut self, index: usize, column: Option<usize>) -> Action {
        let previous = self.focused_id();
        if !self.focus.focus(index as isize) {
            return Action::None;
        }
        self.cursor = index;
        let uri = &self.bookmarks[index].uri;
        match column {
            Some(column) => self.field.set_cursor(uri, column),
            None => self.field.place_at_end(uri),
        }
        match previous {
            Some(id) if id != self.bookmarks[index].id => Action::Dispatch(Intent::ClearBookmarkAutoFocus(id)),
            _ => Action::None,
        }
    }

    fn blur_field(&mut self) -> Action {
        match self.focus.blur().and_then(|index| self.bookmarks.get(index)) {
            Some(bookmark) => Action::Dispatch(Intent::ClearBookmarkAutoFocus(bookmark.id)),
            None => Action::None,
        }
    }

    fn focused_id(&self) -> Option<Uuid> {
        self.focus.focused().and_then(|index| self.bookmarks.get(index)).map(|bookmark| bookmark.id)
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.bookmarks.iter().position(|bookmark| bookmark.id == id)
    }

    fn rows_area(&self) -> Rect {
        list_rows::inner_area(self.area)
    }

    fn open_action(&self, index: usize) -> Action {
        match self.bookmarks.get(index) {
            Some(bookmark) if is_linkable(&bookmark.uri) => Action::OpenUri(bookmark.uri.clone()),
            _ => Action::None,
        }
    }

    fn handle_field_key(&mut self, index: usize, key: KeyEvent) -> Action {
        let id = self.bookmarks[index].id;
        let field_empty = self.bookmarks[index].uri.is_empty();

        if let Some(command) = self.keymap.bookmark_command(&key, field_empty) {
            return match command {
                FieldCommand::RemoveAndFocusPrevious => {
                    self.focus.request(index as isize - 1);
                    Action::Dispatch(Intent::RemoveBookmark(id))
                }
                FieldCommand::InsertAfter => Action::Dispatch(Intent::NewBookmark { after: Some(id) }),
                FieldCommand::Blur => self.blur_field(),
                FieldCommand::FocusPrevious => match index.checked_sub(1) {
                    Some(previous) => self.focus_row(previous),
                    None => Action::None,
                },
                FieldCommand::FocusNext => self.focus_row(index + 1),
                FieldCommand::MoveUp => Action::Dispatch(Intent::MoveBookmark { id, by: -1 }),
                FieldCommand::MoveDown => Action::Dispatch(Intent::MoveBookmark { id, by: 1 }),
                FieldCommand::Outdent | FieldCommand::Indent | FieldCommand::ToggleCompletion => Action::None,
            };
        }

        match self.field.apply(&self.bookmarks[index].uri, &key) {
            Edit::Changed(uri) => Action::Dispatch(Intent::UpdateBookmark { id, uri }),
            Edit::Moved | Edit::Ignored => Action::None,
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Action {
        let len = self.bookmarks.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = list_rows::step(self.cursor, -1, len);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = list_rows::step(self.cursor, 1, len);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('i') => self.focus_row(self.cursor),
            KeyCode::Char('o') => self.open_action(self.cursor),
            KeyCode::Char('n') => Action::Dispatch(Intent::NewBookmark { after: None }),
            _ => Action::None,
        }
    }

    fn handle_left_click(&mut self, mouse: MouseEvent) -> Action {
        let rows = self.rows_area();
        let Some(index) = list_rows::row_at(rows, self.offset, self.bookmarks.len(), mouse.column, mouse.row) else {
            // Empty panel space
            return self.blur_field();
        };

        let column = mouse.column - rows.x;
        if column < LABEL_COLUMN {
            self.drag_from = Some(index);
            return Action::None;
        }

        let linkable = is_linkable(&self.bookmarks[index].uri);
        if linkable && (self.keymap.is_command(mouse.modifiers) || column < FIELD_COLUMN) {
            return self.open_action(index);
        }

        let text_column = column.checked_sub(FIELD_COLUMN).map(usize::from);
        self.focus_row_at(index, Some(text_column.unwrap_or(0)))
    }

    fn handle_release(&mut self, mouse: MouseEvent) -> Action {
        let Some(from) = self.drag_from.take() else {
            return Action::None;
        };
        let rows = self.rows_area();
        let Some(to) = list_rows::row_at(rows, self.offset, self.bookmarks.len(), mouse.column, mouse.row) else {
            return Action::None;
        };
        let Some(bookmark) = self.bookmarks.get(from) else {
            return Action::None;
        };
        log::debug!("Bookmark dragged from {from} to {to}");
        Action::Dispatch(Intent::MoveBookmark {
            id: bookmark.id,
            by: to as i64 - from as i64,
        })
    }

    fn render_row(&self, index: usize, bookmark: &Bookmark) -> Line<'static> {
        let focused = self.focus.is_focused(index);
        let linkable = is_linkable(&bookmark.uri);

        let label = if linkable {
            let ordinal = ordinal_label(index, self.bookmarks.len());
            format!("{:<1}{} ", ordinal, self.icons.link())
        } else {
            "   ".to_string()
        };

        let text = if bookmark.uri.is_empty() {
            Span::styled(BOOKMARK_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else if linkable {
            Span::styled(
                bookmark.uri.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Span::raw(bookmark.uri.clone())
        };

        let mut line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.drag_handle()), Style::default().fg(Color::DarkGray)),
            Span::styled(label, Style::default().fg(Color::Cyan)),
            text,
        ]);

        if focused {
            line = line.style(Style::default().bg(Color::Rgb(40, 40, 40)));
        } else if self.active && index == self.cursor && self.focus.focused().is_none() {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        line
    }
}

impl Component for BookmarkListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus.focused() {
            Some(index) if index < self.bookmarks.len() => self.handle_field_key(index, key),
            _ => self.handle_navigation_key(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(mouse),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(mouse),
            MouseEventKind::ScrollUp => {
                self.offset = self.offset.saturating_sub(1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                let visible = usize::from(self.rows_area().height);
                if self.offset + visible < self.bookmarks.len() {
                    self.offset += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_paste(&mut self, text: String) -> Action {
        let Some(index) = self.focus.focused() else {
            return Action::None;
        };
        let Some(bookmark) = self.bookmarks.get(index) else {
            return Action::None;
        };
        let id = bookmark.id;

        if has_line_break(&text) {
            return Action::Dispatch(Intent::PasteBookmarks { id, clipboard: text });
        }
        let uri = self.field.insert_str(&bookmark.uri, &text);
        Action::Dispatch(Intent::UpdateBookmark { id, uri })
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let rows = self.rows_area();
        let visible = usize::from(rows.height);

        let anchor = self.focus.focused().unwrap_or(self.cursor);
        self.offset = list_rows::keep_visible(self.offset, anchor, visible);

        let lines: Vec<Line> = self
            .bookmarks
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .map(|(index, bookmark)| self.render_row(index, bookmark))
            .collect();

        let border_color = if self.active { Color::Cyan } else { Color::DarkGray };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("{} ({})", TITLE_BOOKMARKS, self.bookmarks.len()))
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(paragraph, rect);

        if let Some(index) = self.focus.focused() {
            if index >= self.offset && index < self.offset + visible {
                let max_x = rows.x + rows.width.saturating_sub(1);
                let x = (rows.x + FIELD_COLUMN).saturating_add(u16::try_from(self.field.cursor()).unwrap_or(u16::MAX));
                let y = rows.y + (index - self.offset) as u16;
                f.set_cursor_position((x.min(max_x), y));
            }
        }

        let scrollbar_area = ScrollbarHelper::scrollbar_area(rect, self.bookmarks.len(), visible);
        self.scrollbar_helper.update_state(self.bookmarks.len(), self.offset, visible);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn is_editing(&self) -> bool {
        self.focus.focused().is_some()
    }

    fn on_focus(&mut self) {
        self.active = true;
    }

    fn on_blur(&mut self) -> Action {
        self.active = false;
        self.drag_from = None;
        self.blur_field()
    }
}
