//! Todo list panel.
//!
//! Rows read `[handle] [checkbox] [text field]`, shifted right by the todo's
//! indentation. A `[+ New Todo]` control sits on the last line of the panel.

use crate::constants::{DEFAULT_INDENT_WIDTH, NEW_TODO_LABEL, TITLE_TODOS, TODO_PLACEHOLDER};
use crate::icons::IconService;
use crate::store::{Intent, Todo};
use crate::ui::components::list_rows::{self, HANDLE_WIDTH};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::focus::FocusRegistry;
use crate::ui::keymap::{FieldCommand, Keymap};
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

/// Columns taken by `[x] `
pub const CHECKBOX_WIDTH: u16 = 4;

/// Whether a text edit should reach the store.
///
/// Clearing a todo always goes through; otherwise an unchanged value is dropped.
pub fn should_dispatch_todo_text(current: &str, new: &str) -> bool {
    new.is_empty() || new != current
}

/// What a click on a todo row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowZone {
    Indent,
    Handle,
    Checkbox,
    /// Column inside the text, in chars
    Field(usize),
}

pub struct TodoListComponent {
    todos: Vec<Todo>,
    focus: FocusRegistry,
    field: TextField,
    keymap: Keymap,
    icons: IconService,
    indent_width: u16,
    cursor: usize,
    offset: usize,
    area: Rect,
    drag_from: Option<usize>,
    active: bool,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new(Keymap::default(), IconService::default(), DEFAULT_INDENT_WIDTH)
    }
}

impl TodoListComponent {
    pub fn new(keymap: Keymap, icons: IconService, indent_width: u16) -> Self {
        Self {
            todos: Vec::new(),
            focus: FocusRegistry::default(),
            field: TextField::default(),
            keymap,
            icons,
            indent_width,
            cursor: 0,
            offset: 0,
            area: Rect::default(),
            drag_from: None,
            active: false,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Replace the snapshot and carry focus over to the new rows
    pub fn update_data(&mut self, todos: Vec<Todo>) {
        let previous = self.focused_id();
        self.todos = todos;
        self.focus.set_len(self.todos.len());

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

        if let Some(index) = self.focus.focused() {
            self.cursor = index;
            let text = &self.todos[index].text;
            if self.focused_id() == previous {
                self.field.clamp(text);
            } else {
                self.field.place_at_end(text);
            }
        }
        self.cursor = list_rows::step(self.cursor, 0, self.todos.len());
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

    pub fn todos(&self) -> &[Todo] {
        &self.todos
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

    pub fn focus_row(&mut self, index: usize) -> bool {
        self.focus_row_at(index, None)
    }

    fn focus_row_at(&mut self, index: usize, column: Option<usize>) -> bool {
        if !self.focus.focus(index as isize) {
            return false;
        }
        self.cursor = index;
        let text = &self.todos[index].text;
        match column {
            Some(column) => self.field.set_cursor(text, column),
            None => self.field.place_at_end(text),
        }
        true
    }

    fn focused_id(&self) -> Option<Uuid> {
        self.focus.focused().and_then(|index| self.todos.get(index)).map(|todo| todo.id)
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    /// Append an empty todo and edit it once it exists
    fn append_todo(&mut self) -> Action {
        self.focus.request(self.todos.len() as isize);
        Action::Dispatch(Intent::NewTodo { after: None })
    }

    fn inner(&self) -> Rect {
        list_rows::inner_area(self.area)
    }

    /// Entry rows, leaving the last inner line to the footer
    fn rows_area(&self) -> Rect {
        let inner = self.inner();
        Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        }
    }

    fn footer_row(&self) -> Option<u16> {
        let inner = self.inner();
        (inner.height > 0).then(|| inner.y + inner.height - 1)
    }

    fn indent_columns(&self, todo: &Todo) -> u16 {
        u16::try_from(todo.ident).unwrap_or(u16::MAX).saturating_mul(self.indent_width)
    }

    fn zone_at(&self, todo: &Todo, column: u16) -> RowZone {
        let indent = self.indent_columns(todo);
        if column < indent {
            RowZone::Indent
        } else if column < indent + HANDLE_WIDTH {
            RowZone::Handle
        } else if column < indent + HANDLE_WIDTH + CHECKBOX_WIDTH {
            RowZone::Checkbox
        } else {
            RowZone::Field(usize::from(column - indent - HANDLE_WIDTH - CHECKBOX_WIDTH))
        }
    }

    fn handle_field_key(&mut self, index: usize, key: KeyEvent) -> Action {
        let id = self.todos[index].id;
        let field_empty = self.todos[index].text.is_empty();

        if let Some(command) = self.keymap.todo_command(&key, field_empty) {
            return match command {
                FieldCommand::RemoveAndFocusPrevious => {
                    self.focus.request(index as isize - 1);
                    Action::Dispatch(Intent::RemoveTodo(id))
                }
                FieldCommand::InsertAfter => {
                    self.focus.request(index as isize + 1);
                    Action::Dispatch(Intent::NewTodo { after: Some(id) })
                }
                FieldCommand::Blur => {
                    self.focus.blur();
                    Action::None
                }
                FieldCommand::FocusPrevious => {
                    if let Some(previous) = index.checked_sub(1) {
                        self.focus_row(previous);
                    }
                    Action::None
                }
                FieldCommand::FocusNext => {
                    self.focus_row(index + 1);
                    Action::None
                }
                FieldCommand::MoveUp => Action::Dispatch(Intent::MoveTodo { id, by: -1 }),
                FieldCommand::MoveDown => Action::Dispatch(Intent::MoveTodo { id, by: 1 }),
                FieldCommand::Outdent => Action::Dispatch(Intent::IndentTodo { id, by: -1 }),
                FieldCommand::Indent => Action::Dispatch(Intent::IndentTodo { id, by: 1 }),
                FieldCommand::ToggleCompletion => Action::Dispatch(Intent::ToggleTodo(id)),
            };
        }

        match self.field.apply(&self.todos[index].text, &key) {
            Edit::Changed(text) if should_dispatch_todo_text(&self.todos[index].text, &text) => {
                Action::Dispatch(Intent::UpdateTodoText { id, text })
            }
            _ => Action::None,
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Action {
        let len = self.todos.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = list_rows::step(self.cursor, -1, len);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = list_rows::step(self.cursor, 1, len);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                self.focus_row(self.cursor);
                Action::None
            }
            KeyCode::Char('x') | KeyCode::Char(' ') => match self.todos.get(self.cursor) {
                Some(todo) => Action::Dispatch(Intent::ToggleTodo(todo.id)),
                None => Action::None,
            },
            KeyCode::Char('n') => self.append_todo(),
            _ => Action::None,
        }
    }

    fn handle_left_click(&mut self, mouse: MouseEvent) -> Action {
        if self.footer_row() == Some(mouse.row) && list_rows::contains(self.inner(), mouse.column, mouse.row) {
            return self.append_todo();
        }

        let rows = self.rows_area();
        let Some(index) = list_rows::row_at(rows, self.offset, self.todos.len(), mouse.column, mouse.row) else {
            self.focus.blur();
            return Action::None;
        };

        let todo = &self.todos[index];
        let id = todo.id;
        let command = self.keymap.is_command(mouse.modifiers);
        match self.zone_at(todo, mouse.column - rows.x) {
            RowZone::Indent | RowZone::Handle if command => Action::Dispatch(Intent::ToggleTodo(id)),
            RowZone::Handle => {
                self.drag_from = Some(index);
                Action::None
            }
            // The checkbox handles the click on its own
            RowZone::Checkbox => Action::Dispatch(Intent::ToggleTodo(id)),
            RowZone::Indent => {
                self.focus_row(index);
                Action::None
            }
            RowZone::Field(column) => {
                self.focus_row_at(index, Some(column));
                Action::None
            }
        }
    }

    fn handle_release(&mut self, mouse: MouseEvent) -> Action {
        let Some(from) = self.drag_from.take() else {
            return Action::None;
        };
        let rows = self.rows_area();
        let Some(to) = list_rows::row_at(rows, self.offset, self.todos.len(), mouse.column, mouse.row) else {
            return Action::None;
        };
        let Some(todo) = self.todos.get(from) else {
            return Action::None;
        };
        log::debug!("Todo dragged from {from} to {to}");
        Action::Dispatch(Intent::MoveTodo {
            id: todo.id,
            by: to as i64 - from as i64,
        })
    }

    fn render_row(&self, index: usize, todo: &Todo) -> Line<'static> {
        let padding = " ".repeat(usize::from(self.indent_columns(todo)));
        let text = if todo.text.is_empty() {
            Span::styled(TODO_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else if todo.is_completed {
            Span::styled(
                todo.text.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            Span::raw(todo.text.clone())
        };

        let checkbox_color = if todo.is_completed { Color::Green } else { Color::White };
        let mut line = Line::from(vec![
            Span::raw(padding),
            Span::styled(format!("{} ", self.icons.drag_handle()), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} ", self.icons.checkbox(todo.is_completed)), Style::default().fg(checkbox_color)),
            text,
        ]);

        if self.focus.is_focused(index) {
            line = line.style(Style::default().bg(Color::Rgb(40, 40, 40)));
        } else if self.active && index == self.cursor && self.focus.focused().is_none() {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        line
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus.focused() {
            Some(index) if index < self.todos.len() => self.handle_field_key(index, key),
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
                if self.offset + visible < self.todos.len() {
                    self.offset += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_paste(&mut self, text: String) -> Action {
        match self.focused_id() {
            Some(id) => Action::Dispatch(Intent::PasteTodos { id, clipboard: text }),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let rows = self.rows_area();
        let visible = usize::from(rows.height);

        let anchor = self.focus.focused().unwrap_or(self.cursor);
        self.offset = list_rows::keep_visible(self.offset, anchor, visible);

        let mut lines: Vec<Line> = self
            .todos
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .map(|(index, todo)| self.render_row(index, todo))
            .collect();
        lines.resize(visible, Line::default());
        lines.push(Line::from(Span::styled(NEW_TODO_LABEL, Style::default().fg(Color::Green))));

        let done = self.todos.iter().filter(|todo| todo.is_completed).count();
        let border_color = if self.active { Color::Cyan } else { Color::DarkGray };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("{} ({}/{})", TITLE_TODOS, done, self.todos.len()))
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(paragraph, rect);

        if let Some(index) = self.focus.focused() {
            if index >= self.offset && index < self.offset + visible {
                let todo = &self.todos[index];
                let start = rows.x.saturating_add(self.indent_columns(todo)).saturating_add(HANDLE_WIDTH + CHECKBOX_WIDTH);
                let x = start.saturating_add(u16::try_from(self.field.cursor()).unwrap_or(u16::MAX));
                let y = rows.y + (index - self.offset) as u16;
                f.set_cursor_position((x.min(rows.x + rows.width.saturating_sub(1)), y));
            }
        }

        let scrollbar_area = ScrollbarHelper::scrollbar_area(rect, self.todos.len(), visible);
        self.scrollbar_helper.update_state(self.todos.len(), self.offset, visible);
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
        self.focus.blur();
        Action::None
    }
}
