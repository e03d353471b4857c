//! Task sidebar component.
//!
//! Lists every task and shows which one is active. Selecting a row switches
//! the bookmark and todo panels over to that task. Tasks are created, renamed
//! inline and deleted from here.

use crate::constants::{DEFAULT_TASK_TITLE, TITLE_TASKS};
use crate::store::{Intent, Task};
use crate::ui::components::list_rows;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::text_field::{Edit, TextField};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use uuid::Uuid;

/// Inline rename in progress
#[derive(Debug, Clone)]
struct Rename {
    id: Uuid,
    buffer: String,
    field: TextField,
}

/// Navigation sidebar listing the tasks.
///
/// Features:
/// - Keyboard navigation (Up/Down, j/k) that activates the task under the cursor
/// - `a` to add, `e` to rename inline, `D` to delete
/// - Mouse support (click to select, wheel to step)
pub struct SidebarComponent {
    tasks: Vec<Task>,
    active: Option<Uuid>,
    rename: Option<Rename>,
    list_state: ListState,
    area: Rect,
    focused: bool,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            active: None,
            rename: None,
            list_state: ListState::default(),
            area: Rect::default(),
            focused: false,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, active: Option<Uuid>) {
        self.tasks = tasks;
        self.active = active;
        if let Some(rename) = &self.rename {
            if !self.tasks.iter().any(|task| task.id == rename.id) {
                self.rename = None;
            }
        }
        self.list_state.select(self.active_index());
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_active(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_renaming(&self) -> bool {
        self.rename.is_some()
    }

    fn active_index(&self) -> Option<usize> {
        self.active.and_then(|id| self.tasks.iter().position(|task| task.id == id))
    }

    /// Activate the task `delta` rows away from the current one
    fn select_relative(&mut self, delta: isize) -> Action {
        let current = self.active_index().unwrap_or(0);
        let next = list_rows::step(current, delta, self.tasks.len());
        match self.tasks.get(next) {
            Some(task) if Some(task.id) != self.active => Action::Dispatch(Intent::SelectTask(task.id)),
            _ => Action::None,
        }
    }

    fn start_rename(&mut self) -> Action {
        let Some(task) = self.active_index().and_then(|index| self.tasks.get(index)) else {
            return Action::None;
        };
        let mut field = TextField::default();
        field.place_at_end(&task.title);
        self.rename = Some(Rename {
            id: task.id,
            buffer: task.title.clone(),
            field,
        });
        Action::None
    }

    fn handle_rename_key(&mut self, key: KeyEvent) -> Action {
        let Some(rename) = self.rename.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Enter => match self.rename.take() {
                Some(Rename { id, buffer, .. }) => Action::Dispatch(Intent::RenameTask { id, title: buffer }),
                None => Action::None,
            },
            KeyCode::Esc => {
                self.rename = None;
                Action::None
            }
            _ => {
                if let Edit::Changed(value) = rename.field.apply(&rename.buffer, &key) {
                    rename.buffer = value;
                }
                Action::None
            }
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.rename.is_some() {
            return self.handle_rename_key(key);
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_relative(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_relative(-1),
            KeyCode::Char('a') => Action::Dispatch(Intent::NewTask {
                title: DEFAULT_TASK_TITLE.to_string(),
            }),
            KeyCode::Char('e') | KeyCode::Enter => self.start_rename(),
            KeyCode::Char('D') => match self.active {
                Some(id) => Action::Dispatch(Intent::RemoveTask(id)),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            // Left click for selection
            MouseEventKind::Down(MouseButton::Left) => {
                let rows = list_rows::inner_area(self.area);
                let clicked = list_rows::row_at(rows, self.list_state.offset(), self.tasks.len(), mouse.column, mouse.row);
                match clicked.and_then(|index| self.tasks.get(index)) {
                    Some(task) if Some(task.id) != self.active => {
                        self.rename = None;
                        Action::Dispatch(Intent::SelectTask(task.id))
                    }
                    _ => Action::None,
                }
            }
            // Mouse wheel steps through tasks like j/k
            MouseEventKind::ScrollUp => self.select_relative(-1),
            MouseEventKind::ScrollDown => self.select_relative(1),
            _ => Action::None,
        }
    }

    fn handle_paste(&mut self, text: String) -> Action {
        if let Some(rename) = self.rename.as_mut() {
            let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            rename.buffer = rename.field.insert_str(&rename.buffer, &single_line);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| match &self.rename {
                Some(rename) if rename.id == task.id => ListItem::new(Line::from(vec![
                    Span::styled("✎ ", Style::default().fg(Color::Yellow)),
                    Span::raw(rename.buffer.clone()),
                ])),
                _ => ListItem::new(Line::from(Span::raw(task.title.clone()))),
            })
            .collect();

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(TITLE_TASKS)
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD));

        self.list_state.select(self.active_index());
        f.render_stateful_widget(list, rect, &mut self.list_state);

        let rows = list_rows::inner_area(rect);
        if let (Some(rename), Some(index)) = (&self.rename, self.active_index()) {
            let offset = self.list_state.offset();
            if index >= offset && index < offset + usize::from(rows.height) {
                let x = (rows.x + 2).saturating_add(u16::try_from(rename.field.cursor()).unwrap_or(u16::MAX));
                let y = rows.y + (index - offset) as u16;
                f.set_cursor_position((x.min(rows.x + rows.width.saturating_sub(1)), y));
            }
        }

        let visible = usize::from(rows.height);
        let scrollbar_area = ScrollbarHelper::scrollbar_area(rect, self.tasks.len(), visible);
        self.scrollbar_helper
            .update_state(self.tasks.len(), self.list_state.offset(), visible);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn is_editing(&self) -> bool {
        self.rename.is_some()
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        self.rename = None;
        Action::None
    }
}
