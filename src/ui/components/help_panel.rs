//! Help overlay listing every key binding.

use crate::config::CommandModifier;
use crate::constants::TITLE_HELP;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpPanel {
    command: CommandModifier,
    scroll_offset: usize,
}

impl HelpPanel {
    pub fn new(command: CommandModifier) -> Self {
        Self {
            command,
            scroll_offset: 0,
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn content(&self) -> String {
        let cmd = self.command;
        format!(
            r"
TASKDECK - task workspace
=========================

PANELS
------
Tab / Shift+Tab   Cycle sidebar, bookmarks and todos
Click             Focus a panel or a row

TASKS (sidebar)
---------------
j/k, Up/Down      Switch task
a                 New task
e, Enter          Rename task (Enter saves, Esc cancels)
D                 Delete task

LISTS (navigation)
------------------
j/k, Up/Down      Move the row cursor
Enter, i          Edit the row
n                 Append an entry
o                 Open bookmark in the browser
x, Space          Toggle todo completion

EDITING A ROW
-------------
Enter             Insert an entry after this one
Backspace         Delete the row when it is empty
{cmd}+Backspace     Delete a todo even when it has text
Up/Down           Edit the previous / next row
{cmd}+Up/Down       Move the row
{cmd}+] / Tab       Indent todo
{cmd}+[ / Shift+Tab Outdent todo
{cmd}+Shift+C       Toggle todo completion
Esc               Stop editing

MOUSE
-----
Drag the handle   Reorder rows
Click checkbox    Toggle todo
{cmd}+Click         Open bookmark, or toggle todo
[+ New Todo]      Append a todo

GENERAL
-------
?                 Toggle this help
G                 Show logs
q, Ctrl+C         Quit
"
        )
    }
}

impl Component for HelpPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset += 1;
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = usize::MAX;
                Action::None
            }
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::ShowHelp(false),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (width, height) = LayoutManager::overlay_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let content = self.content();
        let lines: Vec<&str> = content.lines().collect();
        let visible_height = area.height.saturating_sub(2) as usize;

        // Clamp scroll offset to valid range
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let visible: Vec<&str> = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .copied()
            .collect();

        let paragraph = Paragraph::new(visible.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(TITLE_HELP)
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }
}
