//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::CommandModifier;
use crate::ui::core::FocusArea;

/// What the status bar should describe this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    pub area: FocusArea,
    pub editing: bool,
    pub command: CommandModifier,
    pub error_message: Option<&'a str>,
    pub info_message: Option<&'a str>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the focused panel
    pub fn hints(info: &StatusInfo<'_>) -> String {
        let cmd = info.command;
        match (info.area, info.editing) {
            (FocusArea::Sidebar, true) => "Enter: save • Esc: cancel".to_string(),
            (FocusArea::Sidebar, false) => "j/k: switch • a: new • e: rename • D: delete • Tab: next panel • ?: help".to_string(),
            (FocusArea::Bookmarks, true) => {
                format!("Enter: new • Esc: done • {cmd}+↑↓: move • Backspace on empty: delete")
            }
            (FocusArea::Bookmarks, false) => {
                "j/k: move • Enter: edit • n: new • o: open • Tab: next panel • ?: help • q: quit".to_string()
            }
            (FocusArea::Todos, true) => {
                format!("Enter: new • Esc: done • {cmd}+]/[ : indent • {cmd}+Shift+C: toggle • {cmd}+↑↓: move")
            }
            (FocusArea::Todos, false) => {
                "j/k: move • Enter: edit • n: new • x: toggle • Tab: next panel • ?: help • q: quit".to_string()
            }
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo<'_>) {
        let (status_text, status_color) = if let Some(error) = info.error_message {
            (error.to_string(), Color::Red)
        } else if let Some(message) = info.info_message {
            (message.to_string(), Color::Yellow)
        } else {
            (Self::hints(info), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
