//! Log overlay showing the in-memory log ring, newest first.

use crate::constants::TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    scroll_offset: usize,
    scrollbar_helper: ScrollbarHelper,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            scroll_offset: 0,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for LogsPanel {
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
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_offset += 10;
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::Char('G') | KeyCode::Esc | KeyCode::Char('q') => Action::ShowLogs(false),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(90, 90, rect);
        f.render_widget(Clear, area);

        let logs = self.logger.get_logs();
        let lines: Vec<String> = if logs.is_empty() {
            vec!["No logs yet".to_string()]
        } else {
            logs
        };

        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let text = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(TITLE_LOGS)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(paragraph, area);

        let scrollbar_area = ScrollbarHelper::scrollbar_area(area, lines.len(), visible_height);
        self.scrollbar_helper
            .update_state(lines.len(), self.scroll_offset, visible_height);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
