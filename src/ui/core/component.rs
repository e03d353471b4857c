use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// Bracketed paste delivered as one string
    fn handle_paste(&mut self, _text: String) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// True while a text field owns the keyboard, which disables global keys
    fn is_editing(&self) -> bool {
        false
    }

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) -> Action {
        Action::None
    }
}
