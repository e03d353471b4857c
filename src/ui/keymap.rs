//! Keyboard contract of the list panels while a text field is focused.
//!
//! Keys that map to a [`FieldCommand`] are structural; everything else falls
//! through to text editing. The two panels differ on purpose: bookmarks only
//! delete on Backspace when the field is empty, todos also delete when the
//! command modifier is held, and only todos know about indentation and
//! completion.

use crate::config::CommandModifier;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCommand {
    RemoveAndFocusPrevious,
    InsertAfter,
    Blur,
    FocusPrevious,
    FocusNext,
    MoveUp,
    MoveDown,
    Outdent,
    Indent,
    ToggleCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    command: KeyModifiers,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(CommandModifier::default())
    }
}

impl Keymap {
    pub fn new(modifier: CommandModifier) -> Self {
        let command = match modifier {
            CommandModifier::Ctrl => KeyModifiers::CONTROL,
            CommandModifier::Alt => KeyModifiers::ALT,
            CommandModifier::Super => KeyModifiers::SUPER,
        };
        Self { command }
    }

    pub fn is_command(&self, modifiers: KeyModifiers) -> bool {
        modifiers.contains(self.command)
    }

    pub fn bookmark_command(&self, key: &KeyEvent, field_empty: bool) -> Option<FieldCommand> {
        match key.code {
            KeyCode::Backspace if field_empty => Some(FieldCommand::RemoveAndFocusPrevious),
            _ => self.shared_command(key),
        }
    }

    pub fn todo_command(&self, key: &KeyEvent, field_empty: bool) -> Option<FieldCommand> {
        let command = self.is_command(key.modifiers);
        match key.code {
            KeyCode::Backspace if field_empty || command => Some(FieldCommand::RemoveAndFocusPrevious),
            KeyCode::Char('[') if command => Some(FieldCommand::Outdent),
            KeyCode::Char(']') if command => Some(FieldCommand::Indent),
            // Ctrl+[ reaches legacy terminals as Escape
            KeyCode::BackTab => Some(FieldCommand::Outdent),
            KeyCode::Tab => Some(FieldCommand::Indent),
            KeyCode::Char('C') if command => Some(FieldCommand::ToggleCompletion),
            KeyCode::Char('c') if command && key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(FieldCommand::ToggleCompletion)
            }
            _ => self.shared_command(key),
        }
    }

    fn shared_command(&self, key: &KeyEvent) -> Option<FieldCommand> {
        let command = self.is_command(key.modifiers);
        match key.code {
            KeyCode::Enter => Some(FieldCommand::InsertAfter),
            KeyCode::Esc => Some(FieldCommand::Blur),
            KeyCode::Up if command => Some(FieldCommand::MoveUp),
            KeyCode::Down if command => Some(FieldCommand::MoveDown),
            KeyCode::Up => Some(FieldCommand::FocusPrevious),
            KeyCode::Down => Some(FieldCommand::FocusNext),
            _ => None,
        }
    }
}
