//! Cursor handling for single-line inline fields.
//!
//! A [`TextField`] never owns the text it edits. The value lives in the store
//! snapshot; the field only remembers where the cursor is and turns key
//! presses into the value that should be dispatched.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of one key press on a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// An editing key was pressed; carries the resulting value, which may
    /// equal the old one (Backspace at the start of the line)
    Changed(String),
    Moved,
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextField {
    /// Cursor position in chars
    cursor: usize,
}

impl TextField {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, value: &str, cursor: usize) {
        self.cursor = cursor.min(value.chars().count());
    }

    pub fn place_at_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Keep the cursor inside `value` after it changed underneath us
    pub fn clamp(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    pub fn apply(&mut self, value: &str, key: &KeyEvent) -> Edit {
        let char_count = value.chars().count();
        self.cursor = self.cursor.min(char_count);

        match key.code {
            KeyCode::Char(c) if !has_control_modifier(key.modifiers) => {
                let mut next = value.to_string();
                next.insert(byte_offset(value, self.cursor), c);
                self.cursor += 1;
                Edit::Changed(next)
            }
            KeyCode::Backspace => {
                let mut next = value.to_string();
                if self.cursor > 0 {
                    next.remove(byte_offset(value, self.cursor - 1));
                    self.cursor -= 1;
                }
                Edit::Changed(next)
            }
            KeyCode::Delete => {
                let mut next = value.to_string();
                if self.cursor < char_count {
                    next.remove(byte_offset(value, self.cursor));
                }
                Edit::Changed(next)
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Edit::Moved
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(char_count);
                Edit::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                Edit::Moved
            }
            KeyCode::End => {
                self.cursor = char_count;
                Edit::Moved
            }
            _ => Edit::Ignored,
        }
    }

    /// Insert `text` at the cursor and return the new value
    pub fn insert_str(&mut self, value: &str, text: &str) -> String {
        self.clamp(value);
        let mut next = value.to_string();
        next.insert_str(byte_offset(value, self.cursor), text);
        self.cursor += text.chars().count();
        next
    }
}

fn has_control_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn byte_offset(value: &str, chars: usize) -> usize {
    value.char_indices().nth(chars).map(|(offset, _)| offset).unwrap_or(value.len())
}
