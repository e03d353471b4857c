//! Index-based focus tracking for list panels.
//!
//! Each row of a list panel owns exactly one focusable text field. The
//! registry keeps track of which row holds the keyboard focus and of a focus
//! request that should be honored once the next snapshot arrives, e.g. focus
//! the row after the one where Enter was pressed.

/// Which row's field has focus, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRegistry {
    len: usize,
    focused: Option<usize>,
    pending: Option<isize>,
}

impl FocusRegistry {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resize after a refresh; focus past the end is dropped
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.focused.is_some_and(|index| index >= len) {
            self.focused = None;
        }
    }

    /// Focus the field at `index`. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: isize) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.len => {
                self.focused = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Drop focus, returning the row that had it
    pub fn blur(&mut self) -> Option<usize> {
        self.focused.take()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Ask for `index` to be focused after the next refresh
    pub fn request(&mut self, index: isize) {
        self.pending = Some(index);
    }

    pub fn take_request(&mut self) -> Option<isize> {
        self.pending.take()
    }
}
