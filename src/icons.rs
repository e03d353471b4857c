//! Icon service for managing different icon themes
//!
//! Every glyph here occupies exactly one terminal column. Row hit-testing in the
//! list panels relies on that, so wide emoji are deliberately absent.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Glyphs used by list rows
#[derive(Debug, Clone)]
pub struct RowIcons {
    pub drag_handle: &'static str,
    pub link: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> RowIcons {
        match self.current_theme {
            IconTheme::Unicode => RowIcons {
                drag_handle: "⠿",
                link: "↗",
                checked: "✓",
                unchecked: " ",
            },
            IconTheme::Ascii => RowIcons {
                drag_handle: "=",
                link: ">",
                checked: "x",
                unchecked: " ",
            },
        }
    }

    #[must_use]
    pub fn drag_handle(&self) -> &'static str {
        self.icons().drag_handle
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        self.icons().link
    }

    /// Checkbox glyph wrapped in brackets, three columns wide
    #[must_use]
    pub fn checkbox(&self, checked: bool) -> String {
        let icons = self.icons();
        format!("[{}]", if checked { icons.checked } else { icons.unchecked })
    }
}
