use crate::store::Intent;

/// Panel that owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    Sidebar,
    #[default]
    Bookmarks,
    Todos,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            Self::Sidebar => Self::Bookmarks,
            Self::Bookmarks => Self::Todos,
            Self::Todos => Self::Sidebar,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Sidebar => Self::Todos,
            Self::Bookmarks => Self::Sidebar,
            Self::Todos => Self::Bookmarks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextArea,
    PreviousArea,

    // Store mutation
    Dispatch(Intent),

    // External
    OpenUri(String),

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
