//! In-memory records held by the store and handed to the panels as snapshots.

use uuid::Uuid;

/// A workspace page owning one bookmark list and one todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: Uuid,
    pub uri: String,
    /// Transient request for keyboard focus, never persisted
    pub auto_focus: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
    pub ident: u32,
}

/// Both lists of one task, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskLists {
    pub bookmarks: Vec<Bookmark>,
    pub todos: Vec<Todo>,
}

/// Anything living in an ordered, id-addressed list
pub trait Entry {
    fn id(&self) -> Uuid;
}

impl Entry for Task {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entry for Bookmark {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entry for Todo {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}

impl Bookmark {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            uri: uri.into(),
            auto_focus: false,
        }
    }
}

impl Todo {
    pub fn new(text: impl Into<String>, ident: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
            ident,
        }
    }
}
