use uuid::Uuid;

/// A requested mutation of the store
///
/// Panels never touch the collections themselves; they describe what should
/// happen and the store applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    // Bookmarks
    NewBookmark { after: Option<Uuid> },
    RemoveBookmark(Uuid),
    UpdateBookmark { id: Uuid, uri: String },
    MoveBookmark { id: Uuid, by: i64 },
    PasteBookmarks { id: Uuid, clipboard: String },
    ClearBookmarkAutoFocus(Uuid),

    // Todos
    NewTodo { after: Option<Uuid> },
    RemoveTodo(Uuid),
    UpdateTodoText { id: Uuid, text: String },
    ToggleTodo(Uuid),
    MoveTodo { id: Uuid, by: i64 },
    IndentTodo { id: Uuid, by: i64 },
    PasteTodos { id: Uuid, clipboard: String },

    // Tasks
    NewTask { title: String },
    RenameTask { id: Uuid, title: String },
    RemoveTask(Uuid),
    SelectTask(Uuid),
}
