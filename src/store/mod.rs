//! In-memory task store
//!
//! The store owns the canonical ordered collections: the task list and, for
//! each task, its bookmarks and todos. All mutation goes through
//! [`TaskStore::dispatch`], which applies one [`Intent`] and reports which
//! collections need to be written back to storage.
//!
//! * [`model`] - records handed to the panels as read-only snapshots
//! * [`intent`] - the closed set of requested mutations
//! * [`paste`] - clipboard expansion into list entries
//! * [`error`] - reducer errors

pub mod error;
pub mod intent;
pub mod model;
pub mod paste;

pub use error::StoreError;
pub use intent::Intent;
pub use model::{Bookmark, Entry, Task, TaskLists, Todo};

use crate::constants::{DEFAULT_TASK_TITLE, MAX_TODO_IDENT};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// A persisted collection that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Tasks,
    Bookmarks(Uuid),
    Todos(Uuid),
}

/// Set of collections waiting to be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dirty(BTreeSet<Collection>);

impl Dirty {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(collection: Collection) -> Self {
        Self(BTreeSet::from([collection]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.0.contains(&collection)
    }

    pub fn merge(&mut self, other: Dirty) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = Collection> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    lists: HashMap<Uuid, TaskLists>,
    active: Option<Uuid>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from loaded data; the first task becomes active
    pub fn from_parts(tasks: Vec<Task>, mut lists: HashMap<Uuid, TaskLists>) -> Self {
        lists.retain(|id, _| tasks.iter().any(|task| task.id == *id));
        for task in &tasks {
            lists.entry(task.id).or_default();
        }
        let active = tasks.first().map(|task| task.id);
        Self { tasks, lists, active }
    }

    /// A store holding one active task with the given lists
    pub fn single(title: impl Into<String>, lists: TaskLists) -> Self {
        let task = Task::new(title);
        let mut map = HashMap::new();
        map.insert(task.id, lists);
        Self::from_parts(vec![task], map)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_task(&self) -> Option<&Task> {
        self.active.and_then(|id| self.tasks.iter().find(|task| task.id == id))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.and_then(|id| index_of(&self.tasks, id))
    }

    pub fn lists(&self, task_id: Uuid) -> Option<&TaskLists> {
        self.lists.get(&task_id)
    }

    /// Bookmarks of the active task
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.active
            .and_then(|id| self.lists.get(&id))
            .map(|lists| lists.bookmarks.as_slice())
            .unwrap_or(&[])
    }

    /// Todos of the active task
    pub fn todos(&self) -> &[Todo] {
        self.active
            .and_then(|id| self.lists.get(&id))
            .map(|lists| lists.todos.as_slice())
            .unwrap_or(&[])
    }

    /// Apply one intent
    pub fn dispatch(&mut self, intent: Intent) -> Result<Dirty, StoreError> {
        match intent {
            Intent::NewBookmark { after } => self.new_bookmark(after),
            Intent::RemoveBookmark(id) => {
                let (task_id, lists) = self.active_lists_mut()?;
                let index = index_of(&lists.bookmarks, id).ok_or(StoreError::bookmark(id))?;
                lists.bookmarks.remove(index);
                Ok(Dirty::of(Collection::Bookmarks(task_id)))
            }
            Intent::UpdateBookmark { id, uri } => {
                let (task_id, lists) = self.active_lists_mut()?;
                let bookmark = find_mut(&mut lists.bookmarks, id).ok_or(StoreError::bookmark(id))?;
                if bookmark.uri == uri {
                    return Ok(Dirty::none());
                }
                bookmark.uri = uri;
                Ok(Dirty::of(Collection::Bookmarks(task_id)))
            }
            Intent::MoveBookmark { id, by } => {
                let (task_id, lists) = self.active_lists_mut()?;
                let index = index_of(&lists.bookmarks, id).ok_or(StoreError::bookmark(id))?;
                if move_entry(&mut lists.bookmarks, index, by) {
                    Ok(Dirty::of(Collection::Bookmarks(task_id)))
                } else {
                    Ok(Dirty::none())
                }
            }
            Intent::PasteBookmarks { id, clipboard } => self.paste_bookmarks(id, &clipboard),
            Intent::ClearBookmarkAutoFocus(id) => {
                let (_, lists) = self.active_lists_mut()?;
                let bookmark = find_mut(&mut lists.bookmarks, id).ok_or(StoreError::bookmark(id))?;
                bookmark.auto_focus = false;
                Ok(Dirty::none())
            }

            Intent::NewTodo { after } => self.new_todo(after),
            Intent::RemoveTodo(id) => {
                let (task_id, lists) = self.active_lists_mut()?;
                let index = index_of(&lists.todos, id).ok_or(StoreError::todo(id))?;
                lists.todos.remove(index);
                Ok(Dirty::of(Collection::Todos(task_id)))
            }
            Intent::UpdateTodoText { id, text } => {
                let (task_id, lists) = self.active_lists_mut()?;
                let todo = find_mut(&mut lists.todos, id).ok_or(StoreError::todo(id))?;
                if todo.text == text {
                    return Ok(Dirty::none());
                }
                todo.text = text;
                Ok(Dirty::of(Collection::Todos(task_id)))
            }
            Intent::ToggleTodo(id) => {
                let (task_id, lists) = self.active_lists_mut()?;
                let todo = find_mut(&mut lists.todos, id).ok_or(StoreError::todo(id))?;
                todo.is_completed = !todo.is_completed;
                Ok(Dirty::of(Collection::Todos(task_id)))
            }
            Intent::MoveTodo { id, by } => {
                let (task_id, lists) = self.active_lists_mut()?;
                let index = index_of(&lists.todos, id).ok_or(StoreError::todo(id))?;
                if move_entry(&mut lists.todos, index, by) {
                    Ok(Dirty::of(Collection::Todos(task_id)))
                } else {
                    Ok(Dirty::none())
                }
            }
            Intent::IndentTodo { id, by } => {
                let (task_id, lists) = self.active_lists_mut()?;
                let todo = find_mut(&mut lists.todos, id).ok_or(StoreError::todo(id))?;
                let ident = shift_ident(todo.ident, by);
                if ident == todo.ident {
                    return Ok(Dirty::none());
                }
                todo.ident = ident;
                Ok(Dirty::of(Collection::Todos(task_id)))
            }
            Intent::PasteTodos { id, clipboard } => self.paste_todos(id, &clipboard),

            Intent::NewTask { title } => {
                let title = title.trim();
                let task = Task::new(if title.is_empty() { DEFAULT_TASK_TITLE } else { title });
                self.lists.insert(task.id, TaskLists::default());
                self.active = Some(task.id);
                self.tasks.push(task);
                Ok(Dirty::of(Collection::Tasks))
            }
            Intent::RenameTask { id, title } => {
                let title = title.trim();
                let task = find_mut(&mut self.tasks, id).ok_or(StoreError::task(id))?;
                if title.is_empty() || task.title == title {
                    return Ok(Dirty::none());
                }
                task.title = title.to_string();
                Ok(Dirty::of(Collection::Tasks))
            }
            Intent::RemoveTask(id) => {
                let index = index_of(&self.tasks, id).ok_or(StoreError::task(id))?;
                if self.tasks.len() == 1 {
                    return Err(StoreError::LastTask);
                }
                self.tasks.remove(index);
                self.lists.remove(&id);
                if self.active == Some(id) {
                    let next = index.min(self.tasks.len() - 1);
                    self.active = self.tasks.get(next).map(|task| task.id);
                }
                Ok(Dirty::of(Collection::Tasks))
            }
            Intent::SelectTask(id) => {
                index_of(&self.tasks, id).ok_or(StoreError::task(id))?;
                self.active = Some(id);
                Ok(Dirty::none())
            }
        }
    }

    fn active_lists_mut(&mut self) -> Result<(Uuid, &mut TaskLists), StoreError> {
        let task_id = self.active.ok_or(StoreError::NoActiveTask)?;
        let lists = self.lists.get_mut(&task_id).ok_or(StoreError::NoActiveTask)?;
        Ok((task_id, lists))
    }

    fn new_bookmark(&mut self, after: Option<Uuid>) -> Result<Dirty, StoreError> {
        let (task_id, lists) = self.active_lists_mut()?;
        let index = match after {
            Some(id) => index_of(&lists.bookmarks, id).ok_or(StoreError::bookmark(id))? + 1,
            None => lists.bookmarks.len(),
        };
        let mut bookmark = Bookmark::new("");
        bookmark.auto_focus = true;
        lists.bookmarks.insert(index, bookmark);
        Ok(Dirty::of(Collection::Bookmarks(task_id)))
    }

    /// Empty targets take the first line; the rest land right after the target
    fn paste_bookmarks(&mut self, id: Uuid, clipboard: &str) -> Result<Dirty, StoreError> {
        let (task_id, lists) = self.active_lists_mut()?;
        let index = index_of(&lists.bookmarks, id).ok_or(StoreError::bookmark(id))?;
        let mut lines = paste::split_bookmarks(clipboard).into_iter();

        let target = &mut lists.bookmarks[index];
        let was_empty = target.uri.is_empty();
        if was_empty {
            match lines.next() {
                Some(first) => target.uri = first,
                None => return Ok(Dirty::none()),
            }
        }

        let mut inserted: Vec<Bookmark> = lines.map(Bookmark::new).collect();
        if inserted.is_empty() && !was_empty {
            return Ok(Dirty::none());
        }
        if let Some(last) = inserted.last_mut() {
            last.auto_focus = true;
        }
        let tail = lists.bookmarks.split_off(index + 1);
        lists.bookmarks.extend(inserted);
        lists.bookmarks.extend(tail);
        Ok(Dirty::of(Collection::Bookmarks(task_id)))
    }

    fn new_todo(&mut self, after: Option<Uuid>) -> Result<Dirty, StoreError> {
        let (task_id, lists) = self.active_lists_mut()?;
        let (index, ident) = match after {
            Some(id) => {
                let index = index_of(&lists.todos, id).ok_or(StoreError::todo(id))?;
                (index + 1, lists.todos[index].ident)
            }
            None => (lists.todos.len(), 0),
        };
        lists.todos.insert(index, Todo::new("", ident));
        Ok(Dirty::of(Collection::Todos(task_id)))
    }

    fn paste_todos(&mut self, id: Uuid, clipboard: &str) -> Result<Dirty, StoreError> {
        let (task_id, lists) = self.active_lists_mut()?;
        let index = index_of(&lists.todos, id).ok_or(StoreError::todo(id))?;
        let mut pasted = paste::split_todos(clipboard).into_iter();

        let target = &mut lists.todos[index];
        let base = target.ident;
        let was_empty = target.text.is_empty();
        if was_empty {
            match pasted.next() {
                Some(first) => {
                    target.text = first.text;
                    target.is_completed = first.is_completed;
                    target.ident = shift_ident(base, i64::from(first.depth));
                }
                None => return Ok(Dirty::none()),
            }
        }

        let inserted: Vec<Todo> = pasted
            .map(|item| Todo {
                is_completed: item.is_completed,
                ..Todo::new(item.text, shift_ident(base, i64::from(item.depth)))
            })
            .collect();
        if inserted.is_empty() && !was_empty {
            return Ok(Dirty::none());
        }
        let tail = lists.todos.split_off(index + 1);
        lists.todos.extend(inserted);
        lists.todos.extend(tail);
        Ok(Dirty::of(Collection::Todos(task_id)))
    }
}

fn index_of<T: Entry>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

fn find_mut<T: Entry>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Move the entry at `index` by a relative offset, clamped to the list bounds
fn move_entry<T>(items: &mut Vec<T>, index: usize, by: i64) -> bool {
    let last = items.len() as i64 - 1;
    let target = (index as i64 + by).clamp(0, last.max(0)) as usize;
    if target == index {
        return false;
    }
    let item = items.remove(index);
    items.insert(target, item);
    true
}

fn shift_ident(ident: u32, by: i64) -> u32 {
    (i64::from(ident) + by).clamp(0, i64::from(MAX_TODO_IDENT)) as u32
}
