use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, TransactionTrait};
use uuid::Uuid;

use super::Persistence;
use crate::constants::FIRST_TASK_TITLE;
use crate::entities::{bookmark, task, todo};
use crate::repositories::{BookmarkRepository, TaskRepository, TodoRepository};
use crate::store::{Collection, Dirty, TaskLists, TaskStore};

/// Local storage manager backed by SQLite
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Connect to `database_url` and make sure the schema exists
    pub async fn open(database_url: &str) -> Result<Self> {
        // One connection keeps `sqlite::memory:` a single database
        let mut options = ConnectOptions::new(database_url.to_string());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = Self { conn };
        storage.init_schema().await?;

        log::info!("Storage opened at {database_url}");
        Ok(storage)
    }

    /// Initialize database schema from the entities
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Tasks first; the list tables reference them
        let mut statements = vec![
            schema.create_table_from_entity(task::Entity),
            schema.create_table_from_entity(bookmark::Entity),
            schema.create_table_from_entity(todo::Entity),
        ];

        for statement in &mut statements {
            statement.if_not_exists();
            self.conn.execute(backend.build(&*statement)).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Persistence for LocalStorage {
    async fn load_store(&self) -> Result<TaskStore> {
        let tasks: Vec<_> = TaskRepository::get_all(&self.conn)
            .await?
            .into_iter()
            .map(TaskRepository::to_record)
            .collect();

        let mut lists: HashMap<Uuid, TaskLists> = HashMap::new();
        for task in &tasks {
            let bookmarks = BookmarkRepository::get_for_task(&self.conn, &task.id).await?;
            let todos = TodoRepository::get_for_task(&self.conn, &task.id).await?;
            lists.insert(
                task.id,
                TaskLists {
                    bookmarks: bookmarks.into_iter().map(BookmarkRepository::to_record).collect(),
                    todos: todos.into_iter().map(TodoRepository::to_record).collect(),
                },
            );
        }

        if tasks.is_empty() {
            log::info!("No tasks stored yet, starting with '{FIRST_TASK_TITLE}'");
            let store = TaskStore::single(FIRST_TASK_TITLE, TaskLists::default());
            self.flush(&store, &Dirty::of(Collection::Tasks)).await?;
            return Ok(store);
        }

        log::debug!("Loaded {} tasks", tasks.len());
        Ok(TaskStore::from_parts(tasks, lists))
    }

    async fn flush(&self, store: &TaskStore, dirty: &Dirty) -> Result<()> {
        if dirty.is_empty() {
            return Ok(());
        }

        let txn = self.conn.begin().await?;

        for collection in dirty.iter() {
            match collection {
                Collection::Tasks => TaskRepository::replace_all(&txn, store.tasks()).await?,
                Collection::Bookmarks(task_id) => {
                    // Lists of a task removed in the same batch are gone
                    if let Some(lists) = store.lists(task_id) {
                        BookmarkRepository::replace_for_task(&txn, &task_id, &lists.bookmarks).await?;
                    }
                }
                Collection::Todos(task_id) => {
                    if let Some(lists) = store.lists(task_id) {
                        TodoRepository::replace_for_task(&txn, &task_id, &lists.todos).await?;
                    }
                }
            }
        }

        txn.commit().await?;
        log::debug!("Flushed {} collections", dirty.iter().count());
        Ok(())
    }
}
