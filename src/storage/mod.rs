//! Local storage module for task persistence
//!
//! This module provides database operations using SeaORM for:
//! - Tasks
//! - Bookmarks
//! - Todos
//!
//! The whole workspace is read once at startup into a [`TaskStore`]; after
//! that only the collections reported dirty by the store are written back.

pub mod db;

pub use db::LocalStorage;

use anyhow::Result;
use async_trait::async_trait;

use crate::store::{Dirty, TaskStore};

/// Write-behind seam between the store and whatever keeps it across runs
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Read every task and its lists
    async fn load_store(&self) -> Result<TaskStore>;

    /// Write the collections in `dirty` from `store`
    async fn flush(&self, store: &TaskStore, dirty: &Dirty) -> Result<()>;
}
