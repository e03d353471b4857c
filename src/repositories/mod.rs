//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. Lists are written wholesale: a flush replaces
//! every row of one task's list inside the caller's transaction.

pub mod bookmark;
pub mod task;
pub mod todo;

pub use bookmark::BookmarkRepository;
pub use task::TaskRepository;
pub use todo::TodoRepository;
