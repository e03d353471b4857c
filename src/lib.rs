//! taskdeck - a terminal task workspace
//!
//! Every task owns an ordered list of bookmarks and an indented todo list.
//! Both are edited inline in the terminal, reordered by keyboard or by
//! dragging, and kept in a local SQLite database.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`store`] - In-memory task store and its reducers
//! * [`storage`] - Local database and write-behind persistence
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Glyphs used to draw list rows
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer persisting the task store
pub mod storage;

/// Tasks, bookmarks and todos plus the intents that change them
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;
