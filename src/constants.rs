//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Panel titles
pub const TITLE_TASKS: &str = "Tasks";
pub const TITLE_BOOKMARKS: &str = "Bookmarks";
pub const TITLE_TODOS: &str = "Todos";
pub const TITLE_HELP: &str = "Help - press '?' or Esc to close";
pub const TITLE_LOGS: &str = "Logs - press 'G' or Esc to close";

// Placeholders and labels
pub const BOOKMARK_PLACEHOLDER: &str = "https://example.com";
pub const TODO_PLACEHOLDER: &str = "Something to do";
pub const NEW_TODO_LABEL: &str = "[+ New Todo]";
pub const DEFAULT_TASK_TITLE: &str = "Untitled task";
pub const FIRST_TASK_TITLE: &str = "Inbox";

// Status messages
pub const STATUS_SAVE_FAILED: &str = "❌ Failed to save changes";
pub const STATUS_OPEN_FAILED: &str = "❌ Failed to open link";
pub const STATUS_LAST_TASK: &str = "Cannot delete the last task";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "taskdeck.toml";
pub const APP_DIR_NAME: &str = "taskdeck";
pub const DATABASE_FILE_NAME: &str = "taskdeck.db";
pub const LOG_FILE_NAME: &str = "taskdeck.log";

// Store limits
/// Deepest indentation level a todo can reach
pub const MAX_TODO_IDENT: u32 = 8;
/// Number of log lines kept in memory for the logs panel
pub const MAX_IN_MEMORY_LOGS: usize = 1000;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Default columns of left padding per todo indentation level
pub const DEFAULT_INDENT_WIDTH: u16 = 2;
/// Largest accepted indentation width
pub const MAX_INDENT_WIDTH: u16 = 8;
/// Share of the right pane the bookmark panel may take, in percent
pub const BOOKMARKS_MAX_HEIGHT_PERCENT: u16 = 40;

// Timing
/// How often the event loop wakes up when the terminal is idle
pub const POLL_INTERVAL_MS: u64 = 16;
/// Minimum delay between two writes of pending changes
pub const FLUSH_INTERVAL_MS: u64 = 500;
