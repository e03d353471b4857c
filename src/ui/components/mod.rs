//! Reusable UI components

pub mod list_rows;
pub mod scrollbar_helper;

// Component architecture
pub mod bookmark_list_component;
pub mod help_panel;
pub mod logs_panel;
pub mod sidebar_component;
pub mod status_bar;
pub mod todo_list_component;

// Component exports
pub use bookmark_list_component::BookmarkListComponent;
pub use help_panel::HelpPanel;
pub use logs_panel::LogsPanel;
pub use sidebar_component::SidebarComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use todo_list_component::TodoListComponent;
