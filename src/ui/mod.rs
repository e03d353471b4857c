//! UI module for taskdeck
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod focus;
pub mod keymap;
pub mod layout;
pub mod links;
pub mod opener;
pub mod renderer;
pub mod text_field;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
