//! Core UI functionality for taskdeck.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the actions components emit, the component trait they implement, and the
//! terminal event source.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus areas
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and classification
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe what a key, click or paste should do; store
//!    mutations travel as [`Action::Dispatch`]
//! 3. **Events** are produced by the [`EventHandler`] and routed by the app
//!    component to whichever panel owns the focus

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, FocusArea};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
