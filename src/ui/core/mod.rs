//! Core UI functionality for sessiondesk.
//!
//! - [`actions`] - Events emitted by components and background tasks
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background backend requests
//!
//! Components turn key presses into [`Action`]s. The app host routes those
//! actions, and backend work runs on the [`TaskManager`], whose results come
//! back as actions on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
