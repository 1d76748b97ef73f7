//! sessiondesk - A terminal console for administering processing sessions
//!
//! This library provides a terminal interface for reviewing processing
//! sessions, deleting or closing them in bulk, exporting them, and
//! inspecting their reconciliation line items. Deletion is gated so that
//! sessions the service is still working on cannot be removed.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Session service abstraction and the JSON snapshot backend
//! * [`config`] - Application configuration management
//! * [`eligibility`] - Deletion eligibility gate
//! * [`entities`] - Sessions, statuses and line items
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and money formatting helpers

/// Session service abstraction
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Deletion eligibility rules and the in-flight request guard
pub mod eligibility;

/// Data model for sessions and line items
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::{Session, SessionStatus};
