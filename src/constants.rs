//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Closure
/// Reason sent with a close-all request when the operator leaves the field blank
pub const DEFAULT_CLOSURE_REASON: &str = "Bulk closure by admin via UI";

// Success Messages
pub const SUCCESS_SESSION_DELETED: &str = "✅ Session deleted";
pub const SUCCESS_SESSIONS_DELETED: &str = "✅ Sessions deleted";
pub const SUCCESS_SESSIONS_CLOSED: &str = "✅ Sessions closed";
pub const SUCCESS_SESSIONS_EXPORTED: &str = "✅ Sessions exported to";

// Error Messages
pub const ERROR_SESSION_DELETE_FAILED: &str = "❌ Failed to delete session";
pub const ERROR_SESSIONS_CLOSE_FAILED: &str = "❌ Failed to close sessions";
pub const ERROR_SESSIONS_EXPORT_FAILED: &str = "❌ Failed to export sessions";
pub const ERROR_SESSIONS_LOAD_FAILED: &str = "❌ Failed to load sessions";
pub const ERROR_LINE_ITEMS_LOAD_FAILED: &str = "❌ Failed to load line items";
pub const ERROR_NOTHING_ELIGIBLE: &str = "No selected session is eligible for this action";

// Dialog text
pub const DELETE_RESTRICTED_NOTICE: &str =
    "This session is still being processed and cannot be deleted until processing finishes.";
pub const DELETE_IRREVERSIBLE_NOTICE: &str = "This action cannot be undone.";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Layout
/// Smallest page size accepted from configuration
pub const PAGE_SIZE_MIN: usize = 1;
/// Largest page size accepted from configuration
pub const PAGE_SIZE_MAX: usize = 500;
/// Page size used when the configuration does not set one
pub const PAGE_SIZE_DEFAULT: usize = 25;
/// Maximum in-memory log lines kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;
