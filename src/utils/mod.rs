//! Utility modules for the sessiondesk application.
//!
//! - [`datetime`] - Human-readable rendering of creation dates
//! - [`money`] - Amount formatting for reconciliation line items

pub mod datetime;
pub mod money;
