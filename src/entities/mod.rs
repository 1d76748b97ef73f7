//! Session and reconciliation entities

pub mod line_items;
pub mod session;

pub use line_items::{ExceptionLineItems, LineItem, LineItemPair, MatchConfidence, MatchedPair, UnmatchedSets};
pub use session::{SelectionStats, Session, SessionStatus};
