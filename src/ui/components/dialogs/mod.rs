//! Dialog components module

pub mod close_all_dialog;
pub mod common;
pub mod delete_session_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use close_all_dialog::CloseAllDialog;
pub use delete_session_dialog::{DeleteDialogState, DeleteSessionDialog};
pub use scroll_behavior::Scroll;
