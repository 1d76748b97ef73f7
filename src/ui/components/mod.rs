//! Reusable UI components

pub mod status_badge;
pub mod status_bar;

// Component architecture
pub mod bulk_toolbar;
pub mod dialog_component;
pub mod dialogs;
pub mod line_items_component;
pub mod session_list_component;

// Component exports
pub use bulk_toolbar::{BulkToolbar, ToolbarButtons};
pub use dialog_component::DialogComponent;
pub use line_items_component::{LineItemsComponent, LineItemsTab};
pub use session_list_component::SessionListComponent;
pub use status_badge::StatusBadge;
pub use status_bar::{StatusBar, StatusMessage};
