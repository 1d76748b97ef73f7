use crate::entities::{ExceptionLineItems, Session};
use std::path::PathBuf;
use uuid::Uuid;

/// Events emitted by components and background tasks.
///
/// Components never call the backend themselves; they return one of these and
/// the app host decides what to do with it.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextSession,
    PreviousSession,
    NextPage,
    PreviousPage,
    ToggleSelected(Uuid),

    // Bulk toolbar
    DeleteSelected,
    ExportSelected,
    CloseSelected,
    DeselectAll,
    SelectAllPage,
    SelectAllResults,

    // Per-session
    OpenDeleteSession(Session),
    OpenLineItems(Session),
    CloseLineItems,

    // Confirmations leaving the dialogs
    ConfirmDelete(Session),
    ConfirmBulkDelete(Vec<Session>),
    ConfirmCloseAll {
        sessions: Vec<Session>,
        closure_reason: String,
    },

    // Background results
    ReloadSessions,
    SessionsLoaded(Vec<Session>),
    DeleteSettled {
        session_id: Uuid,
        outcome: Result<(), String>,
    },
    BulkDeleteSettled {
        deleted: usize,
        failures: Vec<String>,
    },
    CloseAllSettled(Result<usize, String>),
    ExportSettled(Result<PathBuf, String>),
    LineItemsLoaded {
        session: Session,
        items: ExceptionLineItems,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteSession(Session),
    BulkDeleteConfirmation(Vec<Session>),
    CloseAllSessions(Vec<Session>),
    Error(String),
    Info(String),
    Help,
    Logs,
}
