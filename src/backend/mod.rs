//! Session backend abstraction.
//!
//! The console never deletes, closes or exports anything itself. It hands those
//! requests to a [`SessionBackend`] and reports back whatever the backend says.

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::entities::{ExceptionLineItems, Session};

pub mod factory;
pub mod snapshot;

pub use factory::create_backend;
pub use snapshot::SnapshotBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Backend trait that every session service adapter implements.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "snapshot").
    fn backend_type(&self) -> &str;

    async fn list_sessions(&self) -> Result<Vec<Session>, BackendError>;
    async fn delete_session(&self, id: Uuid) -> Result<(), BackendError>;
    async fn close_sessions(&self, ids: &[Uuid], reason: &str) -> Result<(), BackendError>;

    /// Export the given sessions and return where the export was written.
    async fn export_sessions(&self, ids: &[Uuid]) -> Result<PathBuf, BackendError>;

    async fn line_items(&self, id: Uuid) -> Result<ExceptionLineItems, BackendError>;
}
