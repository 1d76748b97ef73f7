//! JSON snapshot backend.
//!
//! Serves sessions and line items from a snapshot file exported by the session
//! service. Mutations are written back when `persist` is on, and only take
//! effect in memory once that write succeeded.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BackendError, SessionBackend};
use crate::eligibility;
use crate::entities::{ExceptionLineItems, Session, SessionStatus};

/// On-disk layout of a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub sessions: Vec<Session>,
    pub line_items: HashMap<Uuid, ExceptionLineItems>,
    /// Closure reasons recorded by close requests, keyed by session
    pub closure_reasons: HashMap<Uuid, String>,
}

pub struct SnapshotBackend {
    path: PathBuf,
    export_dir: PathBuf,
    persist: bool,
    snapshot: RwLock<Snapshot>,
}

impl SnapshotBackend {
    /// Load a snapshot file. A missing file starts from an empty snapshot.
    pub async fn open(path: &Path, export_dir: &Path, persist: bool) -> Result<Self, BackendError> {
        let snapshot = match tokio::fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Snapshot {} not found, starting empty", path.display());
                Snapshot::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::with_snapshot(snapshot, path, export_dir, persist))
    }

    pub fn with_snapshot(snapshot: Snapshot, path: &Path, export_dir: &Path, persist: bool) -> Self {
        log::info!(
            "Snapshot backend ready with {} sessions ({})",
            snapshot.sessions.len(),
            path.display()
        );
        Self {
            path: path.to_path_buf(),
            export_dir: export_dir.to_path_buf(),
            persist,
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Closure reason recorded for a session, if it was closed through this backend
    pub async fn closure_reason(&self, id: Uuid) -> Option<String> {
        self.snapshot.read().await.closure_reasons.get(&id).cloned()
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), BackendError> {
        if !self.persist {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, content).await?;
        log::debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionBackend for SnapshotBackend {
    fn backend_type(&self) -> &str {
        "snapshot"
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, BackendError> {
        Ok(self.snapshot.read().await.sessions.clone())
    }

    async fn delete_session(&self, id: Uuid) -> Result<(), BackendError> {
        let mut guard = self.snapshot.write().await;
        let index = guard
            .sessions
            .iter()
            .position(|session| session.id == id)
            .ok_or(BackendError::NotFound(id))?;

        // The service refuses to drop sessions that are still being processed.
        if eligibility::is_restricted(Some(&guard.sessions[index])) {
            return Err(BackendError::Rejected(format!(
                "session '{}' is still being processed",
                guard.sessions[index].name
            )));
        }

        let mut next = Snapshot::clone(&guard);
        let removed = next.sessions.remove(index);
        next.line_items.remove(&id);
        next.closure_reasons.remove(&id);

        self.save(&next).await?;
        *guard = next;
        log::info!("Deleted session '{}' ({})", removed.name, id);
        Ok(())
    }

    async fn close_sessions(&self, ids: &[Uuid], reason: &str) -> Result<(), BackendError> {
        let mut guard = self.snapshot.write().await;

        if let Some(missing) = ids.iter().find(|id| !guard.sessions.iter().any(|s| s.id == **id)) {
            return Err(BackendError::NotFound(*missing));
        }

        let mut next = Snapshot::clone(&guard);
        for session in next.sessions.iter_mut().filter(|s| ids.contains(&s.id)) {
            session.is_closed = true;
            session.status = Some(SessionStatus::Closed);
        }
        for id in ids {
            next.closure_reasons.insert(*id, reason.to_string());
        }

        self.save(&next).await?;
        *guard = next;
        log::info!("Closed {} sessions: {}", ids.len(), reason);
        Ok(())
    }

    async fn export_sessions(&self, ids: &[Uuid]) -> Result<PathBuf, BackendError> {
        let exported: Vec<Session> = {
            let snapshot = self.snapshot.read().await;
            snapshot
                .sessions
                .iter()
                .filter(|session| ids.contains(&session.id))
                .cloned()
                .collect()
        };

        if exported.is_empty() {
            return Err(BackendError::Rejected("no sessions to export".to_string()));
        }

        tokio::fs::create_dir_all(&self.export_dir).await?;
        let file_name = format!("sessions-{}.json", Utc::now().format("%Y%m%d-%H%M%S%3f"));
        let path = self.export_dir.join(file_name);
        tokio::fs::write(&path, serde_json::to_string_pretty(&exported)?).await?;
        log::info!("Exported {} sessions to {}", exported.len(), path.display());

        Ok(path)
    }

    async fn line_items(&self, id: Uuid) -> Result<ExceptionLineItems, BackendError> {
        let snapshot = self.snapshot.read().await;
        if !snapshot.sessions.iter().any(|session| session.id == id) {
            return Err(BackendError::NotFound(id));
        }
        Ok(snapshot.line_items.get(&id).cloned().unwrap_or_default())
    }
}
