//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;

use super::{SessionBackend, SnapshotBackend};
use crate::config::BackendConfig;

/// Create a backend instance from its type name and configuration.
///
/// # Errors
/// Returns error if the backend type is unknown or the backend cannot be opened.
pub async fn create_backend(backend_type: &str, config: &BackendConfig) -> Result<Arc<dyn SessionBackend>> {
    match backend_type {
        "snapshot" => {
            let backend = SnapshotBackend::open(&config.snapshot_path, &config.export_dir, config.persist)
                .await
                .with_context(|| format!("Failed to open snapshot {}", config.snapshot_path.display()))?;
            Ok(Arc::new(backend))
        }
        _ => Err(anyhow!("Unknown backend type: {}", backend_type)),
    }
}
