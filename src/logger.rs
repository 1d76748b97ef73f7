use crate::config::LoggingConfig;
use crate::constants::LOG_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Keeps recent lines in memory for the logs dialog. Once installed as the
/// `log` backend it also receives every `log::info!`-style record, and writes
/// them to a file when logging is enabled in the configuration.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
            log_file: None,
        }
    }

    /// Build a logger from configuration, preparing the log file location when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            logger.log_file = Some(path);
        }
        Ok(logger)
    }

    /// Install this logger as the global `log` backend
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let buffer = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string())));

        if let Some(path) = &self.log_file {
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, _record| {
                        out.finish(format_args!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"), message))
                    })
                    .chain(file),
            );
        }

        dispatch.apply().context("Failed to install logger")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Location of the log file under the user's data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .map(|dir| dir.join("sessiondesk").join("sessiondesk.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
