//! Configuration management for sessiondesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX, PAGE_SIZE_MIN};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of sessions shown per page
    pub page_size: usize,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for session creation dates
    pub date_format: String,
    /// Symbol prefixed to line item amounts
    pub currency_symbol: String,
}

/// Session backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend implementation, currently only "snapshot"
    pub kind: String,
    /// JSON snapshot holding sessions and their line items
    pub snapshot_path: PathBuf,
    /// Directory receiving exported session files
    pub export_dir: PathBuf,
    /// Write mutations back to the snapshot file
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_DEFAULT,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: "snapshot".to_string(),
            snapshot_path: PathBuf::from("sessions.json"),
            export_dir: std::env::temp_dir().join("sessiondesk-exports"),
            persist: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        let current_dir_config = PathBuf::from("sessiondesk.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("sessiondesk").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size < PAGE_SIZE_MIN || self.ui.page_size > PAGE_SIZE_MAX {
            anyhow::bail!(
                "page_size must be between {} and {}, got {}",
                PAGE_SIZE_MIN,
                PAGE_SIZE_MAX,
                self.ui.page_size
            );
        }

        if self.display.date_format.trim().is_empty() {
            anyhow::bail!("date_format cannot be empty");
        }
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if self.backend.kind != "snapshot" {
            anyhow::bail!("Unsupported backend kind '{}'", self.backend.kind);
        }
        if self.backend.snapshot_path.as_os_str().is_empty() {
            anyhow::bail!("backend.snapshot_path cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# sessiondesk configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DISPLAY_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("sessiondesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
