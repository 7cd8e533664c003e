use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::coverage::{CoverageConfig, CoverageError, Result};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub coverage: CoverageConfig,
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Also write JSON logs to a daily rolling file.
    pub json_file: bool,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_file: false,
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log directory (override or XDG data default).
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("lexcover").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/lexcover/config.toml`.
    ///
    /// A missing file yields `Default`; an unreadable or unparseable one is an
    /// error, so the caller can report it once logging is up.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    /// Like [`AppConfig::from_file`], but a missing file yields `Default`.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::from_file(path) {
            Err(CoverageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load configuration from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Default config file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("lexcover").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
