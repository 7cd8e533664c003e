//! Coverage Error Types
//!
//! Computing coverage never fails. These errors come from building an engine
//! out of a configuration and from loading that configuration from disk.

use thiserror::Error;

/// Coverage engine errors
#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Invalid coverage configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for coverage operations
pub type Result<T> = std::result::Result<T, CoverageError>;
