//! Logging Initialization
//!
//! Installs the global `tracing` subscriber:
//! - A human-readable stderr layer (stdout carries the coverage report)
//! - An optional JSON file layer with daily rolling files
//! - A `log` -> `tracing` bridge for dependencies that use `log` (installed by `try_init`)

use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "lexcover.log";

/// Build the filter: `RUST_LOG` wins, then the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system.
///
/// Returns a `WorkerGuard` when a file layer is active; it must be kept alive
/// for the duration of the program so buffered logs are flushed on shutdown.
/// Calling this when a global subscriber is already installed is a no-op.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = if config.json_file {
        let log_dir = config.log_dir();
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory {}: {e}", log_dir.display());
        }
        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // File Layer: JSON format for easy parsing/ingestion
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true)
            .with_filter(env_filter(&config.level));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(&config.level));

    if tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    if config.json_file {
        tracing::debug!(
            "Logging initialized. Writing to: {:?} (daily rolling)",
            config.log_dir().join(LOG_FILE_PREFIX)
        );
    }

    guard
}
