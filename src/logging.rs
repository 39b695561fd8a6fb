//! Logging setup
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! system temp directory. `RUST_LOG` overrides the default `info` filter.
//! Keep the returned guard alive until the program exits.

use color_eyre::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "swagger-sidebar-tui.log";

/// Path of the log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

pub fn init() -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(path = %log_path().display(), "logging initialized");
    Ok(guard)
}
