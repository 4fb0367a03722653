//! File-based tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a rolling file under
//! ${SAGE_HOME}/logs instead of stderr. Filtering is controlled by the
//! SAGE_LOG environment variable (standard EnvFilter syntax).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber writing to a daily log file.
///
/// The returned guard must be held for the lifetime of the process; dropping
/// it flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "sage.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("SAGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
