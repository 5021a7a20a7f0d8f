//! Logging infrastructure for Extension Renamer.
//!
//! Application-wide logging goes through `tracing`. The subscriber writes
//! to stderr and, optionally, to a daily-rolling file in the logs folder.

mod types;

pub use types::LogLevel;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Base name of the rolling log files.
const LOG_FILE_PREFIX: &str = "extension-renamer.log";

/// Initialize global tracing subscriber writing to stderr only.
///
/// Respects RUST_LOG and falls back to `default_level`.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(build_filter(default_level))
        .init();
}

/// Initialize global tracing with stderr output plus a daily log file.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the process. If the logs folder cannot be created,
/// falls back to stderr only and returns `None`.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!(
            "Could not create logs folder {}: {}. Logging to stderr only.",
            logs_dir.display(),
            e
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(build_filter(default_level))
        .init();

    Some(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn build_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}
