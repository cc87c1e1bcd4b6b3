//! Tracing subscriber setup.
//!
//! stdout carries JSON results, so logs go to stderr, or to
//! `$ROBOT_LOG_DIR/robot.log` when that variable is set.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// until the program exits.
pub fn setup_logging() -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match std::env::var_os("ROBOT_LOG_DIR").map(PathBuf::from) {
        Some(log_dir) => {
            std::fs::create_dir_all(&log_dir).with_context(|| {
                format!("Failed to create log directory: {}", log_dir.display())
            })?;

            let file_appender = tracing_appender::rolling::never(&log_dir, "robot.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();

            tracing::info!("Log file: {}/robot.log", log_dir.display());
            Ok(Some(guard))
        }
        None => {
            let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();

            Ok(None)
        }
    }
}
