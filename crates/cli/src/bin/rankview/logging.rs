//! Tracing subscriber set-up.
//!
//! The terminal UI owns the screen, so in that mode events go to a daily log
//! file in the data directory. One-shot runs log to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RANKVIEW_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";
const LOG_FILE_PREFIX: &str = "rankview.log";

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr.
pub(crate) fn init_stderr() {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(std::io::stderr)
		.init();
}

/// Log to a daily rolling file under `dir`. Keep the guard alive until exit
/// so buffered lines are flushed.
pub(crate) fn init_file(dir: &Path) -> Result<WorkerGuard> {
	std::fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(writer)
		.with_ansi(false)
		.init();
	Ok(guard)
}
