//! Logging setup: append to a log file under the XDG state dir, or fall back to stderr.
//!
//! The console belongs to the run's progress lines, so diagnostics go to the
//! file whenever one can be opened. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,bookgrab_core=debug";
const LOG_FILE_NAME: &str = "bookgrab.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `$XDG_STATE_HOME/bookgrab/bookgrab.log`. Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bookgrab")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("cannot create bookgrab state directory")
}

/// Opens `path` for appending, creating it if missing.
fn open_log_file(path: &Path) -> io::Result<File> {
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber writing to the XDG log file and returns its path.
///
/// Errors when the file cannot be opened or a subscriber is already set; the
/// caller is expected to fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;

    tracing::info!(path = %path.display(), "bookgrab logging initialized");
    Ok(path)
}

/// Installs a stderr subscriber. Never fails.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
    if installed.is_err() {
        // A subscriber is already in place and keeps receiving events.
        tracing::debug!("stderr logging skipped: subscriber already set");
    }
}
