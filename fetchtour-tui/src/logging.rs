//! File logging for the page
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.fetchtour/fetchtour.log` instead of stdout/stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use fetchtour_core::TourConfig;
use tracing_subscriber::EnvFilter;

/// Default log file: ~/.fetchtour/fetchtour.log
pub fn log_path() -> PathBuf {
    TourConfig::config_dir().join("fetchtour.log")
}

/// Install a tracing subscriber that appends to `path`
pub fn init_file_logging(path: &Path, default_filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
