//! Tracing setup for the studio CLI
//!
//! Usage:
//!   studio --debug ...              # Debug logging to stderr
//!   RUST_LOG=studio_core=debug studio  # Fine-grained log control
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.
//! The TUI owns the terminal, so it only logs when `--debug` is given, and
//! then into a file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Write to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl TracingConfig {
    /// Default TUI log location: `<cache dir>/studio/tui.log`
    pub fn tui_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("studio")
            .join("tui.log")
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => init_file(config, path),
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter(config.debug))
            .with_target(config.debug) // Show targets in debug mode
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}

fn init_file(config: &TracingConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.debug))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!(err))
}
