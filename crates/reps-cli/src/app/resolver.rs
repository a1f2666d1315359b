//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, RepsConfig};

/// Resolve the config file path, checking REPS_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("REPS_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to defaults when none has been written.
pub fn load_config() -> anyhow::Result<RepsConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(RepsConfig::default());
    }
    read_config(&path)
}

/// Resolve the data directory: `--data-dir` / `REPS_DATA_DIR`, then the
/// config's `[storage] path`, then the XDG data dir.
pub fn resolve_data_dir(cli: &Cli, config: &RepsConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data_dir.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    if let Some(path) = config.storage.path.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_data_dir()
}
