//! Application context for the Reps CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config and journal.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use reps_core::weather::{FixedLocation, WeatherClient, WeatherService};
use reps_core::Journal;

use crate::cli::Cli;
use crate::config::RepsConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_dir};

/// Application context that bundles CLI args with config and storage.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RepsConfig>,
    journal: OnceCell<Journal>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            journal: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&RepsConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Data directory given on the command line or in `REPS_DATA_DIR`.
    pub fn cli_data_dir(&self) -> Option<PathBuf> {
        self.cli
            .data_dir
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the journal in the resolved data directory, creating it if needed.
    pub fn journal(&self) -> anyhow::Result<&Journal> {
        self.journal.get_or_try_init(|| {
            let dir = self.data_dir()?;
            tracing::debug!(path = %dir.display(), "Opening journal");
            Journal::open_dir(&dir).map_err(|e| {
                anyhow::anyhow!("Failed to open journal at {}: {}", dir.display(), e)
            })
        })
    }

    /// Weather lookup configured from `[weather]`, cached in the journal.
    pub fn weather(&self) -> anyhow::Result<WeatherService<WeatherClient, FixedLocation>> {
        let config = self.config()?;
        let client = WeatherClient::with_base_url(config.weather.base_url.clone())?;
        let location = FixedLocation(config.weather.coordinates());
        Ok(self.journal()?.weather(client, location))
    }

    /// Build a UI context for output formatting.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }
}
