use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use reps_core::weather::client::DEFAULT_BASE_URL;
use reps_core::weather::Coordinates;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RepsConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub weather: WeatherSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Data directory; the XDG data dir when unset
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherSection {
    #[serde(default)]
    pub enabled: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            enabled: false,
            latitude: None,
            longitude: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl WeatherSection {
    /// Coordinates to look weather up for. Disabled or incomplete settings
    /// behave like a denied location permission.
    pub fn coordinates(&self) -> Option<Coordinates> {
        if !self.enabled {
            return None;
        }
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

impl RepsConfig {
    pub fn new(data_dir: Option<PathBuf>, coordinates: Option<Coordinates>) -> Self {
        Self {
            storage: StorageSection {
                path: data_dir.map(|path| path.to_string_lossy().to_string()),
            },
            weather: WeatherSection {
                enabled: coordinates.is_some(),
                latitude: coordinates.map(|c| c.latitude),
                longitude: coordinates.map(|c| c.longitude),
                base_url: default_base_url(),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<RepsConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &RepsConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("reps"));
        }
    }
    Ok(home_dir()?.join(".config").join("reps"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("reps"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("reps"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
