//! Configuration module for Routegraph
//!
//! Loads optional per-dataset configuration from `routegraph.toml` in the
//! data directory:
//!
//! ```toml
//! # routegraph.toml
//!
//! [data]
//! airports = "airports.csv"
//! flights = "flights.csv"
//!
//! [defaults]
//! threshold = 0
//! ```
//!
//! CLI flags override config values; config overrides built-in defaults.
//! A missing or malformed file falls back to defaults with a warning.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name looked up in the data directory.
pub const CONFIG_FILE: &str = "routegraph.toml";

/// Data file locations, relative to the data directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub airports: String,
    pub flights: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            airports: "airports.csv".to_string(),
            flights: "flights.csv".to_string(),
        }
    }
}

/// Defaults applied when the corresponding CLI flag is omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub threshold: i64,
}

/// Per-dataset configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub data: DataConfig,
    pub defaults: Defaults,
}

/// Load configuration from `routegraph.toml` in `data_dir`.
///
/// Never fails: an absent file is the normal case, a malformed one is
/// reported and ignored.
pub fn load_config(data_dir: &Path) -> ProjectConfig {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return ProjectConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                ProjectConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            ProjectConfig::default()
        }
    }
}
