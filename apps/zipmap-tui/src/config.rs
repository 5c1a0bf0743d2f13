//! Application configuration
//!
//! Read from `zipmap.toml` in the working directory, then from the
//! platform config directory; a CLI argument overrides the dataset
//! path. Malformed config falls back to defaults with a warning.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;
use zipmap_core::{demand_ramp, ColorRamp};

/// Configuration for the zipmap TUI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the GeoJSON demand dataset
    pub dataset: PathBuf,

    /// Number of choropleth classes
    pub class_count: usize,

    /// Optional ramp override: at least `class_count + 1` hex tokens
    pub ramp: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/cgsa_zip_demand.geojson"),
            class_count: 6,
            ramp: None,
        }
    }
}

impl AppConfig {
    /// Load the config, applying the optional dataset path override
    pub fn load(dataset_arg: Option<String>) -> Self {
        let mut config = Self::from_files().unwrap_or_default();
        if let Some(path) = dataset_arg {
            config.dataset = PathBuf::from(path);
        }
        config
    }

    fn from_files() -> Option<Self> {
        let mut candidates = vec![PathBuf::from("zipmap.toml")];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("zipmap").join("zipmap.toml"));
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    warn!(path = %path.display(), %err, "cannot read config, skipping");
                    continue;
                }
            };
            match toml::from_str(&text) {
                Ok(config) => return Some(config),
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed config, using defaults");
                    return None;
                }
            }
        }
        None
    }

    /// The configured color ramp, or the built-in demand ramp
    pub fn color_ramp(&self) -> ColorRamp {
        let Some(tokens) = &self.ramp else {
            return demand_ramp();
        };
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        match ColorRamp::from_hex_tokens("config", &refs) {
            Some(ramp) => ramp,
            None => {
                warn!("config ramp contains malformed hex tokens, using default");
                demand_ramp()
            }
        }
    }
}
