//! Window and board geometry settings
//!
//! Defaults reproduce the classic 496px board. A JSON file named by the
//! `GOMOKU_CONFIG` environment variable can override any field:
//!
//! ```json
//! { "cell_size": 40.0, "padding": 30.0, "stone_radius": 16.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

/// Environment variable holding an optional config file path
pub const CONFIG_ENV: &str = "GOMOKU_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GomokuConfig {
    /// Window title
    pub title: String,
    /// Distance between adjacent grid lines, in pixels
    pub cell_size: f32,
    /// Distance from the canvas edge to the outermost grid line
    pub padding: f32,
    pub stone_radius: f32,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            title: "Gomoku".to_string(),
            cell_size: 32.0,
            padding: 24.0,
            stone_radius: 12.0,
            log_filter: "info".to_string(),
        }
    }
}

impl GomokuConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `GOMOKU_CONFIG` if set, otherwise defaults.
    ///
    /// A broken config file is logged and replaced by defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!(path = %Path::new(&path).display(), "loaded config");
                config
            }
            Err(err) => {
                warn!(%err, "using default config");
                Self::default()
            }
        }
    }

    /// Geometry must keep every click band and stone on the canvas
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.padding < self.cell_size / 2.0 {
            return Err(ConfigError::Invalid(format!(
                "padding {} is smaller than half a cell ({})",
                self.padding,
                self.cell_size / 2.0
            )));
        }
        if !(self.stone_radius > 0.0) || self.stone_radius > self.cell_size / 2.0 {
            return Err(ConfigError::Invalid(format!(
                "stone_radius must be in (0, {}], got {}",
                self.cell_size / 2.0,
                self.stone_radius
            )));
        }
        Ok(())
    }
}
