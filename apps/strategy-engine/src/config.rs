//! Configuration module for the strategy engine.
//!
//! Loads YAML configuration with environment-variable overrides for the
//! presentation layer: journal storage location and payoff-curve resolution.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_engine::config::load_config;
//!
//! // Load from default path (config.yaml), falling back to defaults.
//! let config = load_config(None)?;
//!
//! // Load from custom path.
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::DEFAULT_CURVE_POINTS;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Journal configuration.
    #[serde(default)]
    pub journal: JournalConfig,
    /// Payoff curve configuration.
    #[serde(default)]
    pub curve: CurveConfig,
}

/// Journal storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Path to the journal database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Payoff curve presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of sampled points per curve.
    #[serde(default = "default_curve_points")]
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            points: default_curve_points(),
        }
    }
}

fn default_database_path() -> String {
    "trading_journal.db".to_string()
}

const fn default_curve_points() -> usize {
    DEFAULT_CURVE_POINTS
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.curve.points < 2 {
            return Err(ConfigError::ValidationError(format!(
                "curve.points must be at least 2, got {}",
                self.curve.points
            )));
        }
        if self.journal.database_path.is_empty() {
            return Err(ConfigError::ValidationError(
                "journal.database_path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment-variable overrides (`DATABASE_PATH`).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            if !path.is_empty() {
                self.journal.database_path = path;
            }
        }
        self
    }
}

/// Load configuration from a YAML file.
///
/// With an explicit `path`, the file must exist and parse. With `None`, the
/// default path `config.yaml` is tried and a missing file falls back to
/// defaults. Environment overrides apply in both cases.
///
/// # Errors
///
/// Returns [`ConfigError`] on read, parse, or validation failure.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                path: path.to_string(),
                source,
            })?;
            serde_yaml_bw::from_str(&raw)?
        }
        None => match std::fs::read_to_string("config.yaml") {
            Ok(raw) => serde_yaml_bw::from_str(&raw)?,
            Err(_) => Config::default(),
        },
    };

    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}
