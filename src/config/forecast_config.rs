//! Forecast configuration structures
//!
//! Every struct implements `Default` with values matching the engine's
//! built-in constants, so behavior is unchanged when no config file is
//! present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::decline_engine::curve::DEFAULT_MAX_EXTRAPOLATION_STEPS;

/// Default HTTP bind address (matches the original service port).
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";

/// Root configuration for a wellcast deployment.
///
/// Load with `ForecastConfig::load()` which searches:
/// 1. `$WELLCAST_CONFIG` env var
/// 2. `./wellcast.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Well identification
    #[serde(default)]
    pub well: WellInfo,

    /// Forecast engine tuning
    #[serde(default)]
    pub forecast: ForecastTuning,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            well: WellInfo::default(),
            forecast: ForecastTuning::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Well / field identification, used only for logging and reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field: String,
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: "UNNAMED-WELL".to_string(),
            field: String::new(),
        }
    }
}

/// Forecast engine tuning constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastTuning {
    /// Hard cap on the extrapolation loop. Exceeding it fails the forecast
    /// with `NonTerminatingForecast` instead of looping unboundedly.
    #[serde(default = "default_max_extrapolation_steps")]
    pub max_extrapolation_steps: usize,
}

fn default_max_extrapolation_steps() -> usize {
    DEFAULT_MAX_EXTRAPOLATION_STEPS
}

impl Default for ForecastTuning {
    fn default() -> Self {
        Self {
            max_extrapolation_steps: DEFAULT_MAX_EXTRAPOLATION_STEPS,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8000"
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    DEFAULT_SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

/// Errors from config loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation failed: {0:?}")]
    Validation(Vec<String>),
}

impl ForecastConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELLCAST_CONFIG` environment variable
    /// 2. `./wellcast.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("WELLCAST_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded config from WELLCAST_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLCAST_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLCAST_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("wellcast.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded config from ./wellcast.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./wellcast.toml, using defaults");
                }
            }
        }

        info!("No wellcast.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate tunable values. Collects every violation rather than stopping
    /// at the first one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.forecast.max_extrapolation_steps == 0 {
            errors.push("forecast.max_extrapolation_steps must be at least 1".to_string());
        }
        if self.server.addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(format!(
                "server.addr '{}' is not a valid socket address",
                self.server.addr
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
