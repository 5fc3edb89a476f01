//! Forecast Configuration Module
//!
//! Operator-tunable configuration loaded from TOML files.
//!
//! ## Loading Order
//!
//! 1. `WELLCAST_CONFIG` environment variable (path to TOML file)
//! 2. `wellcast.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(ForecastConfig::load());
//!
//! // Anywhere in the codebase:
//! let cap = config::get().forecast.max_extrapolation_steps;
//! ```

mod forecast_config;

pub use forecast_config::*;

use std::sync::OnceLock;

/// Global forecast configuration, initialized once at startup.
static FORECAST_CONFIG: OnceLock<ForecastConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: ForecastConfig) {
    if FORECAST_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Panics if `init()` has not been called. A missing config is a fatal
/// startup error, not a recoverable condition.
pub fn get() -> &'static ForecastConfig {
    FORECAST_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    FORECAST_CONFIG.get().is_some()
}
