//! Wellcast: Decline-Curve Production Forecasting
//!
//! Forecasts future production of a depleting well from two historical
//! rate-time anchor points using classic Arps decline models.
//!
//! ## Architecture
//!
//! - **Decline Engine**: Pure DCA mathematics (decline rate derivation, rate
//!   projection, extrapolated volume, terminal-condition search)
//! - **API Module**: Axum HTTP surface consumed by the plotting frontend
//! - **Config Module**: Operator-tunable TOML configuration

pub mod api;
pub mod config;
pub mod decline_engine;
pub mod types;

// Re-export forecast configuration
pub use config::ForecastConfig;

// Re-export the core entry point and its error taxonomy
pub use decline_engine::{forecast, ForecastError};

// Re-export commonly used types
pub use types::{
    CumulativeProduction, DeclineParameters, DeclineType, ForecastResult, ProductionPoint,
};
