//! Decline-curve forecast types
//!
//! Everything here is created fresh per forecast invocation and never mutated
//! after construction. The engine is stateless across calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Decline model selector.
///
/// Closed set — there is deliberately no fallback variant. An unrecognized
/// selector string must be rejected at the parsing edge
/// (see [`DeclineType::parse`](crate::decline_engine)), never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclineType {
    /// Constant fractional decline: `qt = q1·e^(-D·Δt)`
    Exponential,
    /// Decline proportional to rate: `qt = q1 / (1 + D·Δt)`
    Harmonic,
    /// Arps hyperbolic with fixed b-factor: `qt = q1 / (1 + b·D·Δt)^(1/b)`
    Hyperbolic,
}

impl std::fmt::Display for DeclineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclineType::Exponential => write!(f, "exponential"),
            DeclineType::Harmonic => write!(f, "harmonic"),
            DeclineType::Hyperbolic => write!(f, "hyperbolic"),
        }
    }
}

/// Validated input parameters for one forecast.
///
/// Invariants (checked by the engine, not here): `t2 > t1`, `q1 ≥ q2 > 0`,
/// `qf > 0`. Times are in unit steps (one step per observed sample, typically
/// days); rates are in bbl per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclineParameters {
    /// First anchor time
    pub t1: f64,
    /// Rate at first anchor (bbl/step)
    pub q1: f64,
    /// Second anchor time
    pub t2: f64,
    /// Rate at second anchor (bbl/step)
    pub q2: f64,
    /// Economic-limit rate — extrapolation stops once the forecast falls to this
    pub qf: f64,
    /// Which decline model to apply
    pub decline_type: DeclineType,
}

/// One time/rate pair on the forecast curve.
///
/// Serialized as `{"t": ..., "qt": ...}` — the shape the plotting frontend
/// consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionPoint {
    pub t: f64,
    pub qt: f64,
}

/// Cumulative production split into observed and extrapolated components.
///
/// All values are reported in MMbbl (million barrels); `total` is always the
/// exact sum of the other two fields, never independently rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeProduction {
    /// Historical volume summed from the observed series (MMbbl)
    pub observed: f64,
    /// Analytically integrated volume from t2 down to the economic limit (MMbbl)
    pub extrapolated: f64,
    /// `observed + extrapolated` (MMbbl)
    pub total: f64,
}

/// Full forecast output returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Derived decline rate (per unit step)
    #[serde(rename = "D")]
    pub decline_rate: f64,
    /// Chronological curve from t1 through the last point above the economic limit
    pub curve: Vec<ProductionPoint>,
    /// Observed + extrapolated volumes (MMbbl)
    pub cumulative: CumulativeProduction,
    /// First time step at or below the economic limit (excluded from the curve)
    pub terminal_time: f64,
    /// Calendar date corresponding to `terminal_time`
    pub terminal_date: NaiveDate,
}
