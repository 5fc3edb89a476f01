//! Arps decline model formulas
//!
//! Per-variant calculations for decline-curve analysis:
//! - Decline rate `D` from two anchor points
//! - Instantaneous rate at time `t`
//! - Analytically integrated volume from the second anchor down to the
//!   economic limit
//!
//! Formulas follow the standard Arps family. Hyperbolic uses a fixed
//! b-factor — see [`HYPERBOLIC_B`].

use super::ForecastError;
use crate::types::DeclineType;

/// Hyperbolic b-factor (curvature exponent, dimensionless).
///
/// b = 0 degenerates to exponential decline, b = 1 to harmonic. The
/// extrapolated-volume integral diverges at b = 1. Fixed rather than
/// operator-supplied; the rate and volume formulas below assume `0 < b < 1`.
pub const HYPERBOLIC_B: f64 = 0.5;

/// Parse a decline model selector string.
///
/// Case-insensitive. Fails with [`ForecastError::InvalidDeclineType`] for
/// anything outside the closed variant set — there is no default model.
pub fn parse_decline_type(selector: &str) -> Result<DeclineType, ForecastError> {
    match selector.trim().to_lowercase().as_str() {
        "exponential" => Ok(DeclineType::Exponential),
        "harmonic" => Ok(DeclineType::Harmonic),
        "hyperbolic" => Ok(DeclineType::Hyperbolic),
        other => Err(ForecastError::InvalidDeclineType(other.to_string())),
    }
}

/// Derive the decline rate `D` from two anchor points.
///
/// - Exponential: `D = ln(q1/q2) / (t2 - t1 + 1)`
/// - Harmonic:    `D = (q1 - q2) / (q2·(t2 - t1))`
/// - Hyperbolic:  `D = ((q1/q2)^b - 1) / (b·(t2 - t1))`
///
/// Fails with `InvalidDomain` for non-positive anchor rates, and for
/// Harmonic/Hyperbolic when the derived `D` is zero or negative (the rate
/// formula divides by `1 + D·Δt`, and a non-positive `D` means the curve
/// never declines). Exponential with `q1 == q2` yields `D = 0` and is caught
/// by the extrapolation bound instead.
pub fn compute_decline_rate(
    model: DeclineType,
    t1: f64,
    q1: f64,
    t2: f64,
    q2: f64,
) -> Result<f64, ForecastError> {
    if q1 <= 0.0 || q2 <= 0.0 {
        return Err(ForecastError::InvalidDomain(format!(
            "decline rate undefined for non-positive rates (q1 = {q1}, q2 = {q2})"
        )));
    }

    let span = t2 - t1;
    let decline_rate = match model {
        DeclineType::Exponential => (q1 / q2).ln() / (span + 1.0),
        DeclineType::Harmonic => (q1 - q2) / (q2 * span),
        DeclineType::Hyperbolic => ((q1 / q2).powf(HYPERBOLIC_B) - 1.0) / (HYPERBOLIC_B * span),
    };

    match model {
        DeclineType::Harmonic | DeclineType::Hyperbolic if decline_rate <= 0.0 => {
            Err(ForecastError::InvalidDomain(format!(
                "{model} decline requires q1 > q2, derived D = {decline_rate}"
            )))
        }
        _ => Ok(decline_rate),
    }
}

/// Instantaneous rate at time `t` given the derived decline rate.
///
/// Substituting `t = t1` returns exactly `q1` for all variants.
pub fn rate_at(model: DeclineType, decline_rate: f64, t1: f64, q1: f64, t: f64) -> f64 {
    let dt = t - t1;
    match model {
        DeclineType::Exponential => q1 * (-decline_rate * dt).exp(),
        DeclineType::Harmonic => q1 / (1.0 + decline_rate * dt),
        DeclineType::Hyperbolic => {
            q1 / (1.0 + HYPERBOLIC_B * decline_rate * dt).powf(1.0 / HYPERBOLIC_B)
        }
    }
}

/// Closed-form integral of the decline curve from the second anchor down to
/// the economic limit `qf`, in barrels.
///
/// - Exponential: `q2 / D`
/// - Harmonic:    `(q2/D)·ln(q2/qf)`
/// - Hyperbolic:  `(q2^b / (D·(1-b)))·(q2^(1-b) - qf^(1-b))` — finite only
///   because `b ≠ 1`
pub fn extrapolated_volume(model: DeclineType, decline_rate: f64, q2: f64, qf: f64) -> f64 {
    match model {
        DeclineType::Exponential => q2 / decline_rate,
        DeclineType::Harmonic => (q2 / decline_rate) * (q2 / qf).ln(),
        DeclineType::Hyperbolic => {
            let b = HYPERBOLIC_B;
            (q2.powf(b) / (decline_rate * (1.0 - b))) * (q2.powf(1.0 - b) - qf.powf(1.0 - b))
        }
    }
}
