//! Forecast curve generation
//!
//! Projects the decline model forward in unit time steps: first across the
//! observed anchor span `[t1, t2]`, then into the extrapolated span until the
//! rate falls to the economic limit `qf`.
//!
//! The extrapolation loop is bounded. A model whose derived decline rate is
//! effectively zero (e.g. exponential anchors with `q1 ≈ q2`) would otherwise
//! never reach `qf`; exceeding the cap fails with `NonTerminatingForecast`.

use tracing::warn;

use super::{models, ForecastError};
use crate::types::{DeclineParameters, ProductionPoint};

/// Default hard cap on extrapolation steps (~100 years of daily steps).
pub const DEFAULT_MAX_EXTRAPOLATION_STEPS: usize = 36_500;

fn cfg_max_extrapolation_steps() -> usize {
    if crate::config::is_initialized() {
        crate::config::get().forecast.max_extrapolation_steps
    } else {
        DEFAULT_MAX_EXTRAPOLATION_STEPS
    }
}

/// Forecast curve plus the terminal time index.
#[derive(Debug, Clone)]
pub struct CurveProjection {
    /// Chronological points from `t1` through the last step still above `qf`
    pub points: Vec<ProductionPoint>,
    /// First time step where the rate fell to or below `qf` (not in `points`)
    pub terminal_time: f64,
}

/// Generate the forecast curve in two phases.
///
/// Phase 1 emits one point per unit step across `[t1, t2]`. Phase 2 continues
/// from `t2 + 1` until the rate reaches the economic limit; the step that
/// crosses it becomes the terminal time and is excluded from the curve.
pub fn generate_curve(
    params: &DeclineParameters,
    decline_rate: f64,
) -> Result<CurveProjection, ForecastError> {
    let model = params.decline_type;
    let mut points = Vec::new();

    // Phase 1: observed span
    let mut t = params.t1;
    while t <= params.t2 {
        points.push(ProductionPoint {
            t,
            qt: models::rate_at(model, decline_rate, params.t1, params.q1, t),
        });
        t += 1.0;
    }

    // Phase 2: extrapolation to the economic limit
    let max_steps = cfg_max_extrapolation_steps();
    let mut t = params.t2 + 1.0;
    for _ in 0..max_steps {
        let qt = models::rate_at(model, decline_rate, params.t1, params.q1, t);
        if qt <= params.qf {
            return Ok(CurveProjection {
                points,
                terminal_time: t,
            });
        }
        points.push(ProductionPoint { t, qt });
        t += 1.0;
    }

    warn!(
        model = %model,
        decline_rate,
        qf = params.qf,
        max_steps,
        "extrapolation did not reach the economic limit"
    );
    Err(ForecastError::NonTerminatingForecast { steps: max_steps })
}
