//! Cumulative production (Np) accounting
//!
//! Combines the historically observed volume (one rate sample per unit step,
//! supplied by the caller) with the analytically integrated extrapolated
//! volume from the decline model.

use super::{models, ForecastError};
use crate::types::{CumulativeProduction, DeclineParameters};

/// Reporting divisor: barrels → million barrels (MMbbl).
pub const VOLUME_SCALE_BBL: f64 = 1_000_000.0;

/// Compute observed, extrapolated, and total cumulative production in MMbbl.
///
/// `observed` must supply at least `floor(t2)` samples; the sum covers
/// `[0, floor(t2))`. `total` is the exact sum of the two scaled components.
pub fn cumulative_production(
    params: &DeclineParameters,
    decline_rate: f64,
    observed: &[f64],
) -> Result<CumulativeProduction, ForecastError> {
    let required = params.t2.floor() as usize;
    if observed.len() < required {
        return Err(ForecastError::InsufficientObservedData {
            required,
            actual: observed.len(),
        });
    }

    let observed_bbl: f64 = observed[..required].iter().sum();
    let observed = observed_bbl / VOLUME_SCALE_BBL;
    let extrapolated =
        models::extrapolated_volume(params.decline_type, decline_rate, params.q2, params.qf)
            / VOLUME_SCALE_BBL;

    Ok(CumulativeProduction {
        observed,
        extrapolated,
        total: observed + extrapolated,
    })
}
