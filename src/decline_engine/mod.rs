//! Decline Engine — core DCA mathematics
//!
//! Pure, synchronous, side-effect-free forecasting from two rate-time anchor
//! points:
//!
//! - `models`: per-variant decline rate, rate-at-time, and extrapolated volume
//! - `curve`: bounded forward projection to the economic limit
//! - `cumulative`: observed + extrapolated volume accounting
//! - `dates`: terminal time index → calendar date
//!
//! The engine performs no I/O and holds no state between calls; the HTTP layer
//! owns request parsing and serialization.

pub mod cumulative;
pub mod curve;
pub mod dates;
pub mod models;

pub use curve::CurveProjection;
pub use models::parse_decline_type;

use thiserror::Error;
use tracing::debug;

use crate::types::{DeclineParameters, ForecastResult};

/// Error taxonomy for forecast computation.
///
/// Every variant indicates a caller contract breach, not a transient
/// condition — nothing here is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Model selector string is not one of the three known variants
    #[error("unrecognized decline type '{0}' (expected exponential, harmonic, or hyperbolic)")]
    InvalidDeclineType(String),

    /// Non-positive rates, inverted anchors, or a non-positive derived decline rate
    #[error("invalid parameter domain: {0}")]
    InvalidDomain(String),

    /// Extrapolation loop hit its hard cap before the rate fell to the economic limit
    #[error("extrapolation exceeded {steps} steps without reaching the economic limit")]
    NonTerminatingForecast { steps: usize },

    /// Observed series does not cover the anchor span
    #[error("observed series has {actual} entries, {required} required to cover t2")]
    InsufficientObservedData { required: usize, actual: usize },

    /// Start date string is not a parsable calendar date
    #[error("invalid start date '{0}' (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
}

impl ForecastError {
    /// Stable machine-readable code used in API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            ForecastError::InvalidDeclineType(_) => "INVALID_DECLINE_TYPE",
            ForecastError::InvalidDomain(_) => "INVALID_DOMAIN",
            ForecastError::NonTerminatingForecast { .. } => "NON_TERMINATING_FORECAST",
            ForecastError::InsufficientObservedData { .. } => "INSUFFICIENT_OBSERVED_DATA",
            ForecastError::InvalidStartDate(_) => "INVALID_START_DATE",
        }
    }
}

/// Check the parameter invariants shared by all three models.
fn validate_parameters(params: &DeclineParameters) -> Result<(), ForecastError> {
    if params.q1 <= 0.0 || params.q2 <= 0.0 {
        return Err(ForecastError::InvalidDomain(format!(
            "anchor rates must be positive (q1 = {}, q2 = {})",
            params.q1, params.q2
        )));
    }
    if params.q2 > params.q1 {
        return Err(ForecastError::InvalidDomain(format!(
            "rate must not increase between anchors (q1 = {}, q2 = {})",
            params.q1, params.q2
        )));
    }
    if params.t2 <= params.t1 {
        return Err(ForecastError::InvalidDomain(format!(
            "anchor times must be ordered (t1 = {}, t2 = {})",
            params.t1, params.t2
        )));
    }
    if params.qf <= 0.0 {
        return Err(ForecastError::InvalidDomain(format!(
            "economic limit must be positive (qf = {})",
            params.qf
        )));
    }
    if params.qf >= params.q2 {
        // The observed span already ends at q2; a limit at or above it means
        // the curve's tail sits at or below qf and the extrapolated-volume
        // integrals go negative.
        return Err(ForecastError::InvalidDomain(format!(
            "economic limit must lie below the second anchor rate (qf = {}, q2 = {})",
            params.qf, params.q2
        )));
    }
    Ok(())
}

/// Run a full decline forecast.
///
/// Derives the decline rate, projects the curve forward until the rate falls
/// to the economic limit, combines observed and extrapolated cumulative
/// volumes, and resolves the terminal calendar date.
///
/// `observed` supplies one historical rate per unit time step starting at
/// `t = 0` and must cover at least `floor(t2)` entries. `start_date` is the
/// calendar date of `t = 0` in `YYYY-MM-DD` form.
pub fn forecast(
    params: &DeclineParameters,
    observed: &[f64],
    start_date: &str,
) -> Result<ForecastResult, ForecastError> {
    validate_parameters(params)?;

    let decline_rate = models::compute_decline_rate(
        params.decline_type,
        params.t1,
        params.q1,
        params.t2,
        params.q2,
    )?;

    let projection = curve::generate_curve(params, decline_rate)?;
    let cumulative = cumulative::cumulative_production(params, decline_rate, observed)?;
    let terminal_date = dates::project_terminal_date(start_date, projection.terminal_time)?;

    debug!(
        model = %params.decline_type,
        decline_rate,
        terminal_time = projection.terminal_time,
        curve_points = projection.points.len(),
        "forecast complete"
    );

    Ok(ForecastResult {
        decline_rate,
        curve: projection.points,
        cumulative,
        terminal_time: projection.terminal_time,
        terminal_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeclineType;

    fn params(decline_type: DeclineType) -> DeclineParameters {
        DeclineParameters {
            t1: 0.0,
            q1: 1000.0,
            t2: 10.0,
            q2: 500.0,
            qf: 50.0,
            decline_type,
        }
    }

    #[test]
    fn test_forecast_exponential_scenario() {
        let p = params(DeclineType::Exponential);
        let observed = vec![900.0; 10];

        let result = forecast(&p, &observed, "2020-01-01").unwrap();

        // D = ln(2) / 11
        let expected_d = (2.0_f64).ln() / 11.0;
        assert!((result.decline_rate - expected_d).abs() < 1e-12);

        // rate at t1 is exactly q1
        assert_eq!(result.curve[0].qt, 1000.0);

        // last kept point is above qf, terminal step is the first at/below it
        let last = result.curve.last().unwrap();
        assert!(last.qt > p.qf);
        assert_eq!(result.terminal_time, last.t + 1.0);
    }

    #[test]
    fn test_forecast_rejects_increasing_rates() {
        let mut p = params(DeclineType::Exponential);
        p.q2 = 1500.0;
        let err = forecast(&p, &[0.0; 10], "2020-01-01").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidDomain(_)));
    }

    #[test]
    fn test_forecast_rejects_inverted_anchors() {
        let mut p = params(DeclineType::Exponential);
        p.t2 = 0.0;
        p.t1 = 10.0;
        let err = forecast(&p, &[0.0; 10], "2020-01-01").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidDomain(_)));
    }

    #[test]
    fn test_forecast_rejects_nonpositive_economic_limit() {
        let mut p = params(DeclineType::Exponential);
        p.qf = 0.0;
        let err = forecast(&p, &[0.0; 10], "2020-01-01").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidDomain(_)));
    }

    #[test]
    fn test_forecast_rejects_economic_limit_at_or_above_q2() {
        // qf above q2: the observed span already sits at or below the limit
        let mut p = params(DeclineType::Harmonic);
        p.qf = 600.0;
        let err = forecast(&p, &[0.0; 10], "2020-01-01").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidDomain(_)));

        // qf exactly at q2 is just as degenerate
        let mut p = params(DeclineType::Exponential);
        p.qf = p.q2;
        let err = forecast(&p, &[0.0; 10], "2020-01-01").unwrap_err();
        assert!(matches!(err, ForecastError::InvalidDomain(_)));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ForecastError::InvalidDeclineType("linear".into()).code(),
            "INVALID_DECLINE_TYPE"
        );
        assert_eq!(
            ForecastError::NonTerminatingForecast { steps: 10 }.code(),
            "NON_TERMINATING_FORECAST"
        );
    }
}
