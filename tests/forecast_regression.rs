//! Forecast Regression Tests
//!
//! End-to-end exercises of the decline engine through the public
//! `forecast()` entry point, covering all three Arps variants and the
//! documented failure modes.

use chrono::NaiveDate;
use wellcast::config::{self, ForecastConfig};
use wellcast::{forecast, DeclineParameters, DeclineType, ForecastError};

fn ensure_config() {
    if !config::is_initialized() {
        config::init(ForecastConfig::default());
    }
}

fn observed(len: usize, rate: f64) -> Vec<f64> {
    vec![rate; len]
}

/// Scenario A: exponential decline from 1000 to 500 over 11 steps.
#[test]
fn test_exponential_scenario_a() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 10.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Exponential,
    };
    let result = forecast(&params, &observed(10, 900.0), "2020-01-01").unwrap();

    // D = ln(2) / 11 ≈ 0.06301
    assert!((result.decline_rate - (2.0_f64).ln() / 11.0).abs() < 1e-12);

    // Substituting t = t1 returns exactly q1
    assert_eq!(result.curve[0].t, 0.0);
    assert_eq!(result.curve[0].qt, 1000.0);

    // Strictly decreasing curve
    for pair in result.curve.windows(2) {
        assert!(pair[1].qt < pair[0].qt);
    }

    // 1000·e^(-D·t) crosses 50 between t = 47 and t = 48
    assert_eq!(result.terminal_time, 48.0);
    let last = result.curve.last().unwrap();
    assert_eq!(last.t, 47.0);
    assert!(last.qt > params.qf);

    // Observed span [0, 10] plus extrapolation [11, 47]
    assert_eq!(result.curve.len(), 48);
}

/// Scenario B: harmonic decline with flat anchors must fail, not loop.
#[test]
fn test_harmonic_flat_anchors_scenario_b() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 800.0,
        t2: 10.0,
        q2: 800.0,
        qf: 50.0,
        decline_type: DeclineType::Harmonic,
    };
    let err = forecast(&params, &observed(10, 800.0), "2020-01-01").unwrap_err();
    assert!(matches!(err, ForecastError::InvalidDomain(_)));
}

/// Scenario C: hyperbolic (b = 0.5) with a finite closed-form volume.
#[test]
fn test_hyperbolic_scenario_c() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 5.0,
        q2: 700.0,
        qf: 100.0,
        decline_type: DeclineType::Hyperbolic,
    };
    let result = forecast(&params, &observed(5, 850.0), "2020-01-01").unwrap();

    let expected_d = ((1000.0_f64 / 700.0).sqrt() - 1.0) / (0.5 * 5.0);
    assert!((result.decline_rate - expected_d).abs() < 1e-12);

    assert!(result.cumulative.extrapolated.is_finite());
    assert!(result.cumulative.extrapolated > 0.0);

    // Non-increasing across the whole curve
    for pair in result.curve.windows(2) {
        assert!(pair[1].qt <= pair[0].qt);
    }
}

/// Cumulative total is the exact sum of its components, no independent rounding.
#[test]
fn test_cumulative_total_is_exact_sum() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 10.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Harmonic,
    };
    let result = forecast(&params, &observed(10, 123_456.789), "2020-01-01").unwrap();

    assert_eq!(
        result.cumulative.total,
        result.cumulative.observed + result.cumulative.extrapolated
    );
}

/// terminal_date - start_date equals terminal_time in days.
#[test]
fn test_terminal_date_round_trip() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 10.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Exponential,
    };
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let result = forecast(&params, &observed(10, 900.0), "2020-01-01").unwrap();

    let elapsed = (result.terminal_date - start).num_days();
    assert_eq!(elapsed as f64, result.terminal_time);
}

/// An economic limit at or above q2 is rejected: the observed span would
/// already end at or below qf, and the harmonic/hyperbolic volume integrals
/// would come out negative.
#[test]
fn test_economic_limit_above_q2_rejected() {
    ensure_config();

    for decline_type in [
        DeclineType::Exponential,
        DeclineType::Harmonic,
        DeclineType::Hyperbolic,
    ] {
        let params = DeclineParameters {
            t1: 0.0,
            q1: 1000.0,
            t2: 10.0,
            q2: 500.0,
            qf: 600.0,
            decline_type,
        };
        let err = forecast(&params, &observed(10, 900.0), "2020-01-01").unwrap_err();
        assert!(
            matches!(err, ForecastError::InvalidDomain(_)),
            "{decline_type} must reject qf >= q2"
        );
    }
}

/// Observed series shorter than floor(t2) is rejected explicitly.
#[test]
fn test_insufficient_observed_series() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 10.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Exponential,
    };
    let err = forecast(&params, &observed(4, 900.0), "2020-01-01").unwrap_err();
    assert_eq!(
        err,
        ForecastError::InsufficientObservedData {
            required: 10,
            actual: 4
        }
    );
}

/// Unparsable start date is rejected after the curve math validates.
#[test]
fn test_invalid_start_date() {
    ensure_config();

    let params = DeclineParameters {
        t1: 0.0,
        q1: 1000.0,
        t2: 10.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Exponential,
    };
    let err = forecast(&params, &observed(10, 900.0), "March 1st 2020").unwrap_err();
    assert!(matches!(err, ForecastError::InvalidStartDate(_)));
}

/// All three variants agree that the rate at the first anchor is q1.
#[test]
fn test_all_variants_anchor_at_q1() {
    ensure_config();

    for decline_type in [
        DeclineType::Exponential,
        DeclineType::Harmonic,
        DeclineType::Hyperbolic,
    ] {
        let params = DeclineParameters {
            t1: 0.0,
            q1: 1000.0,
            t2: 10.0,
            q2: 400.0,
            qf: 50.0,
            decline_type,
        };
        let result = forecast(&params, &observed(10, 900.0), "2020-01-01").unwrap();
        assert_eq!(
            result.curve[0].qt, 1000.0,
            "{decline_type} curve must start at q1"
        );
    }
}

/// Non-zero t1: the observed span and anchors shift together.
#[test]
fn test_offset_anchor_times() {
    ensure_config();

    let params = DeclineParameters {
        t1: 5.0,
        q1: 1000.0,
        t2: 15.0,
        q2: 500.0,
        qf: 50.0,
        decline_type: DeclineType::Harmonic,
    };
    let result = forecast(&params, &observed(15, 900.0), "2020-01-01").unwrap();

    assert_eq!(result.curve[0].t, 5.0);
    assert_eq!(result.curve[0].qt, 1000.0);
    assert!(result.terminal_time > params.t2);
}
