//! Terminal date projection
//!
//! Maps the terminal time index (unit steps, one per day) onto a calendar
//! date anchored at the caller-supplied start date of the observed series.

use chrono::{Duration, NaiveDate};

use super::ForecastError;

/// Resolve `start_date + terminal_time` days.
///
/// `terminal_time` is rounded to the nearest whole day: the curve advances in
/// unit steps from `t1`, so a fractional terminal step only arises from
/// fractional anchor times and lands on the closest calendar day rather than
/// silently truncating.
///
/// `start_date` must be `YYYY-MM-DD`; anything unparsable fails with
/// [`ForecastError::InvalidStartDate`].
pub fn project_terminal_date(
    start_date: &str,
    terminal_time: f64,
) -> Result<NaiveDate, ForecastError> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidStartDate(start_date.to_string()))?;

    Ok(start + Duration::days(terminal_time.round() as i64))
}
