//! Request handlers for the forecast API

use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::decline_engine::{self, parse_decline_type};
use crate::types::DeclineParameters;

/// Request body for `POST /api/v1/forecast`.
///
/// `decline_type` arrives as a raw string and is parsed here so an unknown
/// selector surfaces as `INVALID_DECLINE_TYPE` rather than a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub t1: f64,
    pub q1: f64,
    pub t2: f64,
    pub q2: f64,
    pub qf: f64,
    pub decline_type: String,
    /// Historical rates, one per unit time step starting at t = 0
    pub observed_rates: Vec<f64>,
    /// Calendar date of t = 0 (`YYYY-MM-DD`)
    pub start_date: String,
}

/// POST /api/v1/forecast — run a full decline forecast.
pub async fn post_forecast(Json(request): Json<ForecastRequest>) -> Response {
    let decline_type = match parse_decline_type(&request.decline_type) {
        Ok(dt) => dt,
        Err(e) => {
            warn!(selector = %request.decline_type, "forecast rejected: {e}");
            return ApiErrorResponse::from_forecast_error(&e);
        }
    };

    let params = DeclineParameters {
        t1: request.t1,
        q1: request.q1,
        t2: request.t2,
        q2: request.q2,
        qf: request.qf,
        decline_type,
    };

    match decline_engine::forecast(&params, &request.observed_rates, &request.start_date) {
        Ok(result) => ApiResponse::ok(result),
        Err(e) => {
            warn!(model = %decline_type, error = %e, "forecast rejected");
            ApiErrorResponse::from_forecast_error(&e)
        }
    }
}

/// GET /api/v1/health — liveness probe.
pub async fn get_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "wellcast",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
