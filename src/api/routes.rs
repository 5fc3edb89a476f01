//! API route definitions
//!
//! - POST /api/v1/forecast - run a decline forecast
//! - GET  /api/v1/health   - liveness probe
//! - GET  /health          - legacy liveness probe at root level

use axum::routing::{get, post};
use axum::Router;

use super::handlers;

/// Create all /api/v1 routes.
pub fn api_routes() -> Router {
    Router::new()
        .route("/forecast", post(handlers::post_forecast))
        .route("/health", get(handlers::get_health))
}

/// Legacy health endpoint at root level.
pub fn legacy_routes() -> Router {
    Router::new().route("/health", get(handlers::get_health))
}
