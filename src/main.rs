//! Wellcast - Decline-Curve Production Forecasting Service
//!
//! HTTP service that forecasts future well production from two historical
//! rate-time anchor points using classic Arps decline models.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (binds 0.0.0.0:8000)
//! cargo run --release
//!
//! # Override the bind address
//! cargo run --release -- --addr 127.0.0.1:9000
//! ```
//!
//! # Environment Variables
//!
//! - `WELLCAST_CONFIG`: Path to a wellcast.toml config file
//! - `WELLCAST_SERVER_ADDR`: HTTP bind address (overridden by `--addr`)
//! - `WELLCAST_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use wellcast::api::create_app;
use wellcast::config::{self, ForecastConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wellcast")]
#[command(about = "Wellcast decline-curve production forecasting service")]
#[command(version)]
struct CliArgs {
    /// Override the server bind address (default: from config, "0.0.0.0:8000")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to a wellcast.toml config file (overrides the search order)
    #[arg(long)]
    config: Option<String>,
}

/// Resolve the bind address: CLI flag, then env var, then config file.
fn resolve_server_addr(cli_addr: Option<String>) -> String {
    if let Some(addr) = cli_addr {
        return addr;
    }
    if let Ok(addr) = std::env::var("WELLCAST_SERVER_ADDR") {
        return addr;
    }
    config::get().server.addr.clone()
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load forecast configuration
    let forecast_config = match &args.config {
        Some(path) => ForecastConfig::load_from_file(std::path::Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => ForecastConfig::load(),
    };
    info!(
        "Well: {} | Field: {} | Extrapolation cap: {} steps",
        forecast_config.well.name,
        if forecast_config.well.field.is_empty() {
            "unset"
        } else {
            &forecast_config.well.field
        },
        forecast_config.forecast.max_extrapolation_steps
    );
    config::init(forecast_config);

    let server_addr = resolve_server_addr(args.addr);

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Wellcast - Decline-Curve Production Forecasting");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let app = create_app();

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;

    info!("✓ HTTP server listening on {}", server_addr);
    info!("  Forecast endpoint: POST http://{}/api/v1/forecast", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal");
            }
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}
