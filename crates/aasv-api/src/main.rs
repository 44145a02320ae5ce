//! # aasv-api entry point
//!
//! Loads configuration from the environment, wires the test-engine
//! client into the validator, and serves the Axum application.

use tracing_subscriber::EnvFilter;

use aasv_api::config::{Config, SERVICE_VERSION};
use aasv_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, version = SERVICE_VERSION, "starting AAS validation service");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
