//! # OSS Register Server
//!
//! Serves the register operations over HTTP.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080 --mocks mocks.json
//! ```

use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use oss_register::config::Config;
use oss_register::http::build_router;
use oss_register::lifecycle::tracing::setup_tracing;
use oss_register::lifecycle::Register;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::parse();
    info!(?config, "Starting register server");

    let mocks = config.mock_registry()?;
    let register = Arc::new(Register::new(mocks));
    let api_version = HeaderValue::from_str(&config.resolve_api_version()).context("invalid API version")?;
    let router = build_router(register, api_version, config.openapi.clone());

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
