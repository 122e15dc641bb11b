mod actor_framework;
mod api;
mod app_system;
mod beer_actor;
mod clients;
mod domain;
mod error;
mod mapper;
mod repository;
mod service;

#[cfg(test)]
mod mock_framework;

use crate::app_system::{setup_tracing, AppConfig, BeerSystem};
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(buffer_size = config.buffer_size, "Starting beer stock service");

    let system = BeerSystem::new(&config);

    let listener = TcpListener::bind(config.http_bind)
        .await
        .with_context(|| format!("failed to bind {}", config.http_bind))?;
    let local_addr = listener.local_addr().context("failed to read bound address")?;
    info!(bind = %local_addr, "listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("beer system did not shut down cleanly")?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
