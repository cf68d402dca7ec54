//! Movie API server.
//!
//! Loads the dataset once, then serves the read-only lookup endpoints
//! until interrupted.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use data_loader::Dataset;
use server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,server=debug,query=debug,data_loader=debug,tower_http=debug")
        }))
        .init();

    let config = ServerConfig::parse();
    info!("Starting movie API with {:?}", config);

    // A dataset that fails to load stops the process here
    let dataset = Arc::new(load_dataset(&config.data_file)?);
    let app = create_router(AppState::new(dataset));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    info!("Movie API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Movie API stopped");
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::load_from_file(path)
        .with_context(|| format!("Failed to load movie dataset from {}", path.display()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
