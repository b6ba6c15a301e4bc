//! HTTP server initialization and runtime setup.
//!
//! Opens the store, wires services, and runs Axum until Ctrl-C.

use crate::config::Config;
use crate::infrastructure::persistence::{Database, PoolSettings};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened or its schema applied
/// - The listen address cannot be bound
/// - The server fails while running
pub async fn run(config: Config) -> Result<()> {
    let settings = PoolSettings {
        max_connections: config.db_max_connections,
        acquire_timeout: Duration::from_secs(config.db_connect_timeout),
    };

    let database = Database::connect(&config.storage_path, &settings)
        .await
        .context("Failed to initialize storage")?;

    let state = AppState::new(&database);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
