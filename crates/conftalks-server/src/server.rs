//! HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the Axum
//! server until `Ctrl-C` is received, then drains in-flight requests.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let bind_address = config.bind_address();
    let listener = TcpListener::bind(bind_address.as_str())
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {bind_address}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address for {bind_address}: {e}")))?;

    let router = build_router(state);

    info!(%addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    info!("server stopped");
    Ok(())
}

/// Resolves on `Ctrl-C`. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
