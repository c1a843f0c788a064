//! Startup sequence tying configuration, fixtures, index and server
//! together.
//!
//! 1. Load the fixture catalog (embedded or configured files)
//! 2. Build the event index
//! 3. Serve the API until shutdown

use std::sync::Arc;

use conftalks_core::IndexError;
use tracing::info;

use crate::catalog::{Catalog, CatalogError};
use crate::config::ServerConfig;
use crate::server::{ServerError, start_server};
use crate::state::AppState;

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Fixture documents could not be read or parsed.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// The event index could not be built.
    #[error("index error: {source}")]
    Index {
        /// The underlying index error.
        #[from]
        source: IndexError,
    },

    /// The server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}

/// Load fixtures and build the shared application state.
pub fn build_state(config: &ServerConfig) -> Result<Arc<AppState>, StartupError> {
    let catalog = Catalog::load(config)?;
    let index = catalog.into_index()?;
    info!(
        events = index.len(),
        talks = index.talk_count(),
        "event index ready"
    );
    Ok(Arc::new(AppState::new(index)))
}

/// Build the application state and serve it until shutdown.
pub async fn run(config: &ServerConfig) -> Result<(), StartupError> {
    let state = build_state(config)?;
    start_server(config, state).await?;
    Ok(())
}
