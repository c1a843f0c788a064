//! Conference talks server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from environment variables
//! 2. Initialize structured logging (tracing)
//! 3. Load fixtures and build the event index
//! 4. Serve the HTTP API until `Ctrl-C`

use conftalks_server::{LogFormat, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the fixtures cannot be
/// loaded into an index, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = ServerConfig::from_env()?;

    // 2. Initialize structured logging.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }

    info!("conftalks-server starting");
    info!(
        host = config.host,
        port = config.port,
        events_file = ?config.events_file,
        talks_file = ?config.talks_file,
        "configuration loaded"
    );

    // 3 + 4. Build the index and serve.
    conftalks_server::run(&config).await?;

    Ok(())
}
