//! Server configuration.
//!
//! All configuration comes from environment variables, each with a
//! default, so the binary runs with no setup at all:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SERVER_HOST` | `0.0.0.0` | Address to bind |
//! | `SERVER_PORT` | `8000` | TCP port to bind |
//! | `EVENTS_FILE` | embedded fixture | Events JSON document |
//! | `TALKS_FILE` | embedded fixture | Talks JSON document |
//! | `LOG_FORMAT` | `text` | `text` or `json` log output |
//!
//! The log level itself is read from `RUST_LOG` by the binary.

use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Events document to load instead of the embedded fixture.
    pub events_file: Option<PathBuf>,
    /// Talks document to load instead of the embedded fixture.
    pub talks_file: Option<PathBuf>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            events_file: None,
            talks_file: None,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables both fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = var("SERVER_HOST").unwrap_or(defaults.host);

        let port = match var("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: format!("{raw:?}: {e}"),
            })?,
            None => defaults.port,
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    reason: format!("expected `text` or `json`, got {other:?}"),
                });
            }
        };

        Ok(Self {
            host,
            port,
            events_file: var("EVENTS_FILE").map(PathBuf::from),
            talks_file: var("TALKS_FILE").map(PathBuf::from),
            log_format,
        })
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
