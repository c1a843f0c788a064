//! HTTP API for the conference talks server.
//!
//! This crate provides an Axum HTTP server exposing a read-only view of
//! conference events and their talks:
//!
//! - `GET /events` lists every event
//! - `GET /events/{id}` lists the talks of one event, optionally filtered
//!   to a single day with `?day=N`
//!
//! # Architecture
//!
//! At startup the fixture [`Catalog`] is parsed and turned into an
//! [`EventIndex`](conftalks_core::EventIndex), which is placed in the
//! shared [`AppState`]. The index never changes afterwards, so handlers
//! read it concurrently without locks. Index errors surface to clients
//! as `400` responses with an `{"error": ...}` body.
//!
//! [`Catalog`]: catalog::Catalog

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use startup::{StartupError, build_state, run};
pub use state::AppState;
