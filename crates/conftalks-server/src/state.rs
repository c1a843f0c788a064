//! Shared application state for the HTTP API.

use conftalks_core::EventIndex;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The index is immutable, so handlers read it without any
/// lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The event index built at startup.
    pub index: EventIndex,
}

impl AppState {
    /// Wrap a built index.
    pub const fn new(index: EventIndex) -> Self {
        Self { index }
    }
}
