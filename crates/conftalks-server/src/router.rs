//! Axum router construction for the events API.
//!
//! Assembles all routes into a single [`Router`] with request tracing
//! and permissive CORS (the data is public and read-only).

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /events` -- all events
/// - `GET /events/{id}` -- talks of one event (`?day=N` filters by day)
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(handlers::list_events))
        .route("/events/{id}", get(handlers::get_event_talks))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
