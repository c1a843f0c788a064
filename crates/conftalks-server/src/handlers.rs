//! REST API endpoint handlers.
//!
//! All handlers read from the [`EventIndex`](conftalks_core::EventIndex)
//! held in the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/events` | List all events |
//! | `GET` | `/events/{id}` | Talks of one event |
//! | `GET` | `/events/{id}?day=N` | Talks held on day `N` of one event |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use conftalks_types::{Events, Talks};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the `GET /events/{id}` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct TalksQuery {
    /// 1-based day of the event. Kept as text so that a non-numeric value
    /// becomes an [`ApiError::InvalidQuery`] with a JSON body.
    pub day: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /events -- list events
// ---------------------------------------------------------------------------

/// List every event. Talk lists are not part of the event wire format.
pub async fn list_events(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let body = Events {
        events: state.index.list_events(),
    };
    Ok(Json(serde_json::to_value(body)?))
}

// ---------------------------------------------------------------------------
// GET /events/{id} -- talks of one event
// ---------------------------------------------------------------------------

/// Return the talks of one event, optionally restricted to a single day.
///
/// # Query Parameters
///
/// - `day`: 1-based day offset from the event's start date. Absent or
///   empty means every talk.
pub async fn get_event_talks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<TalksQuery>,
) -> Result<Json<Value>, ApiError> {
    let talks = match parse_day(params.day.as_deref())? {
        Some(day) => state.index.filtered_talks(&id, day)?,
        None => state.index.event_talks(&id)?,
    };

    Ok(Json(serde_json::to_value(Talks { talks })?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the optional `day` parameter. Empty counts as absent.
fn parse_day(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|e| ApiError::InvalidQuery(format!("day {text:?} is not an integer: {e}"))),
    }
}
