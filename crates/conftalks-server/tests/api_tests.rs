//! Integration tests for the events API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use conftalks_core::EventIndex;
use conftalks_server::catalog::Catalog;
use conftalks_server::router::build_router;
use conftalks_server::state::AppState;
use conftalks_types::{Event, Talk};
use serde_json::Value;
use tower::ServiceExt;

fn event(id: &str, start: &str, end: &str) -> Event {
    Event {
        id: id.to_owned(),
        name: format!("{id} conference"),
        date_start: start.to_owned(),
        date_end: end.to_owned(),
        location: String::from("Amsterdam"),
        talks: Vec::new(),
    }
}

fn talk(event_id: &str, title: &str, date: &str) -> Talk {
    Talk {
        title: title.to_owned(),
        speakers: vec![String::from("Speaker")],
        date: date.to_owned(),
        time: String::from("10:00"),
        event_id: event_id.to_owned(),
    }
}

/// `event-1` runs 01/02/2010 to 02/02/2010 with three talks; `event-2`
/// has no dates and no talks.
fn make_test_state() -> Arc<AppState> {
    let index = EventIndex::build(
        vec![
            event("event-1", "01/02/2010", "02/02/2010"),
            Event {
                id: String::from("event-2"),
                ..Event::default()
            },
        ],
        vec![
            talk("event-1", "event 1 talk 1", "01/02/2010"),
            talk("event-1", "event 1 talk 2", "01/02/2010"),
            talk("event-1", "event 1 talk 3", "02/02/2010"),
            talk("event-99", "invalid talk", "01/02/2010"),
        ],
    );
    Arc::new(AppState::new(index))
}

async fn get(path: &str) -> Response {
    build_router(make_test_state())
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn talk_titles(json: &Value) -> Vec<&str> {
    json["talks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect()
}

async fn assert_bad_request(path: &str, expected: &str) {
    let response = get(path).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
    let json = body_to_json(response.into_body()).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains(expected),
        "{path}: expected {expected:?} in {message:?}"
    );
}

// =========================================================================
// GET /events
// =========================================================================

#[tokio::test]
async fn test_list_events() {
    let response = get("/events").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("application/json"));

    let json = body_to_json(response.into_body()).await;
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);

    let mut ids: Vec<&str> = events.iter().map(|e| e["ID"].as_str().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["event-1", "event-2"]);
}

#[tokio::test]
async fn test_list_events_wire_format() {
    let json = body_to_json(get("/events").await.into_body()).await;
    let first = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["ID"] == "event-1")
        .unwrap();

    assert_eq!(first["name"], "event-1 conference");
    assert_eq!(first["date_start"], "01/02/2010");
    assert_eq!(first["date_end"], "02/02/2010");
    assert_eq!(first["location"], "Amsterdam");
    assert!(first.get("talks").is_none());
}

#[tokio::test]
async fn test_list_events_round_trips_into_types() {
    let json = body_to_json(get("/events").await.into_body()).await;
    let parsed: conftalks_types::Events = serde_json::from_value(json).unwrap();
    assert!(parsed.events.contains(&event("event-1", "01/02/2010", "02/02/2010")));
}

// =========================================================================
// GET /events/{id}
// =========================================================================

#[tokio::test]
async fn test_event_talks_multiple() {
    let response = get("/events/event-1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        talk_titles(&json),
        ["event 1 talk 1", "event 1 talk 2", "event 1 talk 3"]
    );
    assert_eq!(json["talks"][0]["event_id"], "event-1");
    assert_eq!(json["talks"][0]["speakers"][0], "Speaker");
    assert_eq!(json["talks"][0]["time"], "10:00");
}

#[tokio::test]
async fn test_event_talks_empty() {
    let response = get("/events/event-2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json["talks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_event_talks_invalid_event() {
    assert_bad_request("/events/invalid-event", "no event for id invalid-event").await;
}

#[tokio::test]
async fn test_event_talks_empty_day_is_unfiltered() {
    let response = get("/events/event-2?day=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json["talks"].as_array().unwrap().is_empty());
}

// =========================================================================
// GET /events/{id}?day=N
// =========================================================================

#[tokio::test]
async fn test_filtered_talks_first_day() {
    let response = get("/events/event-1?day=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(talk_titles(&json), ["event 1 talk 1", "event 1 talk 2"]);
}

#[tokio::test]
async fn test_filtered_talks_second_day() {
    let response = get("/events/event-1?day=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(talk_titles(&json), ["event 1 talk 3"]);
}

#[tokio::test]
async fn test_filtered_talks_after_end() {
    assert_bad_request(
        "/events/event-1?day=3",
        "filtered date 03/02/2010 is after event end date 02/02/2010",
    )
    .await;
}

#[tokio::test]
async fn test_filtered_talks_invalid_event() {
    assert_bad_request("/events/invalid-event?day=1", "no event for id invalid-event").await;
}

#[tokio::test]
async fn test_filtered_talks_non_integer_day() {
    assert_bad_request("/events/event-1?day=adelina", "not an integer").await;
}

#[tokio::test]
async fn test_filtered_talks_negative_day() {
    assert_bad_request("/events/event-1?day=-1", "day must be > 1, but was -1").await;
}

#[tokio::test]
async fn test_filtered_talks_zero_day() {
    assert_bad_request("/events/event-1?day=0", "day must be > 1, but was 0").await;
}

#[tokio::test]
async fn test_filtered_talks_undated_event() {
    assert_bad_request("/events/event-2?day=1", "cannot parse date").await;
}

// =========================================================================
// Routing and fixtures
// =========================================================================

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let response = get("/api/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_embedded_fixtures_served() {
    let index = Catalog::embedded().unwrap().into_index().unwrap();
    let router = build_router(Arc::new(AppState::new(index)));

    let response = router
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    for id in ["ewit-2023", "devbcn-2023", "cphdevfest-2023"] {
        assert!(events.iter().any(|e| e["ID"] == id), "missing {id}");
    }

    let response = router
        .oneshot(
            Request::get("/events/devbcn-2023?day=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        talk_titles(&json),
        ["Contract testing in practice", "Observability for small teams"]
    );
}
