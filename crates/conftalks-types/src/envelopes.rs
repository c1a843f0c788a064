//! JSON envelopes returned by the HTTP API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::structs::{Event, Talk};

/// Body of `GET /events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Events {
    /// Every indexed event, in no particular order.
    pub events: Vec<Event>,
}

/// Body of `GET /events/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Talks {
    /// Talks of the requested event, in load order.
    pub talks: Vec<Talk>,
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}
