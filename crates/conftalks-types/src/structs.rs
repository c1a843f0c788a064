//! Event and talk records.
//!
//! Dates are kept as the `DD/MM/YYYY` text they were loaded with. Talk
//! filtering compares them as strings, so normalizing them here would
//! change which talks match a given day.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single scheduled presentation belonging to exactly one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Talk {
    /// Talk title.
    #[serde(default)]
    pub title: String,
    /// Speaker names, in billing order.
    #[serde(default)]
    pub speakers: Vec<String>,
    /// Day the talk is held on, formatted `DD/MM/YYYY`.
    #[serde(default)]
    pub date: String,
    /// Free-text time slot (e.g. `10:30`).
    #[serde(default)]
    pub time: String,
    /// Identifier of the owning [`Event`].
    #[serde(default)]
    pub event_id: String,
}

/// A conference instance with a date range, a location, and its talks.
///
/// `talks` is never read from or written to JSON. It is filled in when
/// the event index links talks to their owning event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique event identifier.
    #[serde(rename = "ID", default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// First day of the event, formatted `DD/MM/YYYY`.
    #[serde(default)]
    pub date_start: String,
    /// Last day of the event, formatted `DD/MM/YYYY`.
    #[serde(default)]
    pub date_end: String,
    /// Free-text venue or city.
    #[serde(default)]
    pub location: String,
    /// Talks belonging to this event, in the order they were loaded.
    #[serde(skip)]
    #[ts(skip)]
    pub talks: Vec<Talk>,
}
