//! Fixture loading for the event index.
//!
//! The binary ships with two JSON documents compiled in
//! (`data/events.json` and `data/talks.json`). Either can be replaced at
//! startup with a file on disk via [`ServerConfig`]. A document that
//! parses but lacks its top-level array yields `None` for that list,
//! which the index rejects as missing input.

use std::path::Path;

use conftalks_core::{EventIndex, IndexError};
use conftalks_types::{Event, Talk};
use serde::Deserialize;
use tracing::info;

use crate::config::ServerConfig;

/// Events document embedded at compile time.
pub const EMBEDDED_EVENTS: &str = include_str!("../data/events.json");

/// Talks document embedded at compile time.
pub const EMBEDDED_TALKS: &str = include_str!("../data/talks.json");

/// Errors that can occur while reading fixture documents.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A fixture document is not valid JSON of the expected shape.
    #[error("failed to parse {what} document: {source}")]
    Json {
        /// Which document failed (`events` or `talks`).
        what: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Option<Vec<Event>>,
}

#[derive(Debug, Deserialize)]
struct TalksDocument {
    #[serde(default)]
    talks: Option<Vec<Talk>>,
}

/// Raw event and talk lists, as read from their documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Events, or `None` if the document had no `events` array.
    pub events: Option<Vec<Event>>,
    /// Talks, or `None` if the document had no `talks` array.
    pub talks: Option<Vec<Talk>>,
}

impl Catalog {
    /// Load the catalog named by `config`, falling back to the embedded
    /// fixtures for any document without a configured file.
    pub fn load(config: &ServerConfig) -> Result<Self, CatalogError> {
        let events_json = read_or_embedded(config.events_file.as_deref(), EMBEDDED_EVENTS)?;
        let talks_json = read_or_embedded(config.talks_file.as_deref(), EMBEDDED_TALKS)?;
        Self::parse(&events_json, &talks_json)
    }

    /// The compiled-in fixtures.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED_EVENTS, EMBEDDED_TALKS)
    }

    /// Parse an events document and a talks document.
    pub fn parse(events_json: &str, talks_json: &str) -> Result<Self, CatalogError> {
        let events: EventsDocument = serde_json::from_str(events_json)
            .map_err(|source| CatalogError::Json { what: "events", source })?;
        let talks: TalksDocument = serde_json::from_str(talks_json)
            .map_err(|source| CatalogError::Json { what: "talks", source })?;

        Ok(Self {
            events: events.events,
            talks: talks.talks,
        })
    }

    /// Build the event index from this catalog.
    pub fn into_index(self) -> Result<EventIndex, IndexError> {
        EventIndex::new(self.events, self.talks)
    }
}

fn read_or_embedded(path: Option<&Path>, embedded: &str) -> Result<String, CatalogError> {
    let Some(path) = path else {
        return Ok(embedded.to_owned());
    };
    info!(path = %path.display(), "reading fixture file");
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}
