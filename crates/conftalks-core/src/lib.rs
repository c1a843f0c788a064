//! Event indexing and day filtering for the conference talks server.
//!
//! This crate knows nothing about HTTP or JSON. It takes already-parsed
//! event and talk lists, links them into an [`EventIndex`], and answers
//! queries against it:
//!
//! - [`EventIndex::list_events`] -- every event with its talks
//! - [`EventIndex::get_event`] -- one event by ID
//! - [`EventIndex::event_talks`] -- all talks of one event
//! - [`EventIndex::filtered_talks`] -- talks held on the n-th day of an event
//!
//! The index is immutable once built and is safe to share across threads.

pub mod date;
pub mod error;
pub mod index;

pub use error::{IndexError, ValidationError};
pub use index::EventIndex;
