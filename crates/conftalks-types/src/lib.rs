//! Shared type definitions for the conference talks server.
//!
//! Both the in-memory index and the HTTP layer speak these types. Field
//! names on the wire follow the fixture files (`ID`, `date_start`,
//! `event_id`, ...), and `TypeScript` bindings are generated with `ts-rs`
//! for API consumers.
//!
//! # Modules
//!
//! - [`structs`] -- [`Event`] and [`Talk`] records
//! - [`envelopes`] -- JSON response wrappers (`{"events": [...]}`, `{"talks": [...]}`)

pub mod envelopes;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use envelopes::{ErrorBody, Events, Talks};
pub use structs::{Event, Talk};
