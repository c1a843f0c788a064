//! Error types for the `conftalks-core` crate.
//!
//! All fallible index operations return [`IndexError`]. Caller-correctable
//! problems with a requested day live in the nested [`ValidationError`].
//! The `Display` text of each variant is part of the API contract: the
//! HTTP layer forwards it verbatim in error bodies.

/// Errors produced while building or querying an [`EventIndex`].
///
/// [`EventIndex`]: crate::index::EventIndex
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The events or talks sequence was absent at construction time.
    #[error("cannot build event index with missing events or talks")]
    MissingInput,

    /// No event is indexed under the requested identifier.
    #[error("no event for id {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The requested day cannot be served for this event.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stored event date is not a zero-padded `DD/MM/YYYY` date.
    #[error("cannot parse date {value:?} as DD/MM/YYYY: {reason}")]
    DateParse {
        /// The offending date text.
        value: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Rejections of a caller-supplied day offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Day offsets are 1-based, so any day below 1 is rejected (day 1
    /// itself is valid despite the message text).
    #[error("day must be > 1, but was {day}")]
    DayOutOfRange {
        /// The rejected day.
        day: i64,
    },

    /// The requested day falls after the event has finished.
    #[error("filtered date {filtered_date} is after event end date {date_end}")]
    AfterEventEnd {
        /// The computed date, formatted `DD/MM/YYYY`.
        filtered_date: String,
        /// The event's stored end date.
        date_end: String,
    },

    /// The requested day lies outside the representable calendar.
    #[error("day {day} is out of range for event starting {date_start}")]
    DayOverflow {
        /// The rejected day.
        day: i64,
        /// The event's stored start date.
        date_start: String,
    },
}
