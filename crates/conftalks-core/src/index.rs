//! The in-memory event index.
//!
//! [`EventIndex`] is built once from two flat lists (events and talks),
//! links every talk to its owning event, and is read-only afterwards.
//! Every query hands back owned copies, so callers can never reach into
//! the index and change what later queries see.
//!
//! # Linking Rules
//!
//! - Events are keyed by their `ID`. A later event with the same `ID`
//!   replaces an earlier one.
//! - Talks are appended to their event in input order.
//! - A talk whose `event_id` names no event is dropped with a warning.
//!   Inconsistent fixture data never prevents the index from being built.

use std::collections::BTreeMap;

use conftalks_types::{Event, Talk};
use tracing::{debug, warn};

use crate::date::{days_after, format_event_date, parse_event_date};
use crate::error::{IndexError, ValidationError};

/// Read-only lookup structure over conference events and their talks.
///
/// Holds no interior mutability, so a single instance can be shared
/// across threads behind an [`Arc`](std::sync::Arc) without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    /// Events keyed by event ID, each carrying its linked talks.
    events: BTreeMap<String, Event>,
}

impl EventIndex {
    /// Build an index from optionally-present event and talk lists.
    ///
    /// An empty list is fine; an absent one is not. This is the entry
    /// point for data whose presence is only known at runtime (for
    /// example a fixture document with no `events` array).
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingInput`] if either list is `None`.
    pub fn new(events: Option<Vec<Event>>, talks: Option<Vec<Talk>>) -> Result<Self, IndexError> {
        let (Some(events), Some(talks)) = (events, talks) else {
            return Err(IndexError::MissingInput);
        };
        Ok(Self::build(events, talks))
    }

    /// Build an index from event and talk lists that are known to exist.
    ///
    /// Any talks already attached to the input events are discarded; the
    /// linked talk lists are derived from `talks` alone.
    pub fn build(events: Vec<Event>, talks: Vec<Talk>) -> Self {
        let mut by_id: BTreeMap<String, Event> = BTreeMap::new();
        for mut event in events {
            event.talks.clear();
            by_id.insert(event.id.clone(), event);
        }

        let mut linked: usize = 0;
        let mut dropped: usize = 0;
        for talk in talks {
            if let Some(event) = by_id.get_mut(&talk.event_id) {
                event.talks.push(talk);
                linked = linked.saturating_add(1);
            } else {
                warn!(
                    event_id = %talk.event_id,
                    title = %talk.title,
                    "event not found; dropping talk"
                );
                dropped = dropped.saturating_add(1);
            }
        }

        debug!(events = by_id.len(), linked, dropped, "event index built");

        Self { events: by_id }
    }

    /// Number of indexed events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the index holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of talks linked to some event.
    pub fn talk_count(&self) -> usize {
        self.events.values().map(|e| e.talks.len()).sum()
    }

    /// Every indexed event with its talks.
    ///
    /// Callers must not rely on the order of the returned events.
    pub fn list_events(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    /// The event with the given ID, including its talks.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] if no event has this ID.
    pub fn get_event(&self, id: &str) -> Result<Event, IndexError> {
        self.lookup(id).cloned()
    }

    /// All talks of the given event, in load order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotFound`] if no event has this ID.
    pub fn event_talks(&self, id: &str) -> Result<Vec<Talk>, IndexError> {
        Ok(self.lookup(id)?.talks.clone())
    }

    /// Talks held on the `day`-th day of the given event (day 1 is the
    /// start date).
    ///
    /// Checks run in a fixed order and the first failure wins: the day
    /// offset, then the event lookup, then the stored dates, then the
    /// event's end date. A talk matches when its `date` text equals the
    /// computed date formatted `DD/MM/YYYY`; a talk stored as `1/1/2010`
    /// never matches `01/01/2010`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DayOutOfRange`] if `day < 1`
    /// - [`IndexError::NotFound`] if no event has this ID
    /// - [`IndexError::DateParse`] if the event's start or end date is malformed
    /// - [`ValidationError::DayOverflow`] if the computed date is unrepresentable
    /// - [`ValidationError::AfterEventEnd`] if the computed date is after the end date
    pub fn filtered_talks(&self, id: &str, day: i64) -> Result<Vec<Talk>, IndexError> {
        if day < 1 {
            return Err(ValidationError::DayOutOfRange { day }.into());
        }

        let event = self.lookup(id)?;
        let start = parse_event_date(&event.date_start)?;
        let end = parse_event_date(&event.date_end)?;

        // Day 1 is the start date itself.
        let filtered = days_after(start, day.abs_diff(1)).ok_or_else(|| {
            ValidationError::DayOverflow {
                day,
                date_start: event.date_start.clone(),
            }
        })?;
        let search_date = format_event_date(filtered);

        if filtered > end {
            return Err(ValidationError::AfterEventEnd {
                filtered_date: search_date,
                date_end: event.date_end.clone(),
            }
            .into());
        }

        Ok(event
            .talks
            .iter()
            .filter(|talk| talk.date == search_date)
            .cloned()
            .collect())
    }

    fn lookup(&self, id: &str) -> Result<&Event, IndexError> {
        self.events.get(id).ok_or_else(|| IndexError::NotFound {
            id: id.to_owned(),
        })
    }
}
