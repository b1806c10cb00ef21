//! Event indexing by calendar date.
//!
//! Events are bucketed by their own date and ordered by start time inside a
//! bucket. The sort is stable: two events starting at the same instant keep
//! their input order. The index is re-derived from the event list whenever
//! the list changes; it is never patched in place.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

use crate::domain::models::event::Event;

/// Date-keyed, time-ordered view over a list of events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    buckets: BTreeMap<NaiveDate, Vec<Event>>,
}

impl EventIndex {
    /// Events on `date`; a missing date simply has no events
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Event>)> {
        self.buckets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// First few events of a day plus how many did not fit
#[derive(Debug, Clone, PartialEq)]
pub struct CellPreview {
    pub visible_events: Vec<Event>,
    pub remaining_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EventIndexService;

impl EventIndexService {
    pub fn new() -> Self {
        Self
    }

    /// Bucket `events` by date and order each bucket by (date, time)
    pub fn index_by_date(&self, events: &[Event]) -> EventIndex {
        let mut buckets: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();

        for event in events {
            buckets.entry(event.date).or_default().push(event.clone());
        }

        for bucket in buckets.values_mut() {
            // sort_by_key is stable, ties keep input order
            bucket.sort_by_key(Event::starts_at);
        }

        debug!("Indexed {} events across {} dates", events.len(), buckets.len());
        EventIndex { buckets }
    }

    /// Restrict an index to the inclusive range `start..=end`
    pub fn events_in_range(&self, index: &EventIndex, start: NaiveDate, end: NaiveDate) -> EventIndex {
        if end < start {
            return EventIndex::default();
        }

        let buckets = index
            .buckets
            .range(start..=end)
            .map(|(date, events)| (*date, events.clone()))
            .collect();

        EventIndex { buckets }
    }

    /// What a month cell shows for `date`: up to `limit` events and the overflow count
    pub fn preview(&self, index: &EventIndex, date: NaiveDate, limit: usize) -> CellPreview {
        let events = index.events_on(date);
        let visible_events: Vec<Event> = events.iter().take(limit).cloned().collect();
        let remaining_count = events.len() - visible_events.len();

        CellPreview {
            visible_events,
            remaining_count,
        }
    }
}
