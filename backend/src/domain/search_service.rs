use log::debug;

use crate::domain::commands::events::SearchEventsQuery;
use crate::domain::models::event::Event;

/// Backs the search dialog: case-insensitive match on title and description
#[derive(Debug, Clone, Default)]
pub struct SearchService;

impl SearchService {
    pub fn new() -> Self {
        Self
    }

    /// Matching events ordered by start; a blank query matches nothing
    pub fn search(&self, events: &[Event], query: &SearchEventsQuery) -> Vec<Event> {
        let needle = query.query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<Event> = events
            .iter()
            .filter(|event| Self::matches(event, &needle))
            .cloned()
            .collect();
        matches.sort_by_key(Event::starts_at);

        debug!("Search '{}' matched {} of {} events", needle, matches.len(), events.len());
        matches
    }

    fn matches(event: &Event, needle: &str) -> bool {
        event.title.to_lowercase().contains(needle)
            || event
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
