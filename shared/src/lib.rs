use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Event ID in format: "event::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Start time, 24h clock (HH:MM)
    pub time: String,
    /// Length of the event in minutes (always positive)
    pub duration_minutes: u32,
    /// Display color tag (#RRGGBB)
    pub color: String,
    pub description: Option<String>,
}

/// The calendar views offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    #[default]
    Month,
    Schedule,
}

/// Represents a single cell of the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub day_of_month: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    /// Strictly before today, at day granularity
    pub is_past: bool,
}

/// A month grid: always 42 cells (6 weeks) starting on a Sunday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub month: u32,
    pub year: i32,
    pub cells: Vec<DayCell>,
}

/// Events bucketed by their date, each bucket ordered by start time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventsByDate {
    pub buckets: BTreeMap<String, Vec<Event>>,
}

impl EventsByDate {
    /// Events on the given date; a missing date means no events
    pub fn events_on(&self, date: &str) -> &[Event] {
        self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of events across all dates
    pub fn event_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Vertical placement of an event on the 24-hour time axis, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    pub top_offset: f64,
    pub height: f64,
}

/// What a month cell shows: the first few events plus a "+N more" count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCellPreview {
    pub visible_events: Vec<Event>,
    pub remaining_count: usize,
}

/// An event placed on the time axis of a day or week view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub layout: EventLayout,
    /// Rendered at reduced opacity when set
    pub is_past: bool,
}

/// One day column of a day or week view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: String,
    pub weekday_label: String,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_past: bool,
    pub events: Vec<PositionedEvent>,
}

/// Day view (one column) or week view (seven columns)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisView {
    pub title: String,
    pub columns: Vec<DayColumn>,
    pub axis_height: f64,
    pub hour_labels: Vec<String>,
}

/// One date heading of the schedule (agenda) view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: String,
    /// e.g., "Friday, March 15, 2024"
    pub formatted_date: String,
    pub events: Vec<Event>,
}

/// Submitted by the add-event form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Start time (HH:MM)
    pub time: String,
    /// Uses the configured default when not provided
    pub duration_minutes: Option<u32>,
    /// Uses the configured default when not provided
    pub color: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub event: Event,
    pub success_message: String,
}

/// Validation result for the add-event form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFormValidation {
    pub is_valid: bool,
    pub errors: Vec<EventValidationError>,
}

/// Specific validation errors for the add-event form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    InvalidDate(String),
    InvalidTime(String),
    DurationNotPositive,
    DurationTooLong(u32),
    InvalidColor(String),
    DescriptionTooLong(usize),
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventValidationError::EmptyTitle => write!(f, "Please enter a title"),
            EventValidationError::TitleTooLong(len) => write!(f, "Title is too long ({} characters)", len),
            EventValidationError::InvalidDate(date) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", date),
            EventValidationError::InvalidTime(time) => write!(f, "Invalid time '{}', expected HH:MM", time),
            EventValidationError::DurationNotPositive => write!(f, "Duration must be greater than 0 minutes"),
            EventValidationError::DurationTooLong(minutes) => {
                write!(f, "Duration of {} minutes is longer than a day", minutes)
            }
            EventValidationError::InvalidColor(color) => write!(f, "Invalid color '{}', expected #RRGGBB", color),
            EventValidationError::DescriptionTooLong(len) => {
                write!(f, "Description is too long ({} characters)", len)
            }
        }
    }
}

/// Request for the search dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEventsRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEventsResponse {
    pub query: String,
    pub events: Vec<Event>,
}

impl Event {
    /// Generate an event ID from a unique token (a v4 UUID in practice)
    pub fn generate_id(token: impl fmt::Display) -> String {
        format!("event::{}", token)
    }

    /// Parse an event ID and return its unique token
    pub fn parse_id(id: &str) -> Result<&str, EventIdError> {
        match id.split_once("::") {
            Some(("event", token)) if !token.is_empty() && !token.contains("::") => Ok(token),
            _ => Err(EventIdError::InvalidFormat),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventIdError {
    InvalidFormat,
}

impl fmt::Display for EventIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventIdError::InvalidFormat => write!(f, "Invalid event ID format"),
        }
    }
}

impl std::error::Error for EventIdError {}
