use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::domain::calendar::CalendarService;
use crate::error::CalendarError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Longest accepted event, in minutes
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// A calendar event as the domain sees it: date and time already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub color: String,
    pub description: Option<String>,
}

impl Event {
    /// Combined (date, time) instant used for ordering
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.time.hour() * 60 + self.time.minute()
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// Non-canonical spellings such as `2024-3-5` are rejected so that a date
/// always has exactly one string form. Dates whose month cannot be shown as
/// a full grid are rejected as out of range.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == input)
        .ok_or_else(|| CalendarError::InvalidDate(input.to_string()))?;

    if !CalendarService::new().is_displayable(date) {
        return Err(CalendarError::OutOfRange(date));
    }
    Ok(date)
}

/// Parse a strict 24h `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(input, TIME_FORMAT)
        .ok()
        .filter(|time| format_time(*time) == input)
        .ok_or_else(|| CalendarError::InvalidTime(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `#RRGGBB`, hex digits in either case
pub fn is_valid_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn check_duration(minutes: u32) -> Result<u32, CalendarError> {
    if minutes == 0 || minutes > MAX_DURATION_MINUTES {
        return Err(CalendarError::InvalidDuration(minutes));
    }
    Ok(minutes)
}
