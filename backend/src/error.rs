use chrono::NaiveDate;
use shared::EventValidationError;

/// Errors raised when calendar input does not meet its preconditions.
///
/// The grid, index and layout operations never fail on well-formed input;
/// these errors are produced at the boundary where strings become domain
/// values, so malformed data is rejected instead of being normalized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid duration of {0} minutes, expected 1 to 1440")]
    InvalidDuration(u32),
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
    #[error("Date {0} is too close to the end of the calendar to show its month")]
    OutOfRange(NaiveDate),
    #[error("Event failed validation: {}", join_errors(.0))]
    Validation(Vec<EventValidationError>),
}

fn join_errors(errors: &[EventValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
