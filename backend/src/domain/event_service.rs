//! Add-event form logic.
//!
//! Validates the raw form input, fills in configured defaults, and produces
//! immutable domain events. Creating an event is the only mutation the
//! calendar supports; the caller appends the result to its event list.
//!
//! ## Business Rules
//!
//! - Title is required and limited to `max_title_length` characters
//! - Date must be `YYYY-MM-DD`, time must be 24h `HH:MM`
//! - Duration is 1 to 1440 minutes, defaulting to `default_duration_minutes`
//! - Color is `#RRGGBB`, defaulting to `default_event_color`
//! - Blank descriptions are dropped

use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use shared::{EventFormValidation, EventValidationError};
use uuid::Uuid;

use crate::config::CalendarConfig;
use crate::domain::commands::events::CreateEventCommand;
use crate::domain::models::event::{
    is_valid_color, parse_date, parse_time, Event, MAX_DURATION_MINUTES,
};
use crate::error::CalendarError;

/// Form fields after parsing, ready to become an event
struct CheckedEvent {
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
    color: String,
    description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EventService {
    config: CalendarConfig,
}

impl Default for EventService {
    fn default() -> Self {
        Self::new()
    }
}

impl EventService {
    pub fn new() -> Self {
        Self {
            config: CalendarConfig::default(),
        }
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Validate the add-event form, collecting every problem at once
    pub fn validate_event_form(&self, command: &CreateEventCommand) -> EventFormValidation {
        let errors = match self.check(command) {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        };

        EventFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Create a new event from validated form input
    pub fn create_event(&self, command: CreateEventCommand) -> Result<Event, CalendarError> {
        let checked = self.check(&command).map_err(|errors| {
            warn!("Rejected event '{}': {} validation errors", command.title, errors.len());
            CalendarError::Validation(errors)
        })?;

        let event = Event {
            id: shared::Event::generate_id(Uuid::new_v4()),
            title: checked.title,
            date: checked.date,
            time: checked.time,
            duration_minutes: checked.duration_minutes,
            color: checked.color,
            description: checked.description,
        };

        info!("📅 Created event {} '{}' on {} at {}", event.id, event.title, event.date, event.time);
        Ok(event)
    }

    pub fn success_message(&self, event: &Event) -> String {
        format!("'{}' added to your calendar", event.title)
    }

    fn check(&self, command: &CreateEventCommand) -> Result<CheckedEvent, Vec<EventValidationError>> {
        let mut errors = Vec::new();

        let title = command.title.trim();
        let title_length = title.chars().count();
        if title.is_empty() {
            errors.push(EventValidationError::EmptyTitle);
        } else if title_length > self.config.max_title_length {
            errors.push(EventValidationError::TitleTooLong(title_length));
        }

        let date = match parse_date(command.date.trim()) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(EventValidationError::InvalidDate(command.date.clone()));
                None
            }
        };

        let time = match parse_time(command.time.trim()) {
            Ok(time) => Some(time),
            Err(_) => {
                errors.push(EventValidationError::InvalidTime(command.time.clone()));
                None
            }
        };

        let duration_minutes = command
            .duration_minutes
            .unwrap_or(self.config.default_duration_minutes);
        if duration_minutes == 0 {
            errors.push(EventValidationError::DurationNotPositive);
        } else if duration_minutes > MAX_DURATION_MINUTES {
            errors.push(EventValidationError::DurationTooLong(duration_minutes));
        }

        let color = match command.color.as_deref().map(str::trim) {
            None | Some("") => self.config.default_event_color.clone(),
            Some(color) => {
                if !is_valid_color(color) {
                    errors.push(EventValidationError::InvalidColor(color.to_string()));
                }
                color.to_string()
            }
        };

        let description = command
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        if let Some(description) = &description {
            let length = description.chars().count();
            if length > self.config.max_description_length {
                errors.push(EventValidationError::DescriptionTooLong(length));
            }
        }

        match (date, time) {
            (Some(date), Some(time)) if errors.is_empty() => Ok(CheckedEvent {
                title: title.to_string(),
                date,
                time,
                duration_minutes,
                color,
                description,
            }),
            _ => Err(errors),
        }
    }
}
