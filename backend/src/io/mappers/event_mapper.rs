//! backend/src/io/mappers/event_mapper.rs

use anyhow::{Context, Result};
use shared::{
    CreateEventRequest, DayCellPreview, Event as SharedEvent, EventsByDate, SearchEventsRequest,
};

use crate::domain::commands::events::{CreateEventCommand, SearchEventsQuery};
use crate::domain::event_index::{CellPreview, EventIndex};
use crate::domain::models::event::{
    check_duration, format_date, format_time, is_valid_color, parse_date, parse_time,
    Event as DomainEvent,
};
use crate::error::CalendarError;

/// Mapper to convert between shared Event DTOs and domain Event models.
pub struct EventMapper;

impl EventMapper {
    /// Converts a shared Event DTO to a domain Event, rejecting malformed fields.
    pub fn to_domain(dto: SharedEvent) -> Result<DomainEvent> {
        let date = parse_date(&dto.date)
            .with_context(|| format!("Failed to parse date of event {}", dto.id))?;
        let time = parse_time(&dto.time)
            .with_context(|| format!("Failed to parse time of event {}", dto.id))?;
        let duration_minutes = check_duration(dto.duration_minutes)
            .with_context(|| format!("Invalid duration for event {}", dto.id))?;
        if !is_valid_color(&dto.color) {
            return Err(CalendarError::InvalidColor(dto.color))
                .with_context(|| format!("Invalid color for event {}", dto.id));
        }

        Ok(DomainEvent {
            id: dto.id,
            title: dto.title,
            date,
            time,
            duration_minutes,
            color: dto.color,
            description: dto.description,
        })
    }

    /// Converts a domain Event to a shared Event DTO.
    pub fn to_dto(domain: &DomainEvent) -> SharedEvent {
        SharedEvent {
            id: domain.id.clone(),
            title: domain.title.clone(),
            date: format_date(domain.date),
            time: format_time(domain.time),
            duration_minutes: domain.duration_minutes,
            color: domain.color.clone(),
            description: domain.description.clone(),
        }
    }

    pub fn to_events_by_date(index: &EventIndex) -> EventsByDate {
        EventsByDate {
            buckets: index
                .iter()
                .map(|(date, events)| (format_date(*date), events.iter().map(Self::to_dto).collect()))
                .collect(),
        }
    }

    pub fn to_preview_dto(preview: CellPreview) -> DayCellPreview {
        DayCellPreview {
            visible_events: preview.visible_events.iter().map(Self::to_dto).collect(),
            remaining_count: preview.remaining_count,
        }
    }

    pub fn to_create_command(request: CreateEventRequest) -> CreateEventCommand {
        CreateEventCommand {
            title: request.title,
            date: request.date,
            time: request.time,
            duration_minutes: request.duration_minutes,
            color: request.color,
            description: request.description,
        }
    }

    pub fn to_search_query(request: SearchEventsRequest) -> SearchEventsQuery {
        SearchEventsQuery { query: request.query }
    }
}
