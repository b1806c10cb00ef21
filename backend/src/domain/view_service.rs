//! Assembles the day, week and schedule views from the event list.
//!
//! Each call re-indexes the events it is given; nothing is cached between
//! calls.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarView, DayColumn, PositionedEvent, ScheduleDay, TimeAxisView};

use crate::domain::calendar::CalendarService;
use crate::domain::event_index::{EventIndex, EventIndexService};
use crate::domain::models::event::{format_date, Event};
use crate::domain::navigation::NavigationService;
use crate::domain::time_axis::TimeAxisLayout;
use crate::io::mappers::EventMapper;

#[derive(Debug, Clone, Default)]
pub struct ViewService {
    layout: TimeAxisLayout,
    calendar_service: CalendarService,
    event_index_service: EventIndexService,
    navigation_service: NavigationService,
}

impl ViewService {
    pub fn new(layout: TimeAxisLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Single-column time axis for `focus`
    pub fn day_view(&self, focus: NaiveDate, today: NaiveDate, events: &[Event]) -> TimeAxisView {
        let title = self.navigation_service.title(CalendarView::Day, focus);
        self.time_axis_view(title, &[focus], today, events)
    }

    /// Seven Sunday-first columns for the week containing `focus`
    pub fn week_view(&self, focus: NaiveDate, today: NaiveDate, events: &[Event]) -> TimeAxisView {
        let title = self.navigation_service.title(CalendarView::Week, focus);
        let dates = self.navigation_service.week_range(focus);
        self.time_axis_view(title, &dates, today, events)
    }

    /// Agenda of every date from `today` onward that has events
    pub fn schedule(&self, today: NaiveDate, events: &[Event]) -> Vec<ScheduleDay> {
        let index = self.event_index_service.index_by_date(events);

        index
            .iter()
            .filter(|(date, _)| **date >= today)
            .map(|(date, day_events)| ScheduleDay {
                date: format_date(*date),
                formatted_date: self.calendar_service.format_long_date(*date),
                events: day_events.iter().map(EventMapper::to_dto).collect(),
            })
            .collect()
    }

    fn time_axis_view(
        &self,
        title: String,
        dates: &[NaiveDate],
        today: NaiveDate,
        events: &[Event],
    ) -> TimeAxisView {
        let index = match (dates.first(), dates.last()) {
            (Some(start), Some(end)) => {
                let all = self.event_index_service.index_by_date(events);
                self.event_index_service.events_in_range(&all, *start, *end)
            }
            _ => EventIndex::default(),
        };
        debug!("Laying out {} events for '{}'", index.event_count(), title);

        TimeAxisView {
            title,
            columns: dates.iter().map(|date| self.day_column(*date, today, &index)).collect(),
            axis_height: self.layout.axis_height(),
            hour_labels: self.layout.hour_labels(),
        }
    }

    fn day_column(&self, date: NaiveDate, today: NaiveDate, index: &EventIndex) -> DayColumn {
        let is_past = date < today;
        let events = index
            .events_on(date)
            .iter()
            .map(|event| PositionedEvent {
                event: EventMapper::to_dto(event),
                layout: self.layout.layout_event(event),
                is_past,
            })
            .collect();

        DayColumn {
            date: format_date(date),
            weekday_label: date.format("%a").to_string().to_uppercase(),
            day_of_month: date.day(),
            is_today: date == today,
            is_past,
            events,
        }
    }
}
