//! # App State Module
//!
//! The single owner of mutable calendar state: the event list, the current
//! view, the focus date and "today". The top-level controller holds one
//! `AppState` and passes it by reference to whatever renders; there is no
//! global instance.
//!
//! Derived data (grid, index, views) is recomputed on every call from the
//! current event list. The focus date only ever moves to dates whose month
//! has a full grid.

use chrono::{Days, NaiveDate, NaiveTime};
use log::{info, warn};
use shared::{
    CalendarGrid, CalendarView, CreateEventRequest, CreateEventResponse, DayCell, DayCellPreview,
    EventFormValidation, EventLayout, EventsByDate, ScheduleDay, SearchEventsRequest,
    SearchEventsResponse, TimeAxisView,
};

use crate::config::CalendarConfig;
use crate::domain::models::event::Event;
use crate::domain::{
    CalendarService, EventIndexService, EventService, NavigationService, SearchService,
    TimeAxisLayout, ViewService,
};
use crate::error::CalendarError;
use crate::io::mappers::EventMapper;

#[derive(Debug, Clone)]
pub struct AppState {
    config: CalendarConfig,
    events: Vec<Event>,
    current_view: CalendarView,
    focus_date: NaiveDate,
    today: NaiveDate,

    calendar_service: CalendarService,
    event_index_service: EventIndexService,
    event_service: EventService,
    search_service: SearchService,
    navigation_service: NavigationService,
    view_service: ViewService,
    layout: TimeAxisLayout,
}

impl AppState {
    /// Empty calendar focused on `today`, in month view
    pub fn new(config: CalendarConfig, today: NaiveDate) -> Self {
        let layout = TimeAxisLayout::from_config(&config);
        Self {
            event_service: EventService::with_config(config.clone()),
            view_service: ViewService::new(layout),
            layout,
            config,
            events: Vec::new(),
            current_view: CalendarView::default(),
            focus_date: today,
            today,
            calendar_service: CalendarService::new(),
            event_index_service: EventIndexService::new(),
            search_service: SearchService::new(),
            navigation_service: NavigationService::new(),
        }
    }

    /// Calendar seeded with the two demo events shown on first load
    pub fn with_sample_events(config: CalendarConfig, today: NaiveDate) -> Result<Self, CalendarError> {
        let mut state = Self::new(config, today);
        let three_days_ago = today
            .checked_sub_days(Days::new(3))
            .ok_or(CalendarError::OutOfRange(today))?;

        let samples = [
            ("Daily Standup", today, 9, 60, "#4F46E5", "Review the progress"),
            ("Project Sync (Past)", three_days_ago, 14, 90, "#059669", "Attend interviews."),
        ];
        for (title, date, hour, duration_minutes, color, description) in samples {
            let time = NaiveTime::from_hms_opt(hour, 0, 0)
                .ok_or_else(|| CalendarError::InvalidTime(format!("{:02}:00", hour)))?;
            state.events.push(Event {
                id: shared::Event::generate_id(uuid::Uuid::new_v4()),
                title: title.to_string(),
                date,
                time,
                duration_minutes,
                color: color.to_string(),
                description: Some(description.to_string()),
            });
        }

        Ok(state)
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn current_view(&self) -> CalendarView {
        self.current_view
    }

    pub fn focus_date(&self) -> NaiveDate {
        self.focus_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Advance the injected clock, e.g. when the UI notices midnight passed
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn set_view(&mut self, view: CalendarView) {
        info!("Switched view {:?} -> {:?}", self.current_view, view);
        self.current_view = view;
    }

    /// Jump to `date`; rejected when its month has no full grid
    pub fn set_focus_date(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        if !self.calendar_service.is_displayable(date) {
            warn!("Refusing focus date {} outside the displayable range", date);
            return Err(CalendarError::OutOfRange(date));
        }
        self.focus_date = date;
        Ok(())
    }

    pub fn navigate_previous(&mut self) -> NaiveDate {
        self.focus_date = self.navigation_service.previous(self.current_view, self.focus_date);
        info!("📅 Navigated back to {}", self.focus_date);
        self.focus_date
    }

    pub fn navigate_next(&mut self) -> NaiveDate {
        self.focus_date = self.navigation_service.next(self.current_view, self.focus_date);
        info!("📅 Navigated forward to {}", self.focus_date);
        self.focus_date
    }

    /// The "Today" button
    pub fn navigate_today(&mut self) -> NaiveDate {
        self.focus_date = self.today;
        self.focus_date
    }

    pub fn current_view_title(&self) -> String {
        self.navigation_service.title(self.current_view, self.focus_date)
    }

    /// Fails only when `today`, the initial focus, sits at the very edge of the calendar
    pub fn month_grid(&self) -> Result<CalendarGrid, CalendarError> {
        self.calendar_service.build_month_grid(self.focus_date, self.today)
    }

    pub fn mini_calendar(&self) -> Result<Vec<DayCell>, CalendarError> {
        let grid = self.month_grid()?;
        Ok(self
            .calendar_service
            .mini_calendar(&grid, self.config.mini_calendar_cells)
            .to_vec())
    }

    pub fn events_by_date(&self) -> EventsByDate {
        let index = self.event_index_service.index_by_date(&self.events);
        EventMapper::to_events_by_date(&index)
    }

    pub fn cell_preview(&self, date: NaiveDate) -> DayCellPreview {
        let index = self.event_index_service.index_by_date(&self.events);
        let preview = self
            .event_index_service
            .preview(&index, date, self.config.month_cell_preview_limit);
        EventMapper::to_preview_dto(preview)
    }

    pub fn validate_event_form(&self, request: &CreateEventRequest) -> EventFormValidation {
        let command = EventMapper::to_create_command(request.clone());
        self.event_service.validate_event_form(&command)
    }

    /// Validate and append a new event
    pub fn add_event(&mut self, request: CreateEventRequest) -> Result<CreateEventResponse, CalendarError> {
        let command = EventMapper::to_create_command(request);
        let event = self.event_service.create_event(command)?;
        let response = CreateEventResponse {
            event: EventMapper::to_dto(&event),
            success_message: self.event_service.success_message(&event),
        };

        self.events.push(event);
        info!("Calendar now holds {} events", self.events.len());
        Ok(response)
    }

    pub fn search(&self, request: SearchEventsRequest) -> SearchEventsResponse {
        let query = EventMapper::to_search_query(request);
        let events = self
            .search_service
            .search(&self.events, &query)
            .iter()
            .map(EventMapper::to_dto)
            .collect();

        SearchEventsResponse {
            query: query.query,
            events,
        }
    }

    pub fn day_view(&self) -> TimeAxisView {
        self.view_service.day_view(self.focus_date, self.today, &self.events)
    }

    pub fn week_view(&self) -> TimeAxisView {
        self.view_service.week_view(self.focus_date, self.today, &self.events)
    }

    /// Time axis for the current view; `None` for month and schedule
    pub fn time_axis_view(&self) -> Option<TimeAxisView> {
        match self.current_view {
            CalendarView::Day => Some(self.day_view()),
            CalendarView::Week => Some(self.week_view()),
            CalendarView::Month | CalendarView::Schedule => None,
        }
    }

    pub fn schedule(&self) -> Vec<ScheduleDay> {
        self.view_service.schedule(self.today, &self.events)
    }

    pub fn layout_event(&self, event: &Event) -> EventLayout {
        self.layout.layout_event(event)
    }
}
