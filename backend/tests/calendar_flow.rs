use calendar_backend::domain::models::event::Event;
use calendar_backend::domain::{CalendarService, EventIndexService, TimeAxisLayout};
use calendar_backend::io::mappers::EventMapper;
use calendar_backend::{AppState, CalendarConfig, CalendarError};
use chrono::{Duration, NaiveDate, NaiveTime};
use shared::{CalendarView, CreateEventRequest, SearchEventsRequest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn event_at(id: &str, day: NaiveDate, time: &str, duration_minutes: u32) -> Event {
    Event {
        id: id.to_string(),
        title: id.to_string(),
        date: day,
        time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        duration_minutes,
        color: "#4F46E5".to_string(),
        description: None,
    }
}

fn request(title: &str, date: &str, time: &str, duration_minutes: u32) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        duration_minutes: Some(duration_minutes),
        color: None,
        description: Some(format!("About {}", title)),
    }
}

#[test]
fn grid_window_properties_hold_across_years() {
    let service = CalendarService::new();
    let mut reference = date(2023, 1, 1);
    let end = date(2025, 12, 31);

    while reference <= end {
        let today = reference + Duration::days(20);
        let grid = service.build_month_grid(reference, today).unwrap();
        assert_eq!(grid.cells.len(), 42);

        let first = NaiveDate::parse_from_str(&grid.cells[0].date, "%Y-%m-%d").unwrap();
        let last = NaiveDate::parse_from_str(&grid.cells[41].date, "%Y-%m-%d").unwrap();
        let eighth = NaiveDate::parse_from_str(&grid.cells[7].date, "%Y-%m-%d").unwrap();
        assert_eq!(eighth - first, Duration::days(7));
        assert_eq!(last - first, Duration::days(41));

        let today_count = grid.cells.iter().filter(|c| c.is_today).count();
        let expected = usize::from(today >= first && today <= last);
        assert_eq!(today_count, expected, "reference {}", reference);

        reference += Duration::days(9);
    }
}

#[test]
fn index_and_layout_reference_values() {
    let day = date(2024, 3, 15);
    let events = vec![
        event_at("ten", day, "10:00", 60),
        event_at("nine", day, "09:00", 60),
    ];

    let index = EventIndexService::new().index_by_date(&events);
    let ordered: Vec<&str> = index.events_on(day).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ordered, vec!["nine", "ten"]);
    assert!(EventIndexService::new().index_by_date(&[]).is_empty());

    let axis = TimeAxisLayout::default();
    let midnight = axis.layout_event(&event_at("m", day, "00:00", 30));
    assert_eq!(midnight.top_offset, 0.0);
    assert_eq!(midnight.height, 32.0);

    let late = axis.layout_event(&event_at("l", day, "23:50", 5));
    assert_eq!(late.height, 20.0);
}

#[test]
fn session_flow_through_app_state() {
    let today = date(2024, 3, 15);
    let mut app_state = AppState::new(CalendarConfig::default(), today);

    app_state.add_event(request("Design Review", "2024-03-15", "15:00", 45)).unwrap();
    app_state.add_event(request("Breakfast", "2024-03-15", "08:00", 30)).unwrap();
    app_state.add_event(request("Retro", "2024-03-20", "11:00", 60)).unwrap();
    app_state.add_event(request("Planning", "2024-03-11", "10:00", 60)).unwrap();

    match app_state.add_event(request("Broken", "2024-03-32", "10:00", 60)) {
        Err(CalendarError::Validation(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(app_state.events().len(), 4);

    // Month view
    assert_eq!(app_state.current_view_title(), "March 2024");
    let grid = app_state.month_grid().unwrap();
    let today_cell = grid.cells.iter().position(|c| c.is_today).unwrap();
    assert_eq!(grid.cells[today_cell].date, "2024-03-15");
    let preview = app_state.cell_preview(today);
    assert_eq!(preview.visible_events[0].title, "Breakfast");
    assert_eq!(preview.remaining_count, 0);

    // Week view
    app_state.set_view(CalendarView::Week);
    let week = app_state.time_axis_view().unwrap();
    assert_eq!(week.title, "Mar 10 - Mar 16, 2024");
    let monday = &week.columns[1];
    assert_eq!(monday.events[0].event.title, "Planning");
    assert!(monday.events[0].is_past);

    // Day view after stepping forward
    app_state.set_view(CalendarView::Day);
    app_state.navigate_next();
    assert!(app_state.day_view().columns[0].events.is_empty());
    app_state.navigate_today();
    let day = app_state.day_view();
    assert_eq!(day.columns[0].events.len(), 2);
    assert_eq!(day.columns[0].events[1].layout.top_offset, 960.0);
    assert_eq!(day.columns[0].events[1].layout.height, 48.0);

    // Schedule skips past dates
    let schedule = app_state.schedule();
    let dates: Vec<&str> = schedule.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-15", "2024-03-20"]);

    // Search
    let results = app_state.search(SearchEventsRequest { query: "RE".to_string() });
    let titles: Vec<&str> = results.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Breakfast", "Design Review", "Retro"]);
}

#[test]
fn calendar_edges_are_rejected_instead_of_truncated() {
    let mut app_state = AppState::new(CalendarConfig::default(), date(2024, 3, 15));

    assert!(matches!(
        app_state.set_focus_date(NaiveDate::MAX),
        Err(CalendarError::OutOfRange(_))
    ));
    assert_eq!(app_state.month_grid().unwrap().cells.len(), 42);

    let service = CalendarService::new();
    assert!(service.build_month_grid(NaiveDate::MAX, NaiveDate::MAX).is_err());
    if let Ok(grid) = service.build_month_grid(NaiveDate::MIN, NaiveDate::MIN) {
        assert_eq!(grid.cells.len(), 42);
    }
}

#[test]
fn dto_events_are_rejected_at_the_boundary() {
    let dto = shared::Event {
        id: "event::x".to_string(),
        title: "Bad".to_string(),
        date: "2024-3-15".to_string(),
        time: "09:00".to_string(),
        duration_minutes: 30,
        color: "#4F46E5".to_string(),
        description: None,
    };

    assert!(EventMapper::to_domain(dto).is_err());
}
