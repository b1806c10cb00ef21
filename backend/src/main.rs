//! Prints a text preview of the calendar: the month grid for a focus date and
//! the upcoming schedule.
//!
//! Usage: `calendar-preview [YYYY-MM-DD] [--json]`
//! Set `CALENDAR_CONFIG` to a YAML file to override layout defaults.

use anyhow::{Context, Result};
use calendar_backend::domain::models::event::parse_date;
use calendar_backend::domain::CalendarService;
use calendar_backend::{initialize_backend, AppState, CalendarConfig};
use chrono::Local;
use log::info;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::var_os("CALENDAR_CONFIG") {
        Some(path) => CalendarConfig::load(&PathBuf::from(path))?,
        None => CalendarConfig::default(),
    };

    // The one clock read; everything below receives it explicitly
    let today = Local::now().date_naive();
    let mut app_state = initialize_backend(config, today).context("Failed to set up the calendar")?;

    let mut as_json = false;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else {
            let focus = parse_date(&arg).with_context(|| format!("Invalid focus date argument '{}'", arg))?;
            app_state
                .set_focus_date(focus)
                .with_context(|| format!("Cannot show the month of {}", focus))?;
        }
    }

    if as_json {
        let grid = app_state.month_grid()?;
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    print_month(&app_state)?;
    print_schedule(&app_state);
    Ok(())
}

fn print_month(app_state: &AppState) -> Result<()> {
    info!("Rendering month preview for {}", app_state.focus_date());
    let grid = app_state.month_grid()?;
    let index = app_state.events_by_date();

    println!("{}", app_state.current_view_title());
    let labels = CalendarService::new().weekday_labels();
    println!("{}", labels.map(|d| format!("{:>4}", d)).join(""));

    for week in grid.cells.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| {
                let marker = if cell.is_today {
                    '*'
                } else if !index.events_on(&cell.date).is_empty() {
                    '+'
                } else {
                    ' '
                };
                if cell.is_current_month {
                    format!("{:>3}{}", cell.day_of_month, marker)
                } else {
                    format!("{:>3}{}", ".", marker)
                }
            })
            .collect();
        println!("{}", row);
    }
    println!();
    Ok(())
}

fn print_schedule(app_state: &AppState) {
    println!("Upcoming");
    let schedule = app_state.schedule();
    if schedule.is_empty() {
        println!("  (nothing scheduled)");
    }
    for day in schedule {
        println!("  {}", day.formatted_date);
        for event in day.events {
            println!("    {}  {} ({} min)", event.time, event.title, event.duration_minutes);
        }
    }
}
