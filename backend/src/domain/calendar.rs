//! Calendar domain logic.
//!
//! This module builds the month grid the UI renders: a fixed 42-cell (six
//! week) sequence starting from the Sunday on or before the first of the
//! month. The UI should only handle presentation; "today" is always passed
//! in by the caller, nothing here reads the clock.
//!
//! A month whose 42-day window would run past either end of chrono's date
//! range has no grid. Such dates are rejected with
//! [`CalendarError::OutOfRange`] rather than producing a short grid.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use shared::{CalendarGrid, DayCell};

use crate::domain::models::event::format_date;
use crate::error::CalendarError;

/// Number of cells in a month grid (six weeks)
pub const GRID_CELLS: usize = 42;

/// Calendar service that handles month grid generation and date helpers
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the 42-cell grid for the month containing `reference`.
    ///
    /// Flags are computed at day granularity against `today`. Trailing cells
    /// can reach into the month after next for short months.
    pub fn build_month_grid(&self, reference: NaiveDate, today: NaiveDate) -> Result<CalendarGrid, CalendarError> {
        let (start, end) = self.grid_window(reference)?;
        debug!(
            "🗓️ Building grid for {}/{} from {} to {}",
            reference.month(),
            reference.year(),
            start,
            end
        );

        let cells = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| DayCell {
                date: format_date(day),
                day_of_month: day.day(),
                is_current_month: day.month() == reference.month() && day.year() == reference.year(),
                is_today: day == today,
                is_past: day < today,
            })
            .collect();

        Ok(CalendarGrid {
            month: reference.month(),
            year: reference.year(),
            cells,
        })
    }

    /// The Sunday on or before the first day of `reference`'s month
    pub fn grid_start(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let first_of_month = reference
            .checked_sub_days(Days::new(u64::from(reference.day0())))
            .ok_or(CalendarError::OutOfRange(reference))?;
        let leading_days = Days::new(u64::from(first_of_month.weekday().num_days_from_sunday()));
        first_of_month
            .checked_sub_days(leading_days)
            .ok_or(CalendarError::OutOfRange(reference))
    }

    /// First and last date of the grid for `reference`'s month
    pub fn grid_window(&self, reference: NaiveDate) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        let start = self.grid_start(reference)?;
        let end = start
            .checked_add_days(Days::new(GRID_CELLS as u64 - 1))
            .ok_or(CalendarError::OutOfRange(reference))?;
        Ok((start, end))
    }

    /// Whether `date`'s month can be shown as a full grid
    pub fn is_displayable(&self, date: NaiveDate) -> bool {
        self.grid_window(date).is_ok()
    }

    /// The leading slice of a grid shown by the sidebar mini calendar
    pub fn mini_calendar<'a>(&self, grid: &'a CalendarGrid, cells: usize) -> &'a [DayCell] {
        &grid.cells[..cells.min(grid.cells.len())]
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Column headers for a Sunday-first grid
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        ["S", "M", "T", "W", "T", "F", "S"]
    }

    /// Format a date for display, e.g. "March 15, 2024"
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", self.month_name(date.month()), date.day(), date.year())
    }

    /// Format a date with its weekday, e.g. "Friday, March 15, 2024"
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        format!("{}, {}", date.format("%A"), self.format_date_for_display(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Months, Weekday};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn grid(reference: NaiveDate, today: NaiveDate) -> CalendarGrid {
        CalendarService::new().build_month_grid(reference, today).unwrap()
    }

    fn cell_date(cell: &DayCell) -> NaiveDate {
        NaiveDate::parse_from_str(&cell.date, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_march_2024_example() {
        let service = CalendarService::new();
        let grid = grid(date(2024, 3, 15), date(2024, 3, 15));

        assert_eq!(grid.month, 3);
        assert_eq!(grid.year, 2024);
        // March 1, 2024 is a Friday, so the grid opens on the Sunday before it
        assert_eq!(grid.cells[0].date, "2024-02-25");
        assert_eq!(service.grid_start(date(2024, 3, 15)), Ok(date(2024, 2, 25)));
        assert_eq!(grid.cells[5].date, "2024-03-01");
        assert!(!grid.cells[4].is_current_month);
        assert_eq!(grid.cells[19].date, "2024-03-15");
        assert!(grid.cells[19].is_current_month);
        assert!(grid.cells[19].is_today);
    }

    #[test]
    fn test_grid_always_has_42_contiguous_cells() {
        let today = date(2024, 6, 1);

        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let grid = grid(date(year, month, 10), today);
                assert_eq!(grid.cells.len(), GRID_CELLS);

                let dates: Vec<NaiveDate> = grid.cells.iter().map(cell_date).collect();
                assert_eq!(dates[7] - dates[0], Duration::days(7));
                for pair in dates.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
                assert_eq!(dates[0].weekday().num_days_from_sunday(), 0);

                let first = date(year, month, 1);
                let days_in_month = (first.checked_add_months(Months::new(1)).unwrap() - first).num_days();
                let in_month = grid.cells.iter().filter(|c| c.is_current_month).count() as i64;
                assert_eq!(in_month, days_in_month);
            }
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // September 1, 2024 is a Sunday
        let grid = grid(date(2024, 9, 20), date(2024, 9, 20));

        assert_eq!(grid.cells[0].date, "2024-09-01");
        assert!(grid.cells[0].is_current_month);
        assert_eq!(grid.cells[0].day_of_month, 1);
    }

    #[test]
    fn test_short_february_fills_two_weeks_of_march() {
        // February 2015 starts on a Sunday and has 28 days: 14 trailing cells
        let grid = grid(date(2015, 2, 1), date(2015, 2, 1));

        assert_eq!(grid.cells[0].date, "2015-02-01");
        assert_eq!(grid.cells[28].date, "2015-03-01");
        assert_eq!(grid.cells[41].date, "2015-03-14");
        assert!(!grid.cells[41].is_current_month);
    }

    #[test]
    fn test_today_and_past_flags() {
        let today = date(2024, 3, 15);
        let grid = grid(date(2024, 3, 1), today);

        assert_eq!(grid.cells.iter().filter(|c| c.is_today).count(), 1);
        for cell in &grid.cells {
            let day = cell_date(cell);
            assert_eq!(cell.is_past, day < today);
            assert_eq!(cell.is_today, day == today);
        }
    }

    #[test]
    fn test_today_outside_window_is_never_flagged() {
        let grid = grid(date(2024, 3, 1), date(2025, 1, 1));

        assert_eq!(grid.cells.iter().filter(|c| c.is_today).count(), 0);
        assert!(grid.cells.iter().all(|c| c.is_past));
    }

    #[test]
    fn test_mini_calendar_takes_leading_cells() {
        let service = CalendarService::new();
        let grid = grid(date(2024, 3, 15), date(2024, 3, 15));

        let mini = service.mini_calendar(&grid, 35);
        assert_eq!(mini.len(), 35);
        assert_eq!(mini[0], grid.cells[0]);
        assert_eq!(service.mini_calendar(&grid, 100).len(), GRID_CELLS);
    }

    #[test]
    fn test_last_month_of_the_calendar_is_rejected() {
        let service = CalendarService::new();
        let last = NaiveDate::MAX;

        // December always spills into January, which does not exist here
        assert_eq!(service.build_month_grid(last, last), Err(CalendarError::OutOfRange(last)));
        assert!(!service.is_displayable(last));

        let november = date(last.year(), 11, 30);
        assert!(service.is_displayable(november));
        assert_eq!(grid(november, november).cells.len(), GRID_CELLS);
    }

    #[test]
    fn test_first_month_of_the_calendar_never_panics() {
        let service = CalendarService::new();
        let first = NaiveDate::MIN;

        match service.build_month_grid(first, first) {
            Ok(month) => {
                assert_eq!(first.weekday(), Weekday::Sun);
                assert_eq!(month.cells.len(), GRID_CELLS);
            }
            Err(error) => {
                assert_ne!(first.weekday(), Weekday::Sun);
                assert_eq!(error, CalendarError::OutOfRange(first));
            }
        }

        // March 1 is at least 59 days in, so its leading week always fits
        assert!(service.is_displayable(date(first.year(), 3, 10)));
    }

    #[test]
    fn test_formatting() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(6), "June");
        assert_eq!(service.month_name(13), "Invalid Month");
        assert_eq!(service.format_date_for_display(date(2024, 3, 15)), "March 15, 2024");
        assert_eq!(service.format_long_date(date(2024, 3, 15)), "Friday, March 15, 2024");
        assert_eq!(service.weekday_labels().len(), 7);
    }
}
