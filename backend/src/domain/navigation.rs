//! Previous / next / today navigation for each calendar view.
//!
//! A step never lands on a date whose month has no full grid; at either end
//! of the calendar the focus date stays where it is.

use chrono::{Datelike, Days, Months, NaiveDate};
use shared::CalendarView;

use crate::domain::calendar::CalendarService;

#[derive(Debug, Clone, Default)]
pub struct NavigationService {
    calendar_service: CalendarService,
}

impl NavigationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step back one unit of `view`: a day, a week, or a month
    pub fn previous(&self, view: CalendarView, focus: NaiveDate) -> NaiveDate {
        let step = match view {
            CalendarView::Day => focus.pred_opt(),
            CalendarView::Week => focus.checked_sub_days(Days::new(7)),
            // Day of month is clamped, e.g. March 31 -> February 29
            CalendarView::Month | CalendarView::Schedule => focus.checked_sub_months(Months::new(1)),
        };
        self.landing(step, focus)
    }

    /// Step forward one unit of `view`
    pub fn next(&self, view: CalendarView, focus: NaiveDate) -> NaiveDate {
        let step = match view {
            CalendarView::Day => focus.succ_opt(),
            CalendarView::Week => focus.checked_add_days(Days::new(7)),
            CalendarView::Month | CalendarView::Schedule => focus.checked_add_months(Months::new(1)),
        };
        self.landing(step, focus)
    }

    fn landing(&self, step: Option<NaiveDate>, focus: NaiveDate) -> NaiveDate {
        step.filter(|date| self.calendar_service.is_displayable(*date))
            .unwrap_or(focus)
    }

    /// The seven dates of the Sunday-first week containing `focus`
    pub fn week_range(&self, focus: NaiveDate) -> Vec<NaiveDate> {
        let offset = u64::from(focus.weekday().num_days_from_sunday());
        focus
            .checked_sub_days(Days::new(offset))
            .unwrap_or(focus)
            .iter_days()
            .take(7)
            .collect()
    }

    /// Header text for the current view and focus date
    pub fn title(&self, view: CalendarView, focus: NaiveDate) -> String {
        match view {
            CalendarView::Month | CalendarView::Schedule => {
                format!("{} {}", self.calendar_service.month_name(focus.month()), focus.year())
            }
            CalendarView::Day => self.calendar_service.format_long_date(focus),
            CalendarView::Week => {
                let week = self.week_range(focus);
                match (week.first(), week.last()) {
                    (Some(start), Some(end)) => self.week_title(*start, *end),
                    _ => self.calendar_service.format_date_for_display(focus),
                }
            }
        }
    }

    fn week_title(&self, start: NaiveDate, end: NaiveDate) -> String {
        if start.year() == end.year() {
            format!("{} - {}, {}", start.format("%b %-d"), end.format("%b %-d"), end.year())
        } else {
            format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
    }
}
