//! Positioning of timed events on the 24-hour vertical axis of the day and
//! week views.
//!
//! Overlapping events are not split into side-by-side columns; they share
//! the same absolutely positioned layer.

use chrono::{NaiveTime, Timelike};
use shared::EventLayout;

use crate::config::CalendarConfig;
use crate::domain::models::event::Event;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxisLayout {
    pixels_per_hour: f64,
    minimum_height: f64,
}

impl Default for TimeAxisLayout {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

impl TimeAxisLayout {
    pub fn new(pixels_per_hour: f64, minimum_height: f64) -> Self {
        Self {
            pixels_per_hour,
            minimum_height,
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.pixels_per_hour, config.minimum_event_height)
    }

    /// Top offset and height of `event`, with the height floored at the minimum
    pub fn layout_event(&self, event: &Event) -> EventLayout {
        let top_offset = self.minutes_to_pixels(event.minutes_since_midnight());
        let height = self
            .minutes_to_pixels(event.duration_minutes)
            .max(self.minimum_height);

        EventLayout { top_offset, height }
    }

    /// Total height of the 24-hour axis
    pub fn axis_height(&self) -> f64 {
        self.minutes_to_pixels(MINUTES_PER_DAY)
    }

    /// Offset of the "now" indicator line
    pub fn current_time_offset(&self, now: NaiveTime) -> f64 {
        self.minutes_to_pixels(now.hour() * 60 + now.minute())
    }

    /// "12 AM", "1 AM", ... "11 PM"
    pub fn hour_labels(&self) -> Vec<String> {
        (0..24u32)
            .map(|hour| {
                let suffix = if hour < 12 { "AM" } else { "PM" };
                let display = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{} {}", display, suffix)
            })
            .collect()
    }

    fn minutes_to_pixels(&self, minutes: u32) -> f64 {
        f64::from(minutes) * self.pixels_per_hour / 60.0
    }
}
