//! Calendar configuration.
//!
//! Layout ratios, preview limits and add-event defaults. Every field has a
//! default, so a YAML file only needs to name the values it overrides:
//!
//! ```yaml
//! pixels_per_hour: 48.0
//! month_cell_preview_limit: 3
//! ```

use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::models::event::{is_valid_color, MAX_DURATION_MINUTES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Vertical pixels for one hour of the day/week time axis
    pub pixels_per_hour: f64,
    /// Floor applied to event heights so short events stay clickable
    pub minimum_event_height: f64,
    /// Events shown inside a month cell before the "+N more" badge
    pub month_cell_preview_limit: usize,
    /// Cells shown by the sidebar mini calendar
    pub mini_calendar_cells: usize,
    pub default_event_color: String,
    pub default_duration_minutes: u32,
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: 64.0,
            minimum_event_height: 20.0,
            month_cell_preview_limit: 2,
            mini_calendar_cells: 35,
            default_event_color: "#4F46E5".to_string(),
            default_duration_minutes: 60,
            max_title_length: 256,
            max_description_length: 1024,
        }
    }
}

impl CalendarConfig {
    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calendar config from {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("Invalid calendar config in {}", path.display()))?;
        info!("📋 Loaded calendar config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse calendar config YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0,
            "pixels_per_hour must be positive, got {}",
            self.pixels_per_hour
        );
        ensure!(
            self.minimum_event_height.is_finite() && self.minimum_event_height >= 0.0,
            "minimum_event_height must not be negative, got {}",
            self.minimum_event_height
        );
        ensure!(
            is_valid_color(&self.default_event_color),
            "default_event_color must be #RRGGBB, got '{}'",
            self.default_event_color
        );
        ensure!(
            (1..=MAX_DURATION_MINUTES).contains(&self.default_duration_minutes),
            "default_duration_minutes must be between 1 and {}, got {}",
            MAX_DURATION_MINUTES,
            self.default_duration_minutes
        );
        ensure!(self.max_title_length > 0, "max_title_length must be positive");
        Ok(())
    }
}
