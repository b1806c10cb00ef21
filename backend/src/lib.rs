//! # Calendar Backend
//!
//! Contains all non-UI logic for the calendar.
//!
//! This crate brings together:
//! - **Domain**: month grid, event index, time-axis layout and the form,
//!   search, navigation and view services built on them
//! - **IO**: mappers between the `shared` DTOs and domain models
//! - **AppState**: the explicit state object owned by the top-level controller
//!
//! There is no persistence and no network surface: the event list lives in
//! memory for the length of a session.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (month / week / day / schedule views, forms, search)
//!     ↓
//! AppState (event list, current view, focus date, today)
//!     ↓
//! IO Layer (DTO <-> domain mappers)
//!     ↓
//! Domain Layer (pure calendar logic)
//! ```

pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;

use chrono::NaiveDate;
use log::info;

pub use app_state::AppState;
pub use config::CalendarConfig;
pub use error::CalendarError;

/// Set up the application state the UI will hold for the session
pub fn initialize_backend(config: CalendarConfig, today: NaiveDate) -> Result<AppState, CalendarError> {
    info!("Setting up calendar state for {}", today);
    let app_state = AppState::with_sample_events(config, today)?;
    info!("Calendar ready with {} sample events", app_state.events().len());
    Ok(app_state)
}
