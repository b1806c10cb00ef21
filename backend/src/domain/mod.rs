//! # Domain Module
//!
//! Contains the calendar logic the UI calls into.
//!
//! Everything here is a pure function of its inputs: services hold only
//! configuration, never the event list, and "today" is always passed in by
//! the caller. The presentation layer (modals, forms, search dialog,
//! profile popover) consumes the outputs and is not part of this crate.
//!
//! ## Module Organization
//!
//! - **calendar**: 42-cell month grid generation and date helpers
//! - **event_index**: bucketing events by date, ordered by start time
//! - **time_axis**: pixel placement of events on the 24-hour axis
//! - **event_service**: add-event form validation and event creation
//! - **search_service**: the search dialog's filter
//! - **navigation**: previous/next stepping and view titles
//! - **view_service**: day, week and schedule view assembly
//!
//! ## Core Concepts
//!
//! - **Event**: immutable once created; the only mutation is appending one
//! - **Grid**: always 42 cells starting on a Sunday
//! - **Index**: re-derived whenever the event list changes, never patched

pub mod calendar;
pub mod commands;
pub mod event_index;
pub mod event_service;
pub mod models;
pub mod navigation;
pub mod search_service;
pub mod time_axis;
pub mod view_service;

pub use calendar::*;
pub use event_index::*;
pub use event_service::*;
pub use navigation::*;
pub use search_service::*;
pub use time_axis::*;
pub use view_service::*;
