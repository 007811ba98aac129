//! Search filter and ride schedule parsing for the ride-sharing app.
//!
//! This crate holds the two pieces of text handling behind the ride views:
//!
//! - [`search`] turns a search box string like
//!   `:from Graz :to Kaindorf :participants a@x.com,b@y.com` into structured
//!   filters, and suggests filter names while the user types.
//! - [`schedule`] parses recurrence expressions like `every 2 weeks` or
//!   `monday,friday` into a [`RideSchedule`], formats schedules for display,
//!   and computes the next occurrence of a scheduled ride.
//!
//! Everything here is pure: no I/O, no shared state.

pub mod schedule;
pub mod search;

pub use schedule::{format_schedule, parse_schedule, RideSchedule, ScheduleError};
pub use search::{parse_search_string, recommend_search_filters, SearchFilters};
