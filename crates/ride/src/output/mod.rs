//! Output formatting utilities for the ride CLI.
//!
//! Formatters return strings so they can be tested without capturing stdout.
//!
//! - [`search`] - Parsed search filters, matching rides and filter suggestions
//! - [`schedule`] - Schedules and their upcoming occurrences
//! - [`helpers`] - Timestamps and colors

pub mod helpers;
mod schedule;
mod search;

pub use schedule::{
    format_occurrences_json, format_occurrences_table, format_schedule_details,
    format_schedule_json,
};
pub use search::{
    format_rides_json, format_rides_table, format_search_json, format_search_table,
    format_suggestions_json, format_suggestions_text,
};
