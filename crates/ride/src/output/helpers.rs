//! Common helper functions for output formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use owo_colors::OwoColorize;

use crate::commands::config::DateFormat;

/// Formats a timestamp in the configured style.
pub fn format_timestamp(timestamp: &DateTime<Utc>, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        DateFormat::Short => timestamp.format("%a %b %d %Y %H:%M").to_string(),
    }
}

/// Formats a table header line.
pub fn header(text: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", text.dimmed())
    } else {
        format!("{text}\n")
    }
}

/// Highlights a value.
pub fn emphasize(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
