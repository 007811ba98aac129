//! Schedule output formatting.

use chrono::{DateTime, Utc};
use ride_filters::schedule::{format_schedule, RideSchedule, ScheduleRecord};
use serde::Serialize;

use super::helpers::{emphasize, format_timestamp, header};
use crate::commands::config::DateFormat;

/// JSON output for a single schedule.
#[derive(Serialize)]
pub struct ScheduleOutput<'a> {
    pub text: String,
    pub schedule: Option<ScheduleRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<&'a [DateTime<Utc>]>,
}

impl<'a> ScheduleOutput<'a> {
    fn new(schedule: Option<&RideSchedule>) -> Self {
        Self {
            text: format_schedule(schedule),
            schedule: schedule.map(ScheduleRecord::from),
            occurrences: None,
        }
    }
}

/// Formats a schedule (or the absence of one) as JSON.
pub fn format_schedule_json(schedule: Option<&RideSchedule>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScheduleOutput::new(schedule))
}

/// Formats a schedule with its stored fields.
pub fn format_schedule_details(schedule: Option<&RideSchedule>, use_colors: bool) -> String {
    let mut output = format!("{}\n", emphasize(&format_schedule(schedule), use_colors));
    let Some(schedule) = schedule else {
        return output;
    };

    output.push_str(&format!("  unit:     {}\n", schedule.unit()));
    output.push_str(&format!("  interval: {}\n", schedule.interval()));
    if !schedule.weekdays().is_empty() {
        let names: Vec<&str> = schedule.weekdays().iter().map(|day| day.name()).collect();
        output.push_str(&format!("  weekdays: {}\n", names.join(", ")));
    }
    output
}

/// Formats upcoming occurrences as JSON.
pub fn format_occurrences_json(
    schedule: &RideSchedule,
    occurrences: &[DateTime<Utc>],
) -> Result<String, serde_json::Error> {
    let output = ScheduleOutput {
        occurrences: Some(occurrences),
        ..ScheduleOutput::new(Some(schedule))
    };
    serde_json::to_string_pretty(&output)
}

/// Formats upcoming occurrences as a numbered list.
pub fn format_occurrences_table(
    schedule: &RideSchedule,
    occurrences: &[DateTime<Utc>],
    date_format: DateFormat,
    use_colors: bool,
) -> String {
    let mut output = header(&format_schedule(Some(schedule)), use_colors);
    if occurrences.is_empty() {
        output.push_str("No upcoming occurrences.\n");
        return output;
    }
    for (idx, ts) in occurrences.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", idx + 1, format_timestamp(ts, date_format)));
    }
    output
}
