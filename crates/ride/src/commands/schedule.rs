//! Schedule command implementation.
//!
//! Parses schedule expressions, shows stored schedule records and lists
//! upcoming occurrences.

use std::io::{self, Read};

use chrono::{DateTime, Utc};
use ride_filters::schedule::{parse_schedule, RideSchedule, ScheduleRecord};
use ride_filters::search::parse_timestamp;

use super::{CommandContext, CommandError, Result};
use crate::output::{
    format_occurrences_json, format_occurrences_table, format_schedule_details,
    format_schedule_json,
};

/// Executes the schedule parse command.
///
/// # Errors
///
/// Returns `CommandError::Schedule` if the expression is rejected.
pub fn execute_parse(ctx: &CommandContext, expression: &str) -> Result<()> {
    let schedule = parse_schedule(expression)?;
    print_schedule(ctx, Some(&schedule))
}

/// Executes the schedule show command.
///
/// The record is JSON as stored with a ride, or `null` for a ride without a
/// schedule. When `record` is `None` it is read from stdin.
///
/// # Errors
///
/// Returns an error if the record is not valid JSON or does not describe a
/// valid schedule.
pub fn execute_show(ctx: &CommandContext, record: Option<&str>) -> Result<()> {
    let text = match record {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let schedule = parse_record(&text)?;
    print_schedule(ctx, schedule.as_ref())
}

/// Options for the schedule next command.
pub struct ScheduleNextOptions<'a> {
    /// Schedule expression.
    pub expression: &'a str,
    /// Start time; now when omitted.
    pub from: Option<&'a str>,
    /// Number of occurrences to list.
    pub count: u32,
}

/// Executes the schedule next command.
///
/// # Errors
///
/// Returns an error if the expression or the start time cannot be parsed.
pub fn execute_next(ctx: &CommandContext, opts: &ScheduleNextOptions<'_>) -> Result<()> {
    let schedule = parse_schedule(opts.expression)?;
    let start = resolve_start(opts.from)?;
    let occurrences: Vec<DateTime<Utc>> = schedule
        .occurrences(start)
        .take(opts.count as usize)
        .collect();

    tracing::debug!(
        schedule = %schedule,
        start = %start,
        found = occurrences.len(),
        "computed occurrences"
    );

    if ctx.json_output {
        println!("{}", format_occurrences_json(&schedule, &occurrences)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_occurrences_table(&schedule, &occurrences, ctx.date_format, ctx.use_colors)
        );
    }

    Ok(())
}

fn print_schedule(ctx: &CommandContext, schedule: Option<&RideSchedule>) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_schedule_json(schedule)?);
    } else if !ctx.quiet {
        print!("{}", format_schedule_details(schedule, ctx.use_colors));
    }
    Ok(())
}

/// Reads a schedule record, where `null` means no schedule.
fn parse_record(text: &str) -> Result<Option<RideSchedule>> {
    let record: Option<ScheduleRecord> = serde_json::from_str(text.trim())?;
    record.map(|r| r.validate()).transpose().map_err(CommandError::from)
}

/// Resolves the `--from` option to a start time.
fn resolve_start(from: Option<&str>) -> Result<DateTime<Utc>> {
    match from {
        Some(text) => parse_timestamp(text)
            .ok_or_else(|| CommandError::Input(format!("could not read date '{text}'"))),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ride_filters::ScheduleError;

    #[test]
    fn test_parse_record_null() {
        assert_eq!(parse_record("null").unwrap(), None);
        assert_eq!(parse_record("  null\n").unwrap(), None);
    }

    #[test]
    fn test_parse_record_valid() {
        let schedule = parse_record(r#"{"unit": "weekdays", "interval": 1, "weekdays": ["friday"]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(schedule.to_string(), "every friday");
    }

    #[test]
    fn test_parse_record_invalid_schedule() {
        let err = parse_record(r#"{"unit": "days", "interval": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Schedule(ScheduleError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_parse_record_malformed_json() {
        let err = parse_record("{unit: days").unwrap_err();
        assert!(matches!(err, CommandError::Json(_)));
    }

    #[test]
    fn test_resolve_start() {
        assert_eq!(
            resolve_start(Some("2024-12-11")).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 11, 0, 0, 0).unwrap()
        );
        assert!(matches!(
            resolve_start(Some("someday")),
            Err(CommandError::Input(_))
        ));

        let before = Utc::now();
        let now = resolve_start(None).unwrap();
        assert!(now >= before);
    }
}
