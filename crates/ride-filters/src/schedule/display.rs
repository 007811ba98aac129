//! Human readable schedule text.

use std::fmt;

use super::model::RideSchedule;

/// Text shown in place of a missing schedule.
pub const NO_SCHEDULE: &str = "---";

/// Formats an optional schedule for display.
///
/// ```text
/// None                          ---
/// weekdays, interval 1          every monday/friday
/// weekdays, interval 4          every 4. monday/friday
/// weeks, interval 1             every week
/// weeks, interval 3             every 3 weeks
/// ```
pub fn format_schedule(schedule: Option<&RideSchedule>) -> String {
    match schedule {
        Some(schedule) => schedule.to_string(),
        None => NO_SCHEDULE.to_string(),
    }
}

impl fmt::Display for RideSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideSchedule::Weekdays { interval, weekdays } => {
                let days = weekdays
                    .iter()
                    .map(|day| day.name())
                    .collect::<Vec<_>>()
                    .join("/");
                if interval.get() == 1 {
                    write!(f, "every {days}")
                } else {
                    write!(f, "every {interval}. {days}")
                }
            }
            RideSchedule::Interval { unit, interval } => {
                if interval.get() == 1 {
                    write!(f, "every {}", unit.singular())
                } else {
                    write!(f, "every {interval} {unit}")
                }
            }
        }
    }
}
