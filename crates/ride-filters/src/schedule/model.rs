//! Ride schedule values.

use std::fmt;
use std::num::NonZeroU32;

use super::error::{ScheduleError, ScheduleResult};

/// The unit of an interval schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl IntervalUnit {
    /// All interval units.
    pub const ALL: [IntervalUnit; 4] = [
        IntervalUnit::Days,
        IntervalUnit::Weeks,
        IntervalUnit::Months,
        IntervalUnit::Years,
    ];

    /// Returns the canonical (plural) name, e.g. `weeks`.
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalUnit::Days => "days",
            IntervalUnit::Weeks => "weeks",
            IntervalUnit::Months => "months",
            IntervalUnit::Years => "years",
        }
    }

    /// Returns the singular name, e.g. `week`.
    pub fn singular(self) -> &'static str {
        match self {
            IntervalUnit::Days => "day",
            IntervalUnit::Weeks => "week",
            IntervalUnit::Months => "month",
            IntervalUnit::Years => "year",
        }
    }

    /// Matches `day`, `week`, `month` or `year`, with an optional plural `s`.
    pub fn from_word(word: &str) -> Option<Self> {
        let stem = word.strip_suffix('s').unwrap_or(word);
        Self::ALL.into_iter().find(|unit| unit.singular() == stem)
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day of the week, named by its lowercase English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays, numbered from sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Looks up a weekday by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == name)
    }

    /// Returns the day number, sunday = 0 through saturday = 6.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Returns the weekday for a day number, sunday = 0 through saturday = 6.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.get(number as usize).copied()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

/// How a ride repeats.
///
/// Intervals are never zero. A weekday schedule lists at least one weekday
/// and no weekday twice; the list keeps the order it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideSchedule {
    /// Every `interval` days, weeks, months or years.
    Interval {
        unit: IntervalUnit,
        interval: NonZeroU32,
    },

    /// On the listed weekdays.
    Weekdays {
        interval: NonZeroU32,
        weekdays: Vec<Weekday>,
    },
}

/// Unit name used for weekday schedules.
pub const WEEKDAYS_UNIT: &str = "weekdays";

impl RideSchedule {
    /// Creates an interval schedule, e.g. every 3 weeks.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInterval` if `interval` is zero.
    pub fn every(interval: u32, unit: IntervalUnit) -> ScheduleResult<Self> {
        let interval = NonZeroU32::new(interval)
            .ok_or_else(|| ScheduleError::invalid_interval(interval.to_string()))?;
        Ok(RideSchedule::Interval { unit, interval })
    }

    /// Creates a weekday schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero, `weekdays` is empty or a
    /// weekday is repeated.
    pub fn on_weekdays(interval: u32, weekdays: Vec<Weekday>) -> ScheduleResult<Self> {
        let interval = NonZeroU32::new(interval)
            .ok_or_else(|| ScheduleError::invalid_interval(interval.to_string()))?;
        check_weekdays(&weekdays)?;
        Ok(RideSchedule::Weekdays { interval, weekdays })
    }

    /// Returns the unit name: `days`, `weeks`, `months`, `years` or `weekdays`.
    pub fn unit(&self) -> &'static str {
        match self {
            RideSchedule::Interval { unit, .. } => unit.as_str(),
            RideSchedule::Weekdays { .. } => WEEKDAYS_UNIT,
        }
    }

    /// Returns the repeat interval.
    pub fn interval(&self) -> NonZeroU32 {
        match self {
            RideSchedule::Interval { interval, .. } | RideSchedule::Weekdays { interval, .. } => {
                *interval
            }
        }
    }

    /// Returns the weekdays of a weekday schedule, empty otherwise.
    pub fn weekdays(&self) -> &[Weekday] {
        match self {
            RideSchedule::Interval { .. } => &[],
            RideSchedule::Weekdays { weekdays, .. } => weekdays,
        }
    }
}

/// Checks that a weekday list is non-empty and free of repeats.
pub(crate) fn check_weekdays(weekdays: &[Weekday]) -> ScheduleResult<()> {
    if weekdays.is_empty() {
        return Err(ScheduleError::MissingWeekdays);
    }
    for (idx, day) in weekdays.iter().enumerate() {
        if weekdays[..idx].contains(day) {
            return Err(ScheduleError::duplicate_weekday(day.name()));
        }
    }
    Ok(())
}
