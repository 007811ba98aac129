//! The flat `{unit, interval, weekdays}` record schedules travel as in JSON.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::error::{ScheduleError, ScheduleResult};
use super::model::{check_weekdays, IntervalUnit, RideSchedule, Weekday, WEEKDAYS_UNIT};

/// Serialized form of a [`RideSchedule`].
///
/// ```json
/// {"unit": "weeks", "interval": 3}
/// {"unit": "weekdays", "interval": 1, "weekdays": ["monday", "friday"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub unit: String,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<String>>,
}

impl ScheduleRecord {
    /// Checks the record and converts it into a schedule.
    ///
    /// # Errors
    ///
    /// Rejects a zero interval, an unknown unit, a `weekdays` unit without
    /// weekdays, unknown or repeated weekday names, and weekdays on any other
    /// unit.
    pub fn validate(&self) -> ScheduleResult<RideSchedule> {
        let interval = NonZeroU32::new(self.interval)
            .ok_or_else(|| ScheduleError::invalid_interval(self.interval.to_string()))?;

        if self.unit == WEEKDAYS_UNIT {
            let names = self.weekdays.as_deref().unwrap_or_default();
            let weekdays = names
                .iter()
                .map(|name| {
                    Weekday::from_name(name).ok_or_else(|| ScheduleError::invalid_weekday(name))
                })
                .collect::<ScheduleResult<Vec<_>>>()?;
            check_weekdays(&weekdays)?;
            return Ok(RideSchedule::Weekdays { interval, weekdays });
        }

        let unit = IntervalUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == self.unit)
            .ok_or_else(|| ScheduleError::unknown_unit(&self.unit, None))?;

        if self.weekdays.as_ref().is_some_and(|days| !days.is_empty()) {
            return Err(ScheduleError::UnexpectedWeekdays {
                unit: self.unit.clone(),
            });
        }

        Ok(RideSchedule::Interval { unit, interval })
    }
}

impl From<&RideSchedule> for ScheduleRecord {
    fn from(schedule: &RideSchedule) -> Self {
        let weekdays = match schedule {
            RideSchedule::Interval { .. } => None,
            RideSchedule::Weekdays { weekdays, .. } => {
                Some(weekdays.iter().map(|day| day.name().to_string()).collect())
            }
        };
        Self {
            unit: schedule.unit().to_string(),
            interval: schedule.interval().get(),
            weekdays,
        }
    }
}

impl From<RideSchedule> for ScheduleRecord {
    fn from(schedule: RideSchedule) -> Self {
        Self::from(&schedule)
    }
}

impl TryFrom<ScheduleRecord> for RideSchedule {
    type Error = ScheduleError;

    fn try_from(record: ScheduleRecord) -> ScheduleResult<Self> {
        record.validate()
    }
}

impl Serialize for RideSchedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ScheduleRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RideSchedule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ScheduleRecord::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}
