//! Computing when a scheduled ride takes place next.

use chrono::{DateTime, Datelike, Duration, Months, Utc};

use super::model::{IntervalUnit, RideSchedule};

impl RideSchedule {
    /// Returns the next time a ride with this schedule takes place after
    /// `after`, keeping its time of day.
    ///
    /// Months and years are added on the calendar, clamping to the end of
    /// shorter months (Jan 31 + 1 month is the last day of February). Days
    /// past the end of a month never roll over into the following month,
    /// so a monthly ride on the 31st stays in the month it is due. A
    /// weekday schedule moves to the nearest listed weekday 1 to 7 days ahead;
    /// its interval is not applied.
    ///
    /// Returns `None` if the result is outside the representable date range.
    pub fn next_occurrence(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            RideSchedule::Interval { unit, interval } => {
                let n = interval.get();
                match unit {
                    IntervalUnit::Days => after.checked_add_signed(Duration::days(i64::from(n))),
                    IntervalUnit::Weeks => {
                        after.checked_add_signed(Duration::days(i64::from(n) * 7))
                    }
                    IntervalUnit::Months => after.checked_add_months(Months::new(n)),
                    IntervalUnit::Years => {
                        after.checked_add_months(Months::new(n.checked_mul(12)?))
                    }
                }
            }
            RideSchedule::Weekdays { weekdays, .. } => {
                let today = after.weekday().num_days_from_sunday();
                let distance = weekdays
                    .iter()
                    .map(|day| {
                        let target = day.number();
                        if today < target {
                            target - today
                        } else {
                            7 - (today - target)
                        }
                    })
                    .min()?;
                after.checked_add_signed(Duration::days(i64::from(distance)))
            }
        }
    }

    /// Iterates over the occurrences following `start`, in order.
    pub fn occurrences(&self, start: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        std::iter::successors(self.next_occurrence(start), move |prev| {
            self.next_occurrence(*prev)
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::super::model::Weekday;
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_next_days_and_weeks() {
        let start = utc(2024, 12, 30, 8);
        let days = RideSchedule::every(3, IntervalUnit::Days).unwrap();
        assert_eq!(days.next_occurrence(start), Some(utc(2025, 1, 2, 8)));

        let weeks = RideSchedule::every(2, IntervalUnit::Weeks).unwrap();
        assert_eq!(weeks.next_occurrence(start), Some(utc(2025, 1, 13, 8)));
    }

    #[test]
    fn test_next_month_clamps_to_month_end() {
        let months = RideSchedule::every(1, IntervalUnit::Months).unwrap();
        assert_eq!(
            months.next_occurrence(utc(2024, 1, 31, 7)),
            Some(utc(2024, 2, 29, 7))
        );
        assert_eq!(
            months.next_occurrence(utc(2025, 1, 31, 7)),
            Some(utc(2025, 2, 28, 7))
        );
    }

    #[test]
    fn test_next_month_never_rolls_into_following_month() {
        let months = RideSchedule::every(1, IntervalUnit::Months).unwrap();
        for day in [29, 30, 31] {
            let next = months.next_occurrence(utc(2025, 1, day, 7)).unwrap();
            assert_eq!(next.month(), 2, "jan {day}");
        }
        let quarterly = RideSchedule::every(3, IntervalUnit::Months).unwrap();
        assert_eq!(
            quarterly.next_occurrence(utc(2024, 11, 30, 7)),
            Some(utc(2025, 2, 28, 7))
        );
    }

    #[test]
    fn test_next_year() {
        let years = RideSchedule::every(1, IntervalUnit::Years).unwrap();
        assert_eq!(
            years.next_occurrence(utc(2024, 2, 29, 9)),
            Some(utc(2025, 2, 28, 9))
        );
        let decades = RideSchedule::every(10, IntervalUnit::Years).unwrap();
        assert_eq!(
            decades.next_occurrence(utc(2020, 6, 1, 9)),
            Some(utc(2030, 6, 1, 9))
        );
    }

    #[test]
    fn test_next_weekday_picks_nearest() {
        // 2024-12-11 is a wednesday
        let start = utc(2024, 12, 11, 17);
        let schedule =
            RideSchedule::on_weekdays(1, vec![Weekday::Monday, Weekday::Friday]).unwrap();
        assert_eq!(schedule.next_occurrence(start), Some(utc(2024, 12, 13, 17)));
    }

    #[test]
    fn test_next_weekday_same_day_moves_a_week() {
        let start = utc(2024, 12, 11, 17);
        let schedule = RideSchedule::on_weekdays(1, vec![Weekday::Wednesday]).unwrap();
        assert_eq!(schedule.next_occurrence(start), Some(utc(2024, 12, 18, 17)));
    }

    #[test]
    fn test_next_weekday_wraps_around_week() {
        // saturday -> monday
        let start = utc(2024, 12, 14, 6);
        let schedule = RideSchedule::on_weekdays(1, vec![Weekday::Monday]).unwrap();
        assert_eq!(schedule.next_occurrence(start), Some(utc(2024, 12, 16, 6)));
    }

    #[test]
    fn test_next_weekday_ignores_interval() {
        let start = utc(2024, 12, 11, 17);
        let schedule = RideSchedule::on_weekdays(3, vec![Weekday::Thursday]).unwrap();
        assert_eq!(schedule.next_occurrence(start), Some(utc(2024, 12, 12, 17)));
    }

    #[test]
    fn test_occurrences_sequence() {
        let start = utc(2024, 12, 11, 17);
        let schedule =
            RideSchedule::on_weekdays(1, vec![Weekday::Friday, Weekday::Monday]).unwrap();
        let upcoming: Vec<_> = schedule.occurrences(start).take(4).collect();
        assert_eq!(
            upcoming,
            vec![
                utc(2024, 12, 13, 17),
                utc(2024, 12, 16, 17),
                utc(2024, 12, 20, 17),
                utc(2024, 12, 23, 17),
            ]
        );
    }
}
