//! Ride schedules: how often a ride repeats.
//!
//! Schedules are written as short expressions and shown back as text:
//!
//! | written              | stored                                   | shown                  |
//! |----------------------|------------------------------------------|------------------------|
//! | `day`                | every 1 days                             | `every day`            |
//! | `every 2 weeks`      | every 2 weeks                            | `every 2 weeks`        |
//! | `Monday,Friday`      | weekdays monday, friday                  | `every monday/friday`  |
//! | `every 2 tuesday`    | weekdays tuesday, interval 2             | `every 2. tuesday`     |
//!
//! Unlike search filters, a schedule expression is either entirely valid or
//! rejected with a [`ScheduleError`].
//!
//! # Example
//!
//! ```
//! use ride_filters::schedule::{format_schedule, parse_schedule};
//!
//! let schedule = parse_schedule("every 3 weeks").unwrap();
//! assert_eq!(format_schedule(Some(&schedule)), "every 3 weeks");
//! assert_eq!(format_schedule(None), "---");
//! ```

mod display;
mod error;
mod model;
mod occurrence;
mod parser;
mod record;

pub use display::{format_schedule, NO_SCHEDULE};
pub use error::{ScheduleError, ScheduleResult};
pub use model::{IntervalUnit, RideSchedule, Weekday, WEEKDAYS_UNIT};
pub use parser::parse_schedule;
pub use record::ScheduleRecord;

impl std::str::FromStr for RideSchedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        parse_schedule(s)
    }
}

#[cfg(test)]
mod tests;
