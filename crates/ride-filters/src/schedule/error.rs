//! Error types for ride schedule parsing and validation.

use thiserror::Error;

/// A specialized Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that reject a schedule expression or record.
///
/// Schedule parsing is all-or-nothing: any of these means no schedule at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule expression is empty.
    #[error("schedule expression is empty")]
    EmptyExpression,

    /// The expression has more parts than `[interval] unit`.
    #[error("too many parts in schedule expression: {expression}")]
    TooManyParts {
        /// The expression after normalization.
        expression: String,
    },

    /// The interval is not a positive whole number.
    #[error("invalid interval: {value} (expected a positive whole number)")]
    InvalidInterval {
        /// The rejected interval text.
        value: String,
    },

    /// The unit is neither a known unit nor a weekday.
    #[error("unknown schedule unit: {unit}{}", did_you_mean(.suggestion))]
    UnknownUnit {
        /// The unrecognized unit.
        unit: String,
        /// A close match from the unit and weekday vocabulary.
        suggestion: Option<String>,
    },

    /// An entry of a weekday list is not a weekday name.
    #[error("invalid weekday: '{name}' (expected lowercase English weekday names)")]
    InvalidWeekday {
        /// The rejected entry.
        name: String,
    },

    /// A weekday appears more than once.
    #[error("duplicate weekday: {name}")]
    DuplicateWeekday {
        /// The repeated weekday.
        name: String,
    },

    /// A weekday schedule without any weekdays.
    #[error("schedule unit is 'weekdays' but no weekdays are given")]
    MissingWeekdays,

    /// Weekdays given for a unit that does not take them.
    #[error("weekdays are only allowed with unit 'weekdays', not '{unit}'")]
    UnexpectedWeekdays {
        /// The unit the weekdays were given with.
        unit: String,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

impl ScheduleError {
    /// Creates a too-many-parts error.
    pub fn too_many_parts(expression: impl Into<String>) -> Self {
        ScheduleError::TooManyParts {
            expression: expression.into(),
        }
    }

    /// Creates an invalid interval error.
    pub fn invalid_interval(value: impl Into<String>) -> Self {
        ScheduleError::InvalidInterval {
            value: value.into(),
        }
    }

    /// Creates an unknown unit error.
    pub fn unknown_unit(unit: impl Into<String>, suggestion: Option<String>) -> Self {
        ScheduleError::UnknownUnit {
            unit: unit.into(),
            suggestion,
        }
    }

    /// Creates an invalid weekday error.
    pub fn invalid_weekday(name: impl Into<String>) -> Self {
        ScheduleError::InvalidWeekday { name: name.into() }
    }

    /// Creates a duplicate weekday error.
    pub fn duplicate_weekday(name: impl Into<String>) -> Self {
        ScheduleError::DuplicateWeekday { name: name.into() }
    }
}
