//! Parser for written schedule expressions such as `every 2 weeks`.

use std::num::NonZeroU32;

use strsim::levenshtein;
use tracing::debug;

use super::error::{ScheduleError, ScheduleResult};
use super::model::{check_weekdays, IntervalUnit, RideSchedule, Weekday};

/// Maximum edit distance for a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Separators accepted between weekdays. `/` is what the formatter writes.
const WEEKDAY_SEPARATORS: [char; 2] = [',', '/'];

/// Parses a schedule expression.
///
/// # Grammar
///
/// ```text
/// schedule ::= ["every"] [interval] unit
/// interval ::= positive integer, or "N." before a weekday list
/// unit     ::= ("day" | "week" | "month" | "year") ["s"]
///            | weekday (("," | "/") weekday)*
/// ```
///
/// Input is case-insensitive. Weekday lists keep their order and must not
/// repeat a day.
///
/// # Errors
///
/// Any malformed part rejects the whole expression; see [`ScheduleError`].
///
/// # Example
///
/// ```
/// use ride_filters::schedule::{parse_schedule, IntervalUnit, RideSchedule, Weekday};
///
/// let schedule = parse_schedule("every 2 days").unwrap();
/// assert_eq!(schedule, RideSchedule::every(2, IntervalUnit::Days).unwrap());
///
/// let schedule = parse_schedule("Monday,Friday").unwrap();
/// assert_eq!(schedule.weekdays(), &[Weekday::Monday, Weekday::Friday]);
///
/// assert!(parse_schedule("2.5 weeks").is_err());
/// ```
pub fn parse_schedule(text: &str) -> ScheduleResult<RideSchedule> {
    let normalized = text.trim().to_lowercase();
    parse_normalized(strip_every(&normalized)).inspect_err(|e| {
        debug!(expression = text, error = %e, "rejected schedule expression");
    })
}

fn parse_normalized(body: &str) -> ScheduleResult<RideSchedule> {
    let parts: Vec<&str> = body.split_whitespace().collect();
    let (interval_token, unit_token) = match parts.as_slice() {
        [] => return Err(ScheduleError::EmptyExpression),
        [unit] => (None, *unit),
        [interval, unit] => (Some(*interval), *unit),
        _ => return Err(ScheduleError::too_many_parts(body)),
    };

    if let Some(unit) = IntervalUnit::from_word(unit_token) {
        let interval = interval_token.map(parse_interval).transpose()?;
        return Ok(RideSchedule::Interval {
            unit,
            interval: interval.unwrap_or(NonZeroU32::MIN),
        });
    }

    let weekdays = parse_weekday_list(unit_token)?;
    let interval = interval_token
        .map(|token| parse_interval(token.strip_suffix('.').unwrap_or(token)))
        .transpose()?;
    Ok(RideSchedule::Weekdays {
        interval: interval.unwrap_or(NonZeroU32::MIN),
        weekdays,
    })
}

/// Strips a leading `every` word.
fn strip_every(text: &str) -> &str {
    match text.strip_prefix("every") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => text,
    }
}

/// Parses a strictly written positive integer.
///
/// The token must be exactly how the number prints, so `02`, `+2` and `2.0`
/// are rejected along with `0`.
fn parse_interval(token: &str) -> ScheduleResult<NonZeroU32> {
    token
        .parse::<NonZeroU32>()
        .ok()
        .filter(|n| n.to_string() == token)
        .ok_or_else(|| ScheduleError::invalid_interval(token))
}

fn parse_weekday_list(text: &str) -> ScheduleResult<Vec<Weekday>> {
    if !text.contains(WEEKDAY_SEPARATORS) {
        let day = Weekday::from_name(text)
            .ok_or_else(|| ScheduleError::unknown_unit(text, suggest_unit(text)))?;
        return Ok(vec![day]);
    }

    let weekdays = text
        .split(WEEKDAY_SEPARATORS)
        .map(str::trim)
        .map(|name| Weekday::from_name(name).ok_or_else(|| ScheduleError::invalid_weekday(name)))
        .collect::<ScheduleResult<Vec<_>>>()?;

    check_weekdays(&weekdays)?;
    Ok(weekdays)
}

/// Finds the closest unit or weekday name to an unrecognized word.
fn suggest_unit(word: &str) -> Option<String> {
    let candidates = IntervalUnit::ALL
        .iter()
        .map(|unit| unit.singular())
        .chain(Weekday::ALL.iter().map(|day| day.name()));

    let (best, distance) = candidates
        .map(|name| (name, levenshtein(word, name)))
        .min_by_key(|(_, d)| *d)?;

    (distance > 0 && distance <= MAX_SUGGESTION_DISTANCE).then(|| best.to_string())
}
