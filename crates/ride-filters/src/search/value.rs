//! Typed filter values and the per-kind value parsers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::table::FilterKind;

/// A single parsed search filter with its typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    Source(String),
    Destination(String),
    DateBefore(DateTime<Utc>),
    DateAfter(DateTime<Utc>),
    Driver(String),
    Owner(String),
    Participants(Vec<String>),
}

impl SearchFilter {
    /// Parses the raw text collected for a filter into its typed value.
    ///
    /// Text filters and participant lists always succeed. Date filters return
    /// `None` when the text is not a recognizable date.
    pub fn parse(kind: FilterKind, raw: &str) -> Option<Self> {
        match kind {
            FilterKind::Source => Some(SearchFilter::Source(raw.trim().to_string())),
            FilterKind::Destination => Some(SearchFilter::Destination(raw.trim().to_string())),
            FilterKind::Driver => Some(SearchFilter::Driver(raw.trim().to_string())),
            FilterKind::Owner => Some(SearchFilter::Owner(raw.trim().to_string())),
            FilterKind::Participants => Some(SearchFilter::Participants(
                raw.split(',').map(|p| p.trim().to_string()).collect(),
            )),
            FilterKind::DateBefore => parse_timestamp(raw).map(SearchFilter::DateBefore),
            FilterKind::DateAfter => parse_timestamp(raw).map(SearchFilter::DateAfter),
        }
    }

    /// Returns the kind of this filter.
    pub fn kind(&self) -> FilterKind {
        match self {
            SearchFilter::Source(_) => FilterKind::Source,
            SearchFilter::Destination(_) => FilterKind::Destination,
            SearchFilter::DateBefore(_) => FilterKind::DateBefore,
            SearchFilter::DateAfter(_) => FilterKind::DateAfter,
            SearchFilter::Driver(_) => FilterKind::Driver,
            SearchFilter::Owner(_) => FilterKind::Owner,
            SearchFilter::Participants(_) => FilterKind::Participants,
        }
    }
}

/// Date-time layouts without an offset, interpreted as UTC.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m.%d.%Y %H:%M:%S",
    "%m.%d.%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
];

/// Date-only layouts, resolved to midnight UTC.
///
/// Dotted, slashed and dashed day-first looking dates are read month first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m.%d.%Y", "%m/%d/%Y", "%m-%d-%Y"];

/// Parses a date or date-time the same way regardless of the host locale.
///
/// Values carrying an offset (RFC 3339, RFC 2822) are converted to UTC;
/// everything else is taken to already be UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
