//! Scanner that extracts `:{trigger} {value}` filters from a search string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::table::FilterKind;
use super::value::SearchFilter;

/// The filters found in a search string.
///
/// A field is only set when its trigger appeared in the input and the value
/// following it could be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_before: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_after: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Participant emails in the order they were written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
}

impl SearchFilters {
    /// Returns true if no filter was recognized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of filters that are set.
    pub fn len(&self) -> usize {
        FilterKind::all().filter(|kind| self.contains(*kind)).count()
    }

    /// Returns true if the given filter is set.
    pub fn contains(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Source => self.source.is_some(),
            FilterKind::Destination => self.destination.is_some(),
            FilterKind::DateBefore => self.date_before.is_some(),
            FilterKind::DateAfter => self.date_after.is_some(),
            FilterKind::Driver => self.driver.is_some(),
            FilterKind::Owner => self.owner.is_some(),
            FilterKind::Participants => self.participants.is_some(),
        }
    }

    /// Stores a filter, replacing any earlier value for the same kind.
    pub fn insert(&mut self, filter: SearchFilter) {
        match filter {
            SearchFilter::Source(v) => self.source = Some(v),
            SearchFilter::Destination(v) => self.destination = Some(v),
            SearchFilter::DateBefore(v) => self.date_before = Some(v),
            SearchFilter::DateAfter(v) => self.date_after = Some(v),
            SearchFilter::Driver(v) => self.driver = Some(v),
            SearchFilter::Owner(v) => self.owner = Some(v),
            SearchFilter::Participants(v) => self.participants = Some(v),
        }
    }

    /// Returns the set filters as typed values, in table order.
    pub fn to_filters(&self) -> Vec<SearchFilter> {
        let mut filters = Vec::with_capacity(self.len());
        if let Some(v) = &self.source {
            filters.push(SearchFilter::Source(v.clone()));
        }
        if let Some(v) = &self.destination {
            filters.push(SearchFilter::Destination(v.clone()));
        }
        if let Some(v) = self.date_before {
            filters.push(SearchFilter::DateBefore(v));
        }
        if let Some(v) = self.date_after {
            filters.push(SearchFilter::DateAfter(v));
        }
        if let Some(v) = &self.driver {
            filters.push(SearchFilter::Driver(v.clone()));
        }
        if let Some(v) = &self.owner {
            filters.push(SearchFilter::Owner(v.clone()));
        }
        if let Some(v) = &self.participants {
            filters.push(SearchFilter::Participants(v.clone()));
        }
        filters
    }
}

/// Parser for ride search strings.
///
/// A filter starts at a `:` that is directly followed by a trigger word and a
/// single space. Its value runs until the next such filter start or the end
/// of the input. Any text before the first filter is ignored.
///
/// ```text
/// search ::= free_text? filter*
/// filter ::= ":" trigger " " value
/// trigger ::= "from" | "to" | "before" | "after" | "driver" | "owner" | "participants"
/// ```
///
/// # Example
///
/// ```
/// use ride_filters::search::SearchParser;
///
/// let filters = SearchParser::parse(":from Graz :to Kaindorf an der Sulm");
/// assert_eq!(filters.source.as_deref(), Some("Graz"));
/// assert_eq!(filters.destination.as_deref(), Some("Kaindorf an der Sulm"));
/// ```
pub struct SearchParser<'a> {
    input: &'a str,
    /// Byte offset of the next character to scan.
    position: usize,
    /// The filter currently collecting its value, if any.
    open: Option<(FilterKind, String)>,
    filters: SearchFilters,
}

impl<'a> SearchParser<'a> {
    /// Parses a search string into its filters. Never fails.
    pub fn parse(input: &'a str) -> SearchFilters {
        let mut parser = Self {
            input,
            position: 0,
            open: None,
            filters: SearchFilters::default(),
        };

        while let Some(c) = parser.next_char() {
            if c == ':' {
                if let Some(kind) = parser.trigger_after_colon() {
                    parser.close_open_filter();
                    trace!(filter = kind.key(), "search filter opened");
                    parser.open = Some((kind, String::new()));
                    // skip the trigger word and the space after it
                    parser.position += kind.trigger().len() + 1;
                    continue;
                }
            }

            if let Some((_, value)) = parser.open.as_mut() {
                value.push(c);
            }
        }

        parser.close_open_filter();
        parser.filters
    }

    /// Consumes and returns the next character.
    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Checks whether the colon just consumed starts a filter.
    ///
    /// The word between the colon and the next space must be a trigger.
    fn trigger_after_colon(&self) -> Option<FilterKind> {
        let rest = &self.input[self.position..];
        let space = rest.find(' ')?;
        FilterKind::from_trigger(&rest[..space])
    }

    /// Parses the value of the open filter and stores it if valid.
    fn close_open_filter(&mut self) {
        let Some((kind, raw)) = self.open.take() else {
            return;
        };

        match SearchFilter::parse(kind, &raw) {
            Some(filter) => self.filters.insert(filter),
            None => debug!(
                filter = kind.key(),
                value = raw.trim(),
                "dropping search filter with unparseable value"
            ),
        }
    }
}

/// Parses a ride search string by finding the filters contained in it.
///
/// Unknown `:words` are ordinary text and unparseable values are dropped, so
/// this always returns a (possibly empty) filter set.
pub fn parse_search_string(raw: &str) -> SearchFilters {
    SearchParser::parse(raw)
}
