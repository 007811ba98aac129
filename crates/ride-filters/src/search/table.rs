//! The fixed table of search filter kinds and their trigger words.

use std::fmt;

/// A recognized search filter.
///
/// Each kind is addressed in a search string by its trigger word, written
/// as `:{trigger} {value}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Where the ride starts (`:from`).
    Source,
    /// Where the ride goes (`:to`).
    Destination,
    /// Rides taking place before a point in time (`:before`).
    DateBefore,
    /// Rides taking place after a point in time (`:after`).
    DateAfter,
    /// The driver's email (`:driver`).
    Driver,
    /// The ride creator's email (`:owner`).
    Owner,
    /// Comma separated participant emails (`:participants`).
    Participants,
}

/// Filter kinds paired with their trigger words, in suggestion order.
///
/// This is the single source of truth for both parsing and autocomplete.
/// Entries are listed in `FilterKind` declaration order.
pub const FILTER_TRIGGERS: [(FilterKind, &str); 7] = [
    (FilterKind::Source, "from"),
    (FilterKind::Destination, "to"),
    (FilterKind::DateBefore, "before"),
    (FilterKind::DateAfter, "after"),
    (FilterKind::Driver, "driver"),
    (FilterKind::Owner, "owner"),
    (FilterKind::Participants, "participants"),
];

impl FilterKind {
    /// Returns the word that follows `:` to start this filter.
    pub fn trigger(self) -> &'static str {
        FILTER_TRIGGERS[self as usize].1
    }

    /// Returns the field name used for this filter in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            FilterKind::Source => "source",
            FilterKind::Destination => "destination",
            FilterKind::DateBefore => "dateBefore",
            FilterKind::DateAfter => "dateAfter",
            FilterKind::Driver => "driver",
            FilterKind::Owner => "owner",
            FilterKind::Participants => "participants",
        }
    }

    /// Looks up a filter kind by its exact (case-sensitive) trigger word.
    pub fn from_trigger(word: &str) -> Option<Self> {
        FILTER_TRIGGERS
            .iter()
            .find(|(_, trigger)| *trigger == word)
            .map(|(kind, _)| *kind)
    }

    /// Iterates over all filter kinds in table order.
    pub fn all() -> impl Iterator<Item = FilterKind> {
        FILTER_TRIGGERS.iter().map(|(kind, _)| *kind)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
