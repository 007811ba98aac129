//! Ride search filter language.
//!
//! A search string is free text in which filters can be embedded as
//! `:{trigger} {value}`. The value runs until the next filter or the end of
//! the string, so it may contain spaces and even colons.
//!
//! # Filters
//!
//! - `:from {place}` - Where the ride starts
//! - `:to {place}` - Where the ride goes
//! - `:before {date}` - Rides before a date
//! - `:after {date}` - Rides after a date
//! - `:driver {email}` - Rides driven by a user
//! - `:owner {email}` - Rides created by a user
//! - `:participants {email},{email}...` - Rides with these participants
//!
//! Unknown triggers are plain text and unparseable values (such as a date
//! that cannot be read) are dropped. Parsing a search string never fails.
//!
//! [`SearchFilters::matches`] applies a parsed filter set to a [`RideSummary`].
//!
//! # Example
//!
//! ```
//! use ride_filters::search::{parse_search_string, recommend_search_filters};
//!
//! let filters = parse_search_string(":from Graz :participants a@x.com, b@y.com");
//! assert_eq!(filters.source.as_deref(), Some("Graz"));
//! assert_eq!(filters.participants.unwrap(), vec!["a@x.com", "b@y.com"]);
//!
//! assert_eq!(recommend_search_filters(":fr"), vec!["from"]);
//! ```

mod matcher;
mod parser;
mod recommend;
mod table;
mod value;

pub use matcher::{RideSummary, ME_ALIAS};
pub use parser::{parse_search_string, SearchFilters, SearchParser};
pub use recommend::recommend_search_filters;
pub use table::{FilterKind, FILTER_TRIGGERS};
pub use value::{parse_timestamp, SearchFilter};
