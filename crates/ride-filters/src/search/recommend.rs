//! Prefix suggestions for filter triggers while a search string is typed.

use super::table::FILTER_TRIGGERS;

/// Suggests trigger words for the filter currently being typed.
///
/// Only the text after the last `:` is considered. Every trigger starting with
/// that text is returned in table order, so a lone `:` suggests all of them.
/// Without any `:` there is nothing to complete.
///
/// # Example
///
/// ```
/// use ride_filters::search::recommend_search_filters;
///
/// assert_eq!(recommend_search_filters(":from Graz :dri"), vec!["driver"]);
/// assert!(recommend_search_filters("Graz").is_empty());
/// ```
pub fn recommend_search_filters(partial: &str) -> Vec<&'static str> {
    let Some(colon) = partial.rfind(':') else {
        return Vec::new();
    };

    let prefix = &partial[colon + 1..];
    FILTER_TRIGGERS
        .iter()
        .map(|(_, trigger)| *trigger)
        .filter(|trigger| trigger.starts_with(prefix))
        .collect()
}
