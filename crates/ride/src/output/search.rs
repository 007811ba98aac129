//! Search filter output formatting.

use ride_filters::search::{RideSummary, SearchFilter, SearchFilters};

use super::helpers::{emphasize, format_timestamp, header};
use crate::commands::config::DateFormat;

/// Formats parsed filters as JSON, the same shape sent in request bodies.
pub fn format_search_json(filters: &SearchFilters) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(filters)
}

/// Formats parsed filters as a two column table.
pub fn format_search_table(
    filters: &SearchFilters,
    date_format: DateFormat,
    use_colors: bool,
) -> String {
    if filters.is_empty() {
        return "No filters found.\n".to_string();
    }

    let mut output = header(&format!("{:<14} {}", "Filter", "Value"), use_colors);
    for filter in filters.to_filters() {
        let value = match &filter {
            SearchFilter::Source(v)
            | SearchFilter::Destination(v)
            | SearchFilter::Driver(v)
            | SearchFilter::Owner(v) => format!("\"{v}\""),
            SearchFilter::DateBefore(ts) | SearchFilter::DateAfter(ts) => {
                format_timestamp(ts, date_format)
            }
            SearchFilter::Participants(list) => list.join(", "),
        };
        let name = format!("{:<14}", filter.kind().trigger());
        output.push_str(&format!("{} {}\n", emphasize(&name, use_colors), value));
    }
    output
}

/// Formats matching rides as a JSON array.
pub fn format_rides_json(rides: &[&RideSummary]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rides)
}

/// Formats matching rides one per line: time, route and driver.
pub fn format_rides_table(
    rides: &[&RideSummary],
    date_format: DateFormat,
    use_colors: bool,
) -> String {
    if rides.is_empty() {
        return "No matching rides.\n".to_string();
    }

    let mut output = String::new();
    for ride in rides {
        let route = format!("{} -> {}", ride.location_from, ride.location_to);
        output.push_str(&format!(
            "{}  {}  {}\n",
            format_timestamp(&ride.taking_place_at, date_format),
            emphasize(&route, use_colors),
            ride.driver_email.as_deref().unwrap_or("no driver"),
        ));
    }
    output
}

/// Formats suggestions as a JSON array.
pub fn format_suggestions_json(suggestions: &[&str]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(suggestions)
}

/// Formats suggestions one per line, each with its leading colon.
pub fn format_suggestions_text(suggestions: &[&str]) -> String {
    suggestions.iter().map(|s| format!(":{s}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_filters::parse_search_string;

    #[test]
    fn test_table_empty() {
        let filters = SearchFilters::default();
        assert_eq!(
            format_search_table(&filters, DateFormat::Iso, false),
            "No filters found.\n"
        );
    }

    #[test]
    fn test_table_rows_in_table_order() {
        let filters = parse_search_string(
            ":participants a@x.com,b@x.com :before 2024-12-12 :from Graz",
        );
        let table = format_search_table(&filters, DateFormat::Iso, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Filter"));
        assert_eq!(lines[1], "from           \"Graz\"");
        assert_eq!(lines[2], "before         2024-12-12T00:00:00Z");
        assert_eq!(lines[3], "participants   a@x.com, b@x.com");
    }

    #[test]
    fn test_table_short_dates() {
        let filters = parse_search_string(":after 2024-12-12");
        let table = format_search_table(&filters, DateFormat::Short, false);
        assert!(table.contains("Thu Dec 12 2024 00:00"));
    }

    #[test]
    fn test_search_json() {
        let filters = parse_search_string(":to Kaindorf");
        let json: serde_json::Value =
            serde_json::from_str(&format_search_json(&filters).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"destination": "Kaindorf"}));
    }

    #[test]
    fn test_rides_table() {
        let ride = RideSummary {
            location_from: "Graz".to_string(),
            location_to: "Wien".to_string(),
            created_by_email: "a@x.com".to_string(),
            driver_email: None,
            taking_place_at: "2024-12-12T08:00:00Z".parse().unwrap(),
            participants: vec![],
        };
        assert_eq!(
            format_rides_table(&[&ride], DateFormat::Iso, false),
            "2024-12-12T08:00:00Z  Graz -> Wien  no driver\n"
        );
        assert_eq!(
            format_rides_table(&[], DateFormat::Iso, false),
            "No matching rides.\n"
        );
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(format_suggestions_text(&["from", "to"]), ":from\n:to\n");
        assert_eq!(format_suggestions_text(&[]), "");
        let json: Vec<String> =
            serde_json::from_str(&format_suggestions_json(&["driver"]).unwrap()).unwrap();
        assert_eq!(json, vec!["driver"]);
    }
}
