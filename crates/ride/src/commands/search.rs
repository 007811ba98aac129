//! Search command implementation.
//!
//! Parses a ride search string and prints the filters it contains.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ride_filters::search::{RideSummary, ME_ALIAS};
use ride_filters::{parse_search_string, recommend_search_filters};

use super::{CommandContext, Result};
use crate::output::{
    format_rides_json, format_rides_table, format_search_json, format_search_table,
    format_suggestions_json, format_suggestions_text,
};

/// Executes the search command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute_search(ctx: &CommandContext, query: &str) -> Result<()> {
    let filters = parse_search_string(query);
    tracing::debug!(query, count = filters.len(), "parsed search string");

    if ctx.json_output {
        println!("{}", format_search_json(&filters)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_search_table(&filters, ctx.date_format, ctx.use_colors)
        );
    }

    Ok(())
}

/// Options for filtering a list of rides with a search string.
pub struct FilterRidesOptions<'a> {
    /// Search string.
    pub query: &'a str,
    /// JSON file holding an array of rides, `-` for stdin.
    pub rides: &'a Path,
    /// Email that `me` stands for.
    pub me: Option<&'a str>,
}

/// Executes the search command against a list of rides, printing the
/// rides that match.
///
/// # Errors
///
/// Returns an error if the rides cannot be read or are not valid JSON.
pub fn execute_filter_rides(ctx: &CommandContext, opts: &FilterRidesOptions<'_>) -> Result<()> {
    let filters = parse_search_string(opts.query);
    let rides = load_rides(opts.rides)?;
    let me = opts.me.unwrap_or(ME_ALIAS);

    let matching: Vec<&RideSummary> = rides
        .iter()
        .filter(|ride| filters.matches(ride, me))
        .collect();
    tracing::debug!(
        query = opts.query,
        total = rides.len(),
        matching = matching.len(),
        "filtered rides"
    );

    if ctx.json_output {
        println!("{}", format_rides_json(&matching)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_rides_table(&matching, ctx.date_format, ctx.use_colors)
        );
    }

    Ok(())
}

/// Reads a JSON array of rides from a file, or stdin for `-`.
fn load_rides(path: &Path) -> Result<Vec<RideSummary>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}

/// Executes the suggest command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute_suggest(ctx: &CommandContext, partial: &str) -> Result<()> {
    let suggestions = recommend_search_filters(partial);

    if ctx.json_output {
        println!("{}", format_suggestions_json(&suggestions)?);
    } else if !ctx.quiet {
        print!("{}", format_suggestions_text(&suggestions));
    }

    Ok(())
}
