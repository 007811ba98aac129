//! Command implementations for the ride CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod schedule;
pub mod search;

use std::env;

use crate::cli::Cli;
use config::{Config, DateFormat};

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Schedule expression or record was rejected.
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ride_filters::ScheduleError),

    /// Invalid command input that is not a schedule.
    #[error("invalid input: {0}")]
    Input(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// How timestamps are printed.
    pub date_format: DateFormat,
}

impl CommandContext {
    /// Creates a command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless disabled by `--no-color`, the `NO_COLOR`
    /// environment variable or `output.color = false`.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            date_format: config.output.date_format.unwrap_or_default(),
        }
    }
}
