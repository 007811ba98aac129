//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ride CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ride - search filters and ride schedules from the command line
#[derive(Parser, Debug)]
#[command(name = "ride")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a search string into filters
    #[command(alias = "s")]
    Search {
        /// Search string, e.g. ":from Graz :to Kaindorf"
        query: String,

        /// JSON file with rides to filter (`-` for stdin)
        #[arg(long)]
        rides: Option<PathBuf>,

        /// Your email, substituted for `me` in owner, driver and participants
        #[arg(long, requires = "rides")]
        me: Option<String>,
    },

    /// Suggest filter names for a partially typed search string
    Suggest {
        /// Search string typed so far, e.g. ":dri"
        partial: String,
    },

    /// Work with ride schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// Parse a schedule expression, e.g. "every 2 weeks"
    Parse {
        /// Schedule expression
        expression: String,
    },

    /// Display a stored schedule record (JSON, or `null`)
    Show {
        /// Schedule record; read from stdin when omitted
        record: Option<String>,
    },

    /// List the next occurrences of a schedule
    Next {
        /// Schedule expression
        expression: String,

        /// Start time (RFC 3339 or date); defaults to now
        #[arg(long)]
        from: Option<String>,

        /// Number of occurrences to list
        #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
        count: u32,
    },
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show config file path
    Path,
}
