//! Command dispatch module for routing CLI commands to their handlers.

use std::path::Path;

use crate::cli::{Cli, Commands, ConfigCommands, ScheduleCommands};
use crate::commands::{self, CommandContext, CommandError, Result};

/// A command resolved from the parsed CLI arguments.
pub enum Dispatch<'a> {
    Search(&'a str),
    FilterRides {
        query: &'a str,
        rides: &'a Path,
        me: Option<&'a str>,
    },
    Suggest(&'a str),
    Schedule(&'a ScheduleCommands),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Resolves the command to run.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Search {
                query,
                rides: Some(rides),
                me,
            }) => Self::FilterRides {
                query,
                rides,
                me: me.as_deref(),
            },
            Some(Commands::Search { query, .. }) => Self::Search(query),
            Some(Commands::Suggest { partial }) => Self::Suggest(partial),
            Some(Commands::Schedule { command }) => Self::Schedule(command),
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }

    /// Runs the command.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Search(query) => commands::search::execute_search(ctx, query),
            Self::FilterRides { query, rides, me } => {
                let opts = commands::search::FilterRidesOptions {
                    query,
                    rides,
                    me: *me,
                };
                commands::search::execute_filter_rides(ctx, &opts)
            }
            Self::Suggest(partial) => commands::search::execute_suggest(ctx, partial),
            Self::Schedule(command) => dispatch_schedule(ctx, command),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ride - search filters and ride schedules");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch schedule subcommands.
fn dispatch_schedule(ctx: &CommandContext, command: &ScheduleCommands) -> Result<()> {
    match command {
        ScheduleCommands::Parse { expression } => {
            commands::schedule::execute_parse(ctx, expression)
        }
        ScheduleCommands::Show { record } => {
            commands::schedule::execute_show(ctx, record.as_deref())
        }
        ScheduleCommands::Next {
            expression,
            from,
            count,
        } => {
            let opts = commands::schedule::ScheduleNextOptions {
                expression,
                from: from.as_deref(),
                count: *count,
            };
            commands::schedule::execute_next(ctx, &opts)
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
