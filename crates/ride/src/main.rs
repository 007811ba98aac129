use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                eprintln!("{}", error_json(&e));
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::new(cli, &config);
    Dispatch::from_cli(cli).execute(&ctx)
}

/// Renders an error as the JSON object printed with `--json`.
fn error_json(e: &CommandError) -> String {
    let value = serde_json::json!({
        "error": {
            "code": error_code(e),
            "message": e.to_string(),
        }
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Schedule(_) => "SCHEDULE_ERROR",
        CommandError::Input(_) => "INPUT_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Schedule(_) => ExitCode::from(1),
        CommandError::Input(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_filters::ScheduleError;

    #[test]
    fn test_error_codes() {
        let schedule = CommandError::Schedule(ScheduleError::EmptyExpression);
        assert_eq!(error_code(&schedule), "SCHEDULE_ERROR");
        assert_eq!(error_code(&CommandError::Input("x".into())), "INPUT_ERROR");
        assert_eq!(error_code(&CommandError::Config("x".into())), "CONFIG_ERROR");
        let io = CommandError::Io(std::io::Error::other("closed"));
        assert_eq!(error_code(&io), "IO_ERROR");
    }

    #[test]
    fn test_error_json_shape() {
        let e = CommandError::Schedule(ScheduleError::invalid_interval("0"));
        let value: serde_json::Value = serde_json::from_str(&error_json(&e)).unwrap();
        assert_eq!(value["error"]["code"], "SCHEDULE_ERROR");
        assert_eq!(value["error"]["message"], e.to_string());
    }
}
