//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. `RIDE_LOG`
//! takes an `EnvFilter` directive (e.g. `ride_filters=trace`) and overrides
//! the level picked from `--verbose` / `--quiet`.

use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "RIDE_LOG";

/// Returns the log level used when `RIDE_LOG` is not set.
fn default_directive(cli: &Cli) -> &'static str {
    if cli.quiet {
        "off"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global tracing subscriber.
pub fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cli)));
    // Fails only when a subscriber is already installed, as when tests
    // initialize logging more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
