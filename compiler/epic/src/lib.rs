//! Epilogue Generator CLI
//!
//! Reads a JSON declaration graph, layers configuration from `epic.toml` and
//! `EPIC_*` environment variables, runs the generator and writes every unit
//! under an output directory.
//!
//! # Commands
//!
//! - `generate`: full pass, units written to `--out`
//! - `check`: validation only, nothing written
//! - `explain`: print the documentation of a diagnostic code

pub mod cli;
pub mod commands;
mod config;
mod error;
mod input;
mod report;
mod sink;

pub use cli::{Cli, Command};
pub use commands::{run, Exit};
pub use config::{load_config, ConfigError, CONFIG_FILE, ENV_PREFIX};
pub use error::CliError;
pub use input::read_graph;
pub use report::render;
pub use sink::DirectorySink;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "EPIC_LOG";

/// Install the global tracing subscriber.
///
/// `EPIC_LOG` takes a full `EnvFilter` directive. Without it, only warnings
/// are shown, or debug output with `--verbose`.
pub fn init_tracing(verbose: bool) -> Result<(), CliError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init()
        .map_err(|err| CliError::Tracing(err.to_string()))
}
