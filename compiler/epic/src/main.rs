//! Epilogue Generator CLI

use std::process::ExitCode;

use clap::Parser;
use epic::{Cli, Exit};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                Exit::Failure.into()
            } else {
                Exit::Success.into()
            };
        }
    };

    if let Err(err) = epic::init_tracing(cli.verbose) {
        eprintln!("error: {err}");
        return Exit::Failure.into();
    }

    match epic::run(cli.command) {
        Ok(exit) => exit.into(),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            Exit::Failure.into()
        }
    }
}
