//! Command handlers.
//!
//! Each submodule implements one subcommand. Handlers return the process
//! [`Exit`] status and leave printing of a [`CliError`] to `main`.

use std::io::{self, IsTerminal};

use epi_gen::GenerationOutcome;

use crate::cli::{Command, OutputFormat, ReportArgs};
use crate::{render, CliError};

mod check;
mod explain;
mod generate;

pub use check::check;
pub use explain::explain;
pub use generate::generate;

/// Process exit status of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Usage, input or configuration failure.
    Failure,
    /// The pass reported at least one error diagnostic.
    Diagnostics,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::Diagnostics => 2,
        }
    }

    fn from_outcome(outcome: &GenerationOutcome) -> Self {
        if outcome.has_errors() {
            Exit::Diagnostics
        } else {
            Exit::Success
        }
    }
}

impl From<Exit> for std::process::ExitCode {
    fn from(exit: Exit) -> Self {
        std::process::ExitCode::from(exit.code())
    }
}

/// Dispatch a parsed command.
pub fn run(command: Command) -> Result<Exit, CliError> {
    match command {
        Command::Generate(args) => generate(&args),
        Command::Check(args) => check(&args),
        Command::Explain { code } => explain(&code),
    }
}

/// Report a pass: terminal diagnostics go to stderr, JSON to stdout.
fn report(outcome: &GenerationOutcome, args: &ReportArgs) {
    match args.format {
        OutputFormat::Terminal => {
            let stderr = io::stderr();
            let is_tty = stderr.is_terminal();
            render(
                stderr.lock(),
                &outcome.diagnostics,
                args.format,
                args.color.into(),
                is_tty,
            );
        }
        OutputFormat::Json => render(
            io::stdout().lock(),
            &outcome.diagnostics,
            args.format,
            args.color.into(),
            false,
        ),
    }
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
