//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use epi_diagnostic::emitter::ColorMode;

/// Top-level parser for the `epic` binary.
#[derive(Debug, Parser)]
#[command(name = "epic", version, about = "Generate Epilogue loggers from a declaration graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Debug logging (overridden by EPIC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate every logger and the aggregate registry
    Generate(GenerateArgs),
    /// Validate the declarations without writing anything
    Check(CheckArgs),
    /// Show the documentation of a diagnostic code
    Explain {
        /// Code such as E1001
        code: String,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Declaration graph JSON file
    pub graph: PathBuf,

    /// Directory receiving the generated units
    #[arg(short, long)]
    pub out: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Declaration graph JSON file
    pub graph: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Options shared by every command that runs the generator.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Configuration file (defaults to ./epic.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// When to color terminal diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, on stderr
    Terminal,
    /// JSON array, on stdout
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}
