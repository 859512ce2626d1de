//! Driver errors.

use std::io;
use std::path::PathBuf;

use epi_diagnostic::ErrorCode;
use epi_ir::GraphError;
use thiserror::Error;

use crate::ConfigError;

/// A failure that stops the driver before or outside a generation pass.
///
/// Problems in the declarations themselves are diagnostics, not `CliError`s.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not valid declaration graph JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{}` is not a usable declaration graph: {source}", path.display())]
    Graph {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown diagnostic code `{0}` (codes look like E1001, W1001 or N1001)")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    Undocumented(ErrorCode),

    #[error("could not initialize logging: {0}")]
    Tracing(String),
}
