//! The `explain` command: display documentation for diagnostic codes.

use epi_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

use super::Exit;

/// Print the documentation for a code such as `E1001`.
pub fn explain(code: &str) -> Result<Exit, CliError> {
    let doc = lookup(code)?;
    println!("{doc}");
    Ok(Exit::Success)
}

/// Find the documentation for a code, case-insensitively.
pub(crate) fn lookup(code: &str) -> Result<&'static str, CliError> {
    let parsed: ErrorCode = code
        .parse()
        .map_err(|()| CliError::UnknownCode(code.to_string()))?;
    ErrorDocs::get(parsed).ok_or(CliError::Undocumented(parsed))
}
