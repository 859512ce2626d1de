//! Embedded error documentation for `epic explain` support.
//!
//! Each diagnostic code has a markdown documentation file that explains the
//! problem, shows an example, and provides a solution. These are embedded at
//! compile time and can be accessed via `ErrorDocs::get()`.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `XNNNN.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
///
/// Use `ErrorDocs::get(code)` to retrieve the documentation for a code.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for a code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if a code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

/// Embedded documentation for each code.
static DOCS: &[(ErrorCode, &str)] = &[
    // Validation errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    (ErrorCode::E1004, include_str!("E1004.md")),
    (ErrorCode::E1005, include_str!("E1005.md")),
    // Registry errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    (ErrorCode::E2002, include_str!("E2002.md")),
    (ErrorCode::E2003, include_str!("E2003.md")),
    (ErrorCode::E2004, include_str!("E2004.md")),
    // Emission errors (E3xxx)
    (ErrorCode::E3001, include_str!("E3001.md")),
    (ErrorCode::E3002, include_str!("E3002.md")),
    // Internal errors (E9xxx)
    (ErrorCode::E9002, include_str!("E9002.md")),
    // Warnings (W1xxx)
    (ErrorCode::W1001, include_str!("W1001.md")),
    (ErrorCode::W1002, include_str!("W1002.md")),
    (ErrorCode::W1003, include_str!("W1003.md")),
    (ErrorCode::W1004, include_str!("W1004.md")),
    // Notes (N1xxx)
    (ErrorCode::N1001, include_str!("N1001.md")),
];
