//! Codes for all generator diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the stage that reports it. Used for `epic explain` lookups.

use std::fmt;

/// Codes for all generator diagnostics.
///
/// Format: E#### (errors), W#### (warnings), N#### (notes). The first digit
/// indicates the stage:
/// - x1xxx: Member validation
/// - x2xxx: Custom recorder registration
/// - x3xxx: Emission
/// - x9xxx: Internal
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum ErrorCode {
    // Validation Errors (E1xxx)
    /// Member opted in to logging but its type is not loggable
    E1001,
    /// Logged method is not public
    E1002,
    /// Logged method is static
    E1003,
    /// Logged method returns no value
    E1004,
    /// Logged method takes parameters
    E1005,

    // Registry Errors (E2xxx)
    /// Custom recorder has no public no-argument constructor
    E2001,
    /// Custom recorder declares its own type parameters
    E2002,
    /// Custom recorder is not a `ClassSpecificLogger` of its target
    E2003,
    /// More than one custom recorder registered for a type
    E2004,

    // Emission Errors (E3xxx)
    /// Generated unit could not be written
    E3001,
    /// Two loggable types resolve to the same generated logger name
    E3002,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9002,

    // Validation Warnings (W1xxx)
    /// Blank log key override
    W1001,
    /// Display name has no identifier characters
    W1002,
    /// Static field marked for logging
    W1003,
    /// Member both opted in to and excluded from logging
    W1004,

    // Validation Notes (N1xxx)
    /// Member excluded from logs because its type is not loggable
    N1001,
}

impl ErrorCode {
    /// All code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E9002,
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::W1003,
        ErrorCode::W1004,
        ErrorCode::N1001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E9002 => "E9002",
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::W1003 => "W1003",
            ErrorCode::W1004 => "W1004",
            ErrorCode::N1001 => "N1001",
        }
    }

    /// Check if this is a member validation code (x1xxx range).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::W1001
                | ErrorCode::W1002
                | ErrorCode::W1003
                | ErrorCode::W1004
                | ErrorCode::N1001
        )
    }

    /// Check if this is a custom recorder registration error (E2xxx range).
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004
        )
    }

    /// Check if this is an emission error (E3xxx range).
    pub fn is_emission_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9002)
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Check if this is a note code (Nxxxx range).
    pub fn is_note(&self) -> bool {
        self.as_str().starts_with('N')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E2001"` or `"n1001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
