//! Proof that an error was reported.

use std::fmt;

/// Type-level proof that at least one error diagnostic was emitted.
///
/// Cannot be constructed outside this crate except through
/// [`ErrorGuaranteed::from_error_count`], so holding one means an error
/// really is on its way to the user.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Proof from an error count, `None` when no errors were emitted.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

impl std::error::Error for ErrorGuaranteed {}
