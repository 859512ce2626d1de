//! Diagnostic system for generator error reporting.
//!
//! Every problem the generator finds is reported as a `Diagnostic`:
//! - Error codes for searchability (`epic explain E1001`)
//! - Clear messages (what went wrong)
//! - A primary element (which declaration is at fault)
//! - Notes and suggestions (why, and how to fix it)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. Stages that halt generation return
//! `Result<_, ErrorGuaranteed>`, so a halt can never happen silently.
//!
//! ```text
//! // Can only get ErrorGuaranteed by emitting an error
//! let guarantee = queue.emit_error(diagnostic);
//!
//! fn validate(..) -> Result<(), ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
