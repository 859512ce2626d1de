//! Diagnostic queue for collecting, deduplicating, and limiting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical reports against the same declaration
//! - `ErrorGuaranteed` proof that errors were emitted
//!
//! Diagnostics come out in the order they were reported. The generator walks
//! types and members in a deterministic order, so reporting order is stable
//! across runs.

use rustc_hash::FxHashSet;

use epi_ir::ElementRef;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed, Severity};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical in code, element and message to a queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting diagnostics from every generator stage.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(diagnostic);
/// // ... add more diagnostics
/// let diagnostics = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    /// Collected diagnostics, in reporting order.
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Count of warnings.
    warning_count: usize,
    /// Errors rejected because the limit was reached.
    dropped_errors: usize,
    /// `(code, element, message)` triples already queued.
    seen: FxHashSet<(ErrorCode, Option<ElementRef>, String)>,
    /// Configuration.
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            if diag.is_error() {
                self.dropped_errors += 1;
            }
            return false;
        }

        if self.config.deduplicate {
            let key = (
                diag.code,
                diag.primary_element().cloned(),
                diag.message.clone(),
            );
            if !self.seen.insert(key) {
                return false;
            }
        }

        match diag.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }
        self.diagnostics.push(diag);
        true
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// The returned `ErrorGuaranteed` stands even when the diagnostic itself
    /// was filtered, because filtering only happens once an equivalent error
    /// (or the error limit) is already on record.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a {}", diag.severity);
        self.push(diag);
        ErrorGuaranteed::new()
    }

    /// Queue every diagnostic from an iterator.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diag in diagnostics {
            self.push(diag);
        }
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the number of warnings collected.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Return all queued diagnostics and reset the queue.
    ///
    /// When errors were dropped at the limit, a closing E9002 diagnostic is
    /// appended so the truncation is visible.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        if self.dropped_errors > 0 {
            result.push(too_many_errors(self.config.error_limit, self.dropped_errors));
        }

        self.error_count = 0;
        self.warning_count = 0;
        self.dropped_errors = 0;
        self.seen.clear();

        result
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, dropped: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!(
            "error limit of {limit} reached; {dropped} further error{} not shown",
            if dropped == 1 { "" } else { "s" }
        ))
        .with_note("raise `error_limit` in epic.toml or EPIC_ERROR_LIMIT (0 = unlimited)")
}
