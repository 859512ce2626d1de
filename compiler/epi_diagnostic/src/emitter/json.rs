//! JSON Emitter
//!
//! Machine-readable diagnostic output as a JSON array.

use std::io::Write;

use serde::Serialize;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// Wire shape of one diagnostic.
#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    severity: &'static str,
    message: &'a str,
    labels: Vec<JsonLabel<'a>>,
    notes: &'a [String],
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct JsonLabel<'a> {
    element: String,
    message: &'a str,
    primary: bool,
}

impl<'a> From<&'a Label> for JsonLabel<'a> {
    fn from(label: &'a Label) -> Self {
        JsonLabel {
            element: label.element.to_string(),
            message: &label.message,
            primary: label.is_primary,
        }
    }
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        JsonDiagnostic {
            code: diag.code.as_str(),
            severity: diag.severity.as_str(),
            message: &diag.message,
            labels: diag.labels.iter().map(JsonLabel::from).collect(),
            notes: &diag.notes,
            suggestions: &diag.suggestions,
        }
    }
}

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last to produce a well-formed array.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.first { "\n  " } else { ",\n  " };
        self.first = false;
        let _ = write!(self.writer, "{separator}");
        let _ = serde_json::to_writer(&mut self.writer, &JsonDiagnostic::from(diagnostic));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // Consumers count entries themselves.
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
