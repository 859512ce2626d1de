use std::fmt;

use epi_ir::ElementRef;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub element: ElementRef,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the offending declaration).
    pub fn primary(element: ElementRef, message: impl Into<String>) -> Self {
        Label {
            element,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(element: ElementRef, message: impl Into<String>) -> Self {
        Label {
            element,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to explain a problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Declarations involved, primary first by convention.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Human-readable suggestions for fixing the problem.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Create a new informational note.
    pub fn note(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Note)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the diagnostic to the offending declaration.
    pub fn with_label(mut self, element: ElementRef, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(element, message));
        self
    }

    /// Point at a related declaration.
    pub fn with_secondary_label(mut self, element: ElementRef, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(element, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the problem.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The declaration of the first primary label.
    pub fn primary_element(&self) -> Option<&ElementRef> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| &l.element)
    }

    /// Check if this is an error (vs warning/note).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {}: {}", marker, label.element, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
