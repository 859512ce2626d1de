//! Human-readable rendering for a terminal.
//!
//! Each diagnostic renders as a `severity[CODE]: message` header, one line
//! per labeled element, then `= note:` and `= help:` trailers. ANSI styling
//! is applied only when the resolved [`ColorMode`] allows it.

use std::io::Write;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Styles the emitter paints with.
#[derive(Clone, Copy)]
enum Style {
    Severity(Severity),
    Emphasis,
    Secondary,
    Help,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Severity(Severity::Error) => "\x1b[1;31m",
            Style::Severity(Severity::Warning) => "\x1b[1;33m",
            Style::Severity(Severity::Note) => "\x1b[1;36m",
            Style::Emphasis => "\x1b[1m",
            Style::Secondary => "\x1b[1;34m",
            Style::Help => "\x1b[1;32m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// When to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as plain or ANSI-styled text.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colors {
            format!("{}{text}{RESET}", style.ansi())
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}

/// `1 warning`, `3 warnings`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = Style::Severity(diagnostic.severity);
        let header = format!(
            "{}{}: {}",
            self.paint(diagnostic.severity.as_str(), severity),
            self.paint(&format!("[{}]", diagnostic.code.as_str()), Style::Emphasis),
            diagnostic.message
        );
        self.line(&header);

        for label in &diagnostic.labels {
            let (marker, style) = if label.is_primary {
                ("-->", severity)
            } else {
                ("   ", Style::Secondary)
            };
            let rendered = format!(
                "  {marker} {}: {}",
                self.paint(&label.element.to_string(), Style::Emphasis),
                self.paint(&label.message, style)
            );
            self.line(&rendered);
        }

        let trailers = diagnostic
            .notes
            .iter()
            .map(|note| ("note", Style::Emphasis, note))
            .chain(
                diagnostic
                    .suggestions
                    .iter()
                    .map(|suggestion| ("help", Style::Help, suggestion)),
            );
        for (kind, style, text) in trailers {
            let rendered = format!("  = {}: {text}", self.paint(kind, style));
            self.line(&rendered);
        }

        self.line("");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let summary = match (error_count, warning_count) {
            (0, 0) => return,
            (0, warnings) => format!(
                "{}: {} emitted",
                self.paint("warning", Style::Severity(Severity::Warning)),
                counted(warnings, "warning")
            ),
            (errors, warnings) => {
                let cause = if errors == 1 {
                    "previous error".to_string()
                } else {
                    counted(errors, "previous error")
                };
                let tail = if warnings > 0 {
                    format!("; {} emitted", counted(warnings, "warning"))
                } else {
                    String::new()
                };
                format!(
                    "{}: aborting due to {cause}{tail}",
                    self.paint("error", Style::Severity(Severity::Error))
                )
            }
        };
        self.line(&summary);
    }
}
