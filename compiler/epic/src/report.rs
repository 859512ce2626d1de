//! Diagnostic rendering.

use std::io::Write;

use epi_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use epi_diagnostic::Diagnostic;

use crate::cli::OutputFormat;

/// Render every diagnostic of a pass to `writer`.
///
/// Terminal output ends with an error/warning summary when there is anything
/// to summarize. JSON output is always one well-formed array.
pub fn render<W: Write>(
    writer: W,
    diagnostics: &[Diagnostic],
    format: OutputFormat,
    color: ColorMode,
    is_tty: bool,
) {
    match format {
        OutputFormat::Terminal => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty);
            emitter.emit_all(diagnostics);
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            let warnings = diagnostics.iter().filter(|d| d.is_warning()).count();
            if errors + warnings > 0 {
                emitter.emit_summary(errors, warnings);
            }
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
        }
    }
}
