//! The generation pipeline.
//!
//! One pass runs: collect roots, build the recorder registry, validate,
//! check aggregate field names, then emit every logger and the aggregate.
//! Validation and naming errors halt before anything is emitted. A unit that
//! cannot be written is reported and skipped; the rest are still attempted.

use epi_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use epi_ir::{DeclGraph, ElementRef};

use crate::collect::collect_roots;
use crate::emit::{emit_aggregate, emit_type_logger, GeneratedUnit, UnitSink};
use crate::registry::build_registry;
use crate::validate::validate;
use crate::{GenContext, GeneratorConfig, LoggableType};

/// Result of one pass.
#[derive(Clone, Debug, Default)]
pub struct GenerationOutcome {
    /// Every diagnostic, in reporting order.
    pub diagnostics: Vec<Diagnostic>,
    /// Qualified names of the units handed to the sink.
    pub units_written: Vec<String>,
    /// Emission was skipped because of errors.
    pub halted: bool,
}

impl GenerationOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Codes of every diagnostic, in reporting order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

/// Run the full pass and write every unit to `sink`.
#[tracing::instrument(level = "debug", skip_all, fields(types = graph.len()))]
pub fn generate(
    graph: &DeclGraph,
    config: &GeneratorConfig,
    sink: &mut dyn UnitSink,
) -> GenerationOutcome {
    let mut queue = DiagnosticQueue::with_config(config.diagnostic_config());
    let roots = collect_roots(graph);
    let (cx, analyzed) = analyze(graph, config, &roots, &mut queue);

    let mut units_written = Vec::new();
    if analyzed.is_ok() {
        for root in &roots {
            let unit = emit_type_logger(&cx, root);
            write(sink, &unit, root.element(), &mut queue, &mut units_written);
        }
        let aggregate = emit_aggregate(&cx, &roots);
        let element = ElementRef::ty(config.aggregate_qualified_name());
        write(sink, &aggregate, element, &mut queue, &mut units_written);
    } else {
        tracing::debug!(errors = queue.error_count(), "generation halted");
    }

    GenerationOutcome {
        diagnostics: queue.flush(),
        units_written,
        halted: analyzed.is_err(),
    }
}

/// Run every check without emitting.
#[tracing::instrument(level = "debug", skip_all, fields(types = graph.len()))]
pub fn check(graph: &DeclGraph, config: &GeneratorConfig) -> GenerationOutcome {
    let mut queue = DiagnosticQueue::with_config(config.diagnostic_config());
    let roots = collect_roots(graph);
    let (_, analyzed) = analyze(graph, config, &roots, &mut queue);
    GenerationOutcome {
        diagnostics: queue.flush(),
        units_written: Vec::new(),
        halted: analyzed.is_err(),
    }
}

/// Registry, context, validation and name checks for a set of roots.
fn analyze<'g>(
    graph: &'g DeclGraph,
    config: &'g GeneratorConfig,
    roots: &[LoggableType<'g>],
    queue: &mut DiagnosticQueue,
) -> (GenContext<'g>, Result<(), ErrorGuaranteed>) {
    let recorders = build_registry(graph, queue);
    let cx = GenContext::new(graph, config, roots, recorders, queue);
    let validated = validate(&cx, roots, queue);
    let named = cx.check_name_collisions(roots, queue);
    (cx, validated.and(named))
}

fn write(
    sink: &mut dyn UnitSink,
    unit: &GeneratedUnit,
    element: ElementRef,
    queue: &mut DiagnosticQueue,
    written: &mut Vec<String>,
) {
    match sink.write_unit(unit) {
        Ok(()) => {
            tracing::debug!(unit = %unit.qualified_name(), "unit written");
            written.push(unit.qualified_name());
        }
        Err(err) => {
            tracing::debug!(unit = %unit.qualified_name(), error = %err, "unit write failed");
            queue.push(
                Diagnostic::error(ErrorCode::E3001)
                    .with_message(format!(
                        "could not write generated unit `{}`",
                        unit.qualified_name()
                    ))
                    .with_label(element, "generated for this type")
                    .with_note(err.to_string()),
            );
        }
    }
}
