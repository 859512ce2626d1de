//! Shared fixtures for unit tests.

use epi_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use epi_ir::{DeclGraph, TypeDecl};

use crate::{build_registry, collect_roots, GenContext, GeneratorConfig, LoggableType};

/// The prelude plus `decls`.
pub(crate) fn graph(decls: Vec<TypeDecl>) -> DeclGraph {
    match DeclGraph::from_decls(decls) {
        Ok(graph) => graph,
        Err(err) => panic!("test graph is invalid: {err}"),
    }
}

/// Run `f` against a context built the way the pipeline builds it, with the
/// default configuration and an unlimited queue.
pub(crate) fn with_context<R>(
    graph: &DeclGraph,
    f: impl FnOnce(&GenContext<'_>, &[LoggableType<'_>], &mut DiagnosticQueue) -> R,
) -> R {
    with_config(graph, &GeneratorConfig::default(), f)
}

/// Like [`with_context`], with a custom configuration.
pub(crate) fn with_config<R>(
    graph: &DeclGraph,
    config: &GeneratorConfig,
    f: impl FnOnce(&GenContext<'_>, &[LoggableType<'_>], &mut DiagnosticQueue) -> R,
) -> R {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let roots = collect_roots(graph);
    let recorders = build_registry(graph, &mut queue);
    let cx = GenContext::new(graph, config, &roots, recorders, &mut queue);
    f(&cx, &roots, &mut queue)
}

/// Codes of the queued diagnostics, in order.
pub(crate) fn codes(queue: &mut DiagnosticQueue) -> Vec<ErrorCode> {
    queue.flush().iter().map(|diag: &Diagnostic| diag.code).collect()
}
