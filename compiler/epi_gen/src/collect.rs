//! Root collection.
//!
//! A root is a user type that carries `Logged` itself or declares a member
//! carrying it. Every root gets a generated logger.

use epi_ir::{DeclGraph, TypeDecl};

use crate::LoggableType;

/// Every root in the graph, sorted by simple name, ties broken by qualified
/// name.
#[tracing::instrument(level = "debug", skip_all)]
pub fn collect_roots(graph: &DeclGraph) -> Vec<LoggableType<'_>> {
    let mut roots: Vec<LoggableType<'_>> = graph
        .user_types()
        .filter(|decl| is_root(decl))
        .map(LoggableType::from_decl)
        .collect();
    roots.sort_by(|a, b| {
        a.simple_name()
            .cmp(b.simple_name())
            .then_with(|| a.qualified_name().cmp(&b.qualified_name()))
    });
    roots.dedup_by(|a, b| a.qualified_name() == b.qualified_name());
    tracing::debug!(count = roots.len(), "collected roots");
    roots
}

/// Marked directly, or through any field or method.
pub fn is_root(decl: &TypeDecl) -> bool {
    decl.logged.is_some()
        || decl.fields.iter().any(|field| field.logged.is_some())
        || decl.methods.iter().any(|method| method.logged.is_some())
}
