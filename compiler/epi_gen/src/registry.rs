//! Custom recorder registry.
//!
//! Users register a hand-written `ClassSpecificLogger` for a type with
//! `@CustomLoggerFor(Target.class)`. The registry validates each
//! registration and records at most one recorder per target type.
//!
//! Registrations are processed in order of the recorder's qualified name, so
//! when two recorders claim the same target the winner does not depend on
//! declaration order. Rejected registrations are reported as errors and
//! dropped; generation continues with the rest.

use std::collections::BTreeMap;

use epi_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use epi_ir::{known, DeclGraph, ElementRef, TypeDecl, TypeRef};

use crate::naming;

/// A target type bound to its custom recorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecorderBinding {
    /// Qualified name of the logged type.
    pub target: String,
    /// Qualified name of the recorder type.
    pub recorder: String,
    /// Simple name of the recorder type.
    pub recorder_simple: String,
    /// Instance field holding the recorder in the aggregate.
    pub field: String,
}

impl RecorderBinding {
    fn new(target: String, recorder: &TypeDecl) -> Self {
        let recorder_simple = recorder.simple_name().to_string();
        RecorderBinding {
            target,
            recorder: recorder.qualified_name(),
            field: naming::recorder_field_name(&recorder_simple),
            recorder_simple,
        }
    }
}

/// Accepted recorder bindings, keyed by target type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecorderRegistry {
    bindings: BTreeMap<String, RecorderBinding>,
}

impl RecorderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The binding for a target type.
    pub fn get(&self, target: &str) -> Option<&RecorderBinding> {
        self.bindings.get(target)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.bindings.contains_key(target)
    }

    /// Bindings in target order.
    pub fn iter(&self) -> impl Iterator<Item = &RecorderBinding> {
        self.bindings.values()
    }

    /// One binding per distinct recorder, sorted by aggregate field name.
    ///
    /// A recorder registered for several targets is instantiated once.
    pub fn recorders(&self) -> Vec<&RecorderBinding> {
        let mut by_recorder: BTreeMap<&str, &RecorderBinding> = BTreeMap::new();
        for binding in self.bindings.values() {
            by_recorder.entry(&binding.recorder).or_insert(binding);
        }
        let mut recorders: Vec<_> = by_recorder.into_values().collect();
        recorders.sort_by(|a, b| (&a.field, &a.recorder).cmp(&(&b.field, &b.recorder)));
        recorders
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Insert a binding, or return the existing one for the same target.
    fn insert(&mut self, binding: RecorderBinding) -> Result<(), &RecorderBinding> {
        use std::collections::btree_map::Entry;

        match self.bindings.entry(binding.target.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(binding);
                Ok(())
            }
            Entry::Occupied(existing) => Err(existing.into_mut()),
        }
    }
}

/// Discover, validate and register every custom recorder in the graph.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build_registry(graph: &DeclGraph, queue: &mut DiagnosticQueue) -> RecorderRegistry {
    let mut candidates: Vec<(&TypeDecl, &[TypeRef])> = graph
        .user_types()
        .filter_map(|decl| Some((decl, decl.custom_logger_for.as_deref()?)))
        .collect();
    candidates.sort_by_key(|(decl, _)| decl.qualified_name());

    let mut registry = RecorderRegistry::new();
    for (recorder, targets) in candidates {
        if !check_recorder_shape(recorder, queue) {
            continue;
        }
        for target in targets {
            let Some(target_name) = verify_target(graph, recorder, target, queue) else {
                continue;
            };
            let binding = RecorderBinding::new(target_name, recorder);
            if let Err(winner) = registry.insert(binding) {
                tracing::debug!(
                    logged_type = %target,
                    winner = %winner.recorder,
                    rejected = %recorder.qualified_name(),
                    "duplicate custom recorder"
                );
                queue.push(
                    Diagnostic::error(ErrorCode::E2004)
                        .with_message(format!(
                            "`{}` is already logged by `{}`",
                            winner.target, winner.recorder
                        ))
                        .with_label(recorder.element(), "duplicate registration")
                        .with_secondary_label(
                            ElementRef::ty(&winner.recorder),
                            "first registration, kept",
                        )
                        .with_note("registrations are resolved in qualified-name order"),
                );
                continue;
            }
            tracing::debug!(
                logged_type = %target,
                recorder = %recorder.qualified_name(),
                "custom recorder registered"
            );
        }
    }
    registry
}

/// Constructor and type-parameter checks, reported once per recorder.
fn check_recorder_shape(recorder: &TypeDecl, queue: &mut DiagnosticQueue) -> bool {
    let mut ok = true;
    if !recorder.has_public_no_arg_constructor() {
        queue.push(
            Diagnostic::error(ErrorCode::E2001)
                .with_message(format!(
                    "custom logger `{}` has no public no-argument constructor",
                    recorder.qualified_name()
                ))
                .with_label(recorder.element(), "registered here")
                .with_suggestion("add a public constructor that takes no arguments"),
        );
        ok = false;
    }
    if recorder.is_generic() {
        queue.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message(format!(
                    "custom logger `{}` declares type parameters <{}>",
                    recorder.qualified_name(),
                    recorder.type_params.join(", ")
                ))
                .with_label(recorder.element(), "registered here")
                .with_suggestion("declare a concrete subclass for each target type"),
        );
        ok = false;
    }
    ok
}

/// The target's qualified name, when the recorder really is a
/// `ClassSpecificLogger` of it.
fn verify_target(
    graph: &DeclGraph,
    recorder: &TypeDecl,
    target: &TypeRef,
    queue: &mut DiagnosticQueue,
) -> Option<String> {
    let logged = graph
        .find_supertype(&recorder.as_declared(), known::CLASS_SPECIFIC_LOGGER)
        .and_then(|logger| logger.args.first().cloned());

    let matches = match (target.as_declared(), &logged) {
        (Some(target), Some(logged)) => logged.erasure() == target.name,
        _ => false,
    };
    if matches {
        return Some(target.erasure());
    }

    let found = match &logged {
        Some(logged) => format!("it logs `{logged}`"),
        None => "it does not extend ClassSpecificLogger".to_string(),
    };
    queue.push(
        Diagnostic::error(ErrorCode::E2003)
            .with_message(format!(
                "custom logger `{}` is not a ClassSpecificLogger<{}>",
                recorder.qualified_name(),
                target
            ))
            .with_label(recorder.element(), found)
            .with_suggestion(format!(
                "extend `ClassSpecificLogger<{target}>` or remove `{target}` from the targets"
            )),
    );
    None
}

#[cfg(test)]
mod tests;
