//! The per-pass generation context.
//!
//! Everything a stage needs to know about the pass (the graph, the
//! configuration, which types are loggable, which custom recorders are bound
//! and what every generated logger is called) is carried here and passed
//! down explicitly. Nothing is global, so independent passes never interact.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use epi_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use epi_ir::{DeclGraph, ElementRef, TypeRef};

use crate::classify::{Classifier, ClassifierChain, ClassifierVerdict, LogSite};
use crate::naming;
use crate::registry::{RecorderBinding, RecorderRegistry};
use crate::{GeneratorConfig, LoggableType};

/// Where the logger for one loggable type is generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitName {
    pub package: String,
    /// Simple class name, e.g. `ArmLogger`.
    pub simple: String,
    /// Instance field in the aggregate, e.g. `armLogger`.
    pub field: String,
}

impl UnitName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        let simple = simple.into();
        UnitName {
            package: package.into(),
            field: naming::recorder_field_name(&simple),
            simple,
        }
    }

    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

/// Context threaded through every stage of one generation pass.
pub struct GenContext<'g> {
    pub graph: &'g DeclGraph,
    pub config: &'g GeneratorConfig,
    pub recorders: RecorderRegistry,
    /// Logger names, keyed by the qualified name of the logged type.
    units: FxHashMap<String, UnitName>,
    classifiers: ClassifierChain,
}

impl<'g> GenContext<'g> {
    /// Build the context for a set of roots.
    ///
    /// Resolves every root's logger name. A display name that cannot form an
    /// identifier falls back to the default name with a W1002 warning.
    pub fn new(
        graph: &'g DeclGraph,
        config: &'g GeneratorConfig,
        roots: &[LoggableType<'g>],
        recorders: RecorderRegistry,
        queue: &mut DiagnosticQueue,
    ) -> Self {
        let mut units = FxHashMap::default();
        for root in roots {
            let simple = naming::generated_unit_name(root.decl).unwrap_or_else(|err| {
                queue.push(
                    Diagnostic::warning(ErrorCode::W1002)
                        .with_message(err.to_string())
                        .with_label(root.element(), "display name declared here")
                        .with_note(format!(
                            "the logger is named `{}` instead",
                            naming::default_unit_name(root.decl)
                        )),
                );
                naming::default_unit_name(root.decl)
            });
            units.insert(
                root.qualified_name(),
                UnitName::new(root.decl.package.clone(), simple),
            );
        }

        GenContext {
            graph,
            config,
            recorders,
            units,
            classifiers: ClassifierChain::standard(),
        }
    }

    /// Whether the type has a generated logger of its own.
    pub fn is_loggable_type(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Logger generated for a loggable type.
    pub fn unit_for(&self, name: &str) -> Option<&UnitName> {
        self.units.get(name)
    }

    /// Custom recorder bound to a type.
    pub fn recorder_for(&self, name: &str) -> Option<&RecorderBinding> {
        self.recorders.get(name)
    }

    pub fn classifiers(&self) -> &ClassifierChain {
        &self.classifiers
    }

    /// The first classifier that accepts the type.
    pub fn classify(&self, ty: &TypeRef) -> Option<&dyn Classifier> {
        self.classifiers.find(self, ty).map(|(_, classifier)| classifier)
    }

    /// Whether any classifier accepts the type.
    pub fn is_loggable(&self, ty: &TypeRef) -> bool {
        self.classifiers.find(self, ty).is_some()
    }

    /// Run the chain for one log site.
    pub fn verdict(&self, site: &LogSite<'_>) -> ClassifierVerdict {
        self.classifiers.verdict(self, site)
    }

    /// `<Type>.struct` for struct-serializable declared types.
    pub fn struct_descriptor(&self, ty: &TypeRef) -> Option<String> {
        let decl = self.graph.resolve(ty)?;
        decl.is_struct_serializable()
            .then(|| format!("{}.{}", decl.qualified_name(), epi_ir::known::STRUCT_FIELD))
    }

    /// Report aggregate fields claimed by more than one logger.
    ///
    /// Generated loggers and custom recorders share the aggregate's field
    /// namespace; the first claimant (in root order, then recorder order)
    /// keeps the name and every later one is an E3002 error.
    #[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
    pub fn check_name_collisions(
        &self,
        roots: &[LoggableType<'_>],
        queue: &mut DiagnosticQueue,
    ) -> Result<(), ErrorGuaranteed> {
        let mut claims: BTreeMap<&str, ElementRef> = BTreeMap::new();
        let mut result = Ok(());

        let unit_claims = roots.iter().filter_map(|root| {
            let unit = self.units.get(&root.qualified_name())?;
            Some((unit.field.as_str(), root.element(), unit.qualified()))
        });
        let recorder_claims = self.recorders.recorders().into_iter().map(|binding| {
            (
                binding.field.as_str(),
                ElementRef::ty(&binding.recorder),
                binding.recorder.clone(),
            )
        });

        for (field, element, logger) in unit_claims.chain(recorder_claims) {
            if let Some(first) = claims.get(field) {
                tracing::debug!(field, %element, "aggregate field collision");
                result = Err(queue.emit_error(
                    Diagnostic::error(ErrorCode::E3002)
                        .with_message(format!(
                            "logger `{logger}` would reuse the aggregate field `{field}`"
                        ))
                        .with_label(element.clone(), "logged here")
                        .with_secondary_label(first.clone(), "field first claimed here")
                        .with_suggestion(format!(
                            "give `{element}` a distinct display name with @Logged(name = \"...\")"
                        )),
                ));
            } else {
                claims.insert(field, element);
            }
        }

        result
    }
}
