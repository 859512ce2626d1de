//! Type classifiers.
//!
//! Each classifier answers two questions about a member's declared type:
//! can it be logged, and what statement logs it. The chain asks them in a
//! fixed order and the first one that accepts the type decides the
//! statement, so the order is the precedence policy:
//!
//! 1. nested loggable type
//! 2. custom recorder
//! 3. array
//! 4. collection
//! 5. enum
//! 6. measure
//! 7. primitive or string
//! 8. supplier
//! 9. struct-serializable
//! 10. sendable
//!
//! Matching is capability based (subtyping, struct descriptors), so the
//! chain is a list of predicates rather than a map keyed by type.

mod array;
mod collection;
mod custom;
mod enumeration;
mod measure;
mod nested;
mod primitive;
mod sendable;
mod structs;
mod supplier;

pub use array::ArrayClassifier;
pub use collection::CollectionClassifier;
pub use custom::CustomRecorderClassifier;
pub use enumeration::EnumClassifier;
pub use measure::MeasureClassifier;
pub use nested::NestedLoggableClassifier;
pub use primitive::PrimitiveClassifier;
pub use sendable::SendableClassifier;
pub use structs::StructClassifier;
pub use supplier::SupplierClassifier;

use epi_ir::{PrimitiveKind, TypeRef};

use crate::emit::java_string;
use crate::GenContext;

/// One place a value is logged: the key, the expression reading the value,
/// and the value's declared type.
#[derive(Copy, Clone, Debug)]
pub struct LogSite<'a> {
    pub key: &'a str,
    pub access: &'a str,
    pub ty: &'a TypeRef,
    /// Spelling of the aggregate class inside the emitting unit.
    pub aggregate: &'a str,
}

impl LogSite<'_> {
    /// The key as a Java string literal.
    pub fn key_literal(&self) -> String {
        java_string(self.key)
    }
}

/// Outcome of running the chain for one log site.
///
/// `matched` with no emission means the type is accepted but deliberately
/// not recorded.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ClassifierVerdict {
    pub matched: bool,
    pub emission: Option<String>,
}

impl ClassifierVerdict {
    pub fn unmatched() -> Self {
        Self::default()
    }

    pub fn matched(emission: Option<String>) -> Self {
        ClassifierVerdict {
            matched: true,
            emission,
        }
    }
}

/// A capability test plus the emission rule for one category of data.
pub trait Classifier {
    /// Short name used in logs and tests.
    fn name(&self) -> &'static str;

    /// Whether a value of this declared type can be logged by this classifier.
    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool;

    /// The statement logging the site, or `None` to accept without logging.
    ///
    /// Only called when `is_loggable` accepted `site.ty`.
    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String>;
}

/// Classifiers in priority order.
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierChain {
    /// The ten standard classifiers in their fixed order.
    pub fn standard() -> Self {
        ClassifierChain {
            classifiers: vec![
                Box::new(NestedLoggableClassifier),
                Box::new(CustomRecorderClassifier),
                Box::new(ArrayClassifier),
                Box::new(CollectionClassifier),
                Box::new(EnumClassifier),
                Box::new(MeasureClassifier),
                Box::new(PrimitiveClassifier),
                Box::new(SupplierClassifier),
                Box::new(StructClassifier),
                Box::new(SendableClassifier),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Classifier names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classifiers.iter().map(|classifier| classifier.name())
    }

    /// The first classifier that accepts the type, with its 1-based priority.
    pub fn find(&self, cx: &GenContext<'_>, ty: &TypeRef) -> Option<(usize, &dyn Classifier)> {
        self.classifiers
            .iter()
            .enumerate()
            .find(|(_, classifier)| classifier.is_loggable(cx, ty))
            .map(|(idx, classifier)| (idx + 1, &**classifier))
    }

    /// Every classifier that accepts the type, by 1-based priority.
    pub fn all_matches(&self, cx: &GenContext<'_>, ty: &TypeRef) -> Vec<usize> {
        self.classifiers
            .iter()
            .enumerate()
            .filter(|(_, classifier)| classifier.is_loggable(cx, ty))
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Classify a site and emit its statement with the winning classifier.
    pub fn verdict(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> ClassifierVerdict {
        let Some((priority, classifier)) = self.find(cx, site.ty) else {
            tracing::trace!(key = site.key, ty = %site.ty, "no classifier matched");
            return ClassifierVerdict::unmatched();
        };
        tracing::trace!(
            key = site.key,
            ty = %site.ty,
            classifier = classifier.name(),
            priority,
            "classified"
        );
        ClassifierVerdict::matched(classifier.emit(cx, site))
    }
}

/// `backend.log("<key>", <value>);`
fn log_statement(site: &LogSite<'_>, value: &str) -> String {
    format!("backend.log({}, {value});", site.key_literal())
}

/// `backend.log("<key>", <value>, <descriptor>);`
fn log_struct_statement(site: &LogSite<'_>, value: &str, descriptor: &str) -> String {
    format!("backend.log({}, {value}, {descriptor});", site.key_literal())
}

/// Delegate to another logger held by the aggregate.
fn nested_update(field: &str, site: &LogSite<'_>) -> String {
    let aggregate = site.aggregate;
    format!(
        "{aggregate}.{field}.tryUpdate(backend.getNested({}), {}, {aggregate}.getConfig().errorHandler);",
        site.key_literal(),
        site.access
    )
}

/// Element types accepted inside arrays (and, without primitives, inside
/// collections): strings and struct-serializable types.
fn is_loggable_element(cx: &GenContext<'_>, ty: &TypeRef, allow_primitives: bool) -> bool {
    match ty {
        TypeRef::Primitive(kind) => allow_primitives && is_array_primitive(*kind),
        TypeRef::Declared(_) => ty.is_string() || cx.struct_descriptor(ty).is_some(),
        TypeRef::Void | TypeRef::Array(_) | TypeRef::TypeVar(_) => false,
    }
}

fn is_array_primitive(kind: PrimitiveKind) -> bool {
    matches!(
        kind,
        PrimitiveKind::Byte
            | PrimitiveKind::Int
            | PrimitiveKind::Long
            | PrimitiveKind::Float
            | PrimitiveKind::Double
            | PrimitiveKind::Boolean
    )
}

/// Emission shared by arrays and collections: struct elements carry their
/// descriptor.
fn element_log_statement(cx: &GenContext<'_>, site: &LogSite<'_>, element: &TypeRef) -> String {
    match cx.struct_descriptor(element) {
        Some(descriptor) => log_struct_statement(site, site.access, &descriptor),
        None => log_statement(site, site.access),
    }
}
