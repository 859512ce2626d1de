use epi_ir::{known, TypeRef};

use super::{element_log_statement, is_loggable_element, Classifier, LogSite};
use crate::GenContext;

/// Collections of strings or structs.
///
/// Collections of boxed primitives are never loggable; only raw primitive
/// arrays are.
pub struct CollectionClassifier;

impl CollectionClassifier {
    /// The element type, as seen through the `Collection<E>` supertype.
    fn element(cx: &GenContext<'_>, ty: &TypeRef) -> Option<TypeRef> {
        let declared = ty.as_declared()?;
        let collection = cx.graph.find_supertype(declared, known::COLLECTION)?;
        match collection.args.as_slice() {
            [element] => Some(element.clone()),
            _ => None,
        }
    }
}

impl Classifier for CollectionClassifier {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        Self::element(cx, ty).is_some_and(|element| is_loggable_element(cx, &element, false))
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let element = Self::element(cx, site.ty)?;
        Some(element_log_statement(cx, site, &element))
    }
}
