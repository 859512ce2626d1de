use epi_ir::TypeRef;

use super::{element_log_statement, is_loggable_element, Classifier, LogSite};
use crate::GenContext;

/// One-dimensional arrays of loggable primitives, strings or structs.
///
/// Arrays of arrays are never loggable.
pub struct ArrayClassifier;

impl Classifier for ArrayClassifier {
    fn name(&self) -> &'static str {
        "array"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        ty.component()
            .is_some_and(|component| is_loggable_element(cx, component, true))
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let component = site.ty.component()?;
        Some(element_log_statement(cx, site, component))
    }
}
