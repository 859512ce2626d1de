use epi_ir::TypeRef;

use super::{log_statement, Classifier, LogSite};
use crate::GenContext;

/// The eight primitive kinds and `String`.
pub struct PrimitiveClassifier;

impl Classifier for PrimitiveClassifier {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn is_loggable(&self, _cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        matches!(ty, TypeRef::Primitive(_)) || ty.is_string()
    }

    fn emit(&self, _cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        Some(log_statement(site, site.access))
    }
}
