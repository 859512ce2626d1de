use epi_ir::TypeRef;

use super::{log_statement, Classifier, LogSite};
use crate::GenContext;

/// Enum types. The backend records the constant's name.
pub struct EnumClassifier;

impl Classifier for EnumClassifier {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        cx.graph.is_enum(ty)
    }

    fn emit(&self, _cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        Some(log_statement(site, site.access))
    }
}
