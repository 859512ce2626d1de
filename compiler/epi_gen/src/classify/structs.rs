use epi_ir::TypeRef;

use super::{log_struct_statement, Classifier, LogSite};
use crate::GenContext;

/// Types carrying a struct descriptor (`public static ... struct`).
pub struct StructClassifier;

impl Classifier for StructClassifier {
    fn name(&self) -> &'static str {
        "struct"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        cx.struct_descriptor(ty).is_some()
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let descriptor = cx.struct_descriptor(site.ty)?;
        Some(log_struct_statement(site, site.access, &descriptor))
    }
}
