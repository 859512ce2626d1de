use epi_ir::TypeRef;

use super::{nested_update, Classifier, LogSite};
use crate::GenContext;

/// Types that have a generated logger of their own.
pub struct NestedLoggableClassifier;

impl Classifier for NestedLoggableClassifier {
    fn name(&self) -> &'static str {
        "nested-loggable"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        ty.as_declared()
            .is_some_and(|declared| cx.is_loggable_type(&declared.name))
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let declared = site.ty.as_declared()?;
        let unit = cx.unit_for(&declared.name)?;
        Some(nested_update(&unit.field, site))
    }
}
