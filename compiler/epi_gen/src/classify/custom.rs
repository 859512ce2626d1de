use epi_ir::TypeRef;

use super::{nested_update, Classifier, LogSite};
use crate::GenContext;

/// Types with a registered custom recorder.
pub struct CustomRecorderClassifier;

impl Classifier for CustomRecorderClassifier {
    fn name(&self) -> &'static str {
        "custom-recorder"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        ty.as_declared()
            .is_some_and(|declared| cx.recorder_for(&declared.name).is_some())
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let declared = site.ty.as_declared()?;
        let binding = cx.recorder_for(&declared.name)?;
        Some(nested_update(&binding.field, site))
    }
}
