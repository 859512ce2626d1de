use epi_ir::{known, TypeRef};

use super::{log_statement, Classifier, LogSite};
use crate::GenContext;

/// Physical quantities: any `Measure` subtype.
pub struct MeasureClassifier;

impl Classifier for MeasureClassifier {
    fn name(&self) -> &'static str {
        "measure"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        cx.graph.is_subtype_ref(ty, known::MEASURE)
    }

    fn emit(&self, _cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        Some(log_statement(site, site.access))
    }
}
