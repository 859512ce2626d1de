use epi_ir::{known, TypeRef};

use super::{log_statement, Classifier, LogSite};
use crate::GenContext;

/// Primitive suppliers and the method that reads each one.
const SUPPLIERS: [(&str, &str); 4] = [
    (known::BOOLEAN_SUPPLIER, "getAsBoolean"),
    (known::INT_SUPPLIER, "getAsInt"),
    (known::LONG_SUPPLIER, "getAsLong"),
    (known::DOUBLE_SUPPLIER, "getAsDouble"),
];

/// Zero-argument primitive suppliers. The supplier is invoked and its result
/// logged, so this classifier rewrites the access expression itself.
pub struct SupplierClassifier;

impl SupplierClassifier {
    fn getter(cx: &GenContext<'_>, ty: &TypeRef) -> Option<&'static str> {
        SUPPLIERS
            .iter()
            .find(|(supplier, _)| cx.graph.is_subtype_ref(ty, supplier))
            .map(|(_, getter)| *getter)
    }
}

impl Classifier for SupplierClassifier {
    fn name(&self) -> &'static str {
        "supplier"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        Self::getter(cx, ty).is_some()
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        let getter = Self::getter(cx, site.ty)?;
        Some(log_statement(site, &format!("{}.{getter}()", site.access)))
    }
}
