use epi_ir::{known, TypeRef};

use super::{Classifier, LogSite};
use crate::GenContext;

/// The `Sendable` catch-all, walked generically through `logSendable`.
///
/// Subtypes of a configured exclusion (commands and subsystems by default)
/// are accepted but not logged, so they neither flood the log nor get
/// reported as unloggable.
pub struct SendableClassifier;

impl SendableClassifier {
    fn is_excluded(cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        cx.config
            .sendable_exclusions
            .iter()
            .any(|excluded| cx.graph.is_subtype_ref(ty, excluded))
    }
}

impl Classifier for SendableClassifier {
    fn name(&self) -> &'static str {
        "sendable"
    }

    fn is_loggable(&self, cx: &GenContext<'_>, ty: &TypeRef) -> bool {
        cx.graph.is_subtype_ref(ty, known::SENDABLE)
    }

    fn emit(&self, cx: &GenContext<'_>, site: &LogSite<'_>) -> Option<String> {
        if Self::is_excluded(cx, site.ty) {
            tracing::trace!(key = site.key, ty = %site.ty, "sendable excluded");
            return None;
        }
        Some(format!(
            "logSendable(backend.getNested({}), {});",
            site.key_literal(),
            site.access
        ))
    }
}
