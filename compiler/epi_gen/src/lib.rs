//! Epilogue Logger Generator
//!
//! Turns `Logged` markings in a declaration graph into logger source code.
//!
//! # Architecture
//!
//! One pass runs these stages in order, all sharing a [`GenContext`]:
//!
//! 1. **Collect**: find the root types that get a logger
//! 2. **Registry**: validate and bind custom recorders
//! 3. **Validate**: check every member against the marking rules
//! 4. **Emit**: one logger per root, then the aggregate registry
//!
//! Validation errors halt the pass before emission. Registry errors drop the
//! offending recorder and the pass continues.
//!
//! # Modules
//!
//! - [`naming`]: log keys, logger names and aggregate field names
//! - [`classify`]: the ordered classifier chain deciding how a type is logged
//! - [`emit`]: source emission and unit sinks
//! - [`pipeline`]: the `generate` and `check` entry points

pub mod classify;
mod collect;
mod config;
mod context;
pub mod emit;
mod model;
pub mod naming;
pub mod pipeline;
mod registry;
mod validate;

pub use classify::{Classifier, ClassifierChain, ClassifierVerdict, LogSite};
pub use collect::{collect_roots, is_root};
pub use config::GeneratorConfig;
pub use context::{GenContext, UnitName};
pub use emit::{EmitError, GeneratedUnit, MemorySink, UnitSink};
pub use model::{LoggableMember, LoggableType, MemberKind};
pub use pipeline::{check, generate, GenerationOutcome};
pub use registry::{build_registry, RecorderBinding, RecorderRegistry};
pub use validate::validate;

#[cfg(test)]
mod test_support;
