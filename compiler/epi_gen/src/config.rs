//! Generator configuration.

use serde::{Deserialize, Serialize};

use epi_diagnostic::DiagnosticConfig;
use epi_ir::known;

/// Settings for one generation pass.
///
/// Every field has a default, so partial configuration files are valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package of the aggregate unit.
    pub aggregate_package: String,
    /// Simple name of the aggregate unit.
    pub aggregate_name: String,
    /// Root types that get `update(root)`/`bind(root)` entry points, together
    /// with all their subtypes.
    pub main_types: Vec<String>,
    /// Sendable subtypes that are accepted but never logged.
    pub sendable_exclusions: Vec<String>,
    /// Maximum number of errors reported (0 = unlimited).
    pub error_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            aggregate_package: known::EPILOGUE_PACKAGE.to_string(),
            aggregate_name: "Epilogue".to_string(),
            main_types: vec![known::TIMED_ROBOT.to_string()],
            sendable_exclusions: vec![
                known::COMMAND.to_string(),
                known::SUBSYSTEM_BASE.to_string(),
            ],
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl GeneratorConfig {
    /// Fully qualified name of the aggregate unit.
    pub fn aggregate_qualified_name(&self) -> String {
        if self.aggregate_package.is_empty() {
            self.aggregate_name.clone()
        } else {
            format!("{}.{}", self.aggregate_package, self.aggregate_name)
        }
    }

    /// Diagnostic queue settings for this pass.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}
