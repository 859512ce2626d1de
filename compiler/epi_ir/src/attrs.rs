//! Logging attributes attached to declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether members of a type must opt in to logging or are logged by default.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// Only members carrying `Logged` are logged.
    #[default]
    OptIn,
    /// Every eligible member is logged unless marked `NotLogged`.
    OptOut,
}

/// Runtime importance tier of a log statement.
///
/// Ordered by ascending severity; the generated code gates each tier on
/// `Epilogue.shouldLog(importance)`.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    #[default]
    Debug,
    Info,
    Critical,
}

impl Importance {
    /// Constant name in `Logged.Importance`.
    pub fn as_str(self) -> &'static str {
        match self {
            Importance::Debug => "DEBUG",
            Importance::Info => "INFO",
            Importance::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How log keys are derived from member identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Naming {
    /// Use the identifier as written.
    #[default]
    CodeName,
    /// Split the identifier into capitalized words.
    HumanName,
}

/// The `Logged` attribute.
///
/// On a type every field is meaningful. On a member only `name` and
/// `importance` are read; `strategy` and `default_naming` are ignored.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logged {
    pub strategy: Strategy,
    /// `None` inherits the enclosing type's importance (members) or
    /// `Importance::Debug` (types).
    pub importance: Option<Importance>,
    /// Log key override (members) or display name (types).
    pub name: Option<String>,
    pub default_naming: Naming,
}

impl Logged {
    /// `Logged` with a name override.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Logged {
            name: Some(name.into()),
            ..Logged::default()
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.default_naming = naming;
        self
    }
}
