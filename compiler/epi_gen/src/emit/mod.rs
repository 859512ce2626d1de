//! Source emission.
//!
//! Turns the analyzed pass into generated units: one logger per root type
//! and the aggregate registry. Units are handed to a [`UnitSink`]; the
//! generator never touches the filesystem itself.

mod aggregate;
mod per_type;
mod writer;

use std::collections::BTreeMap;

pub use aggregate::emit_aggregate;
pub use per_type::emit_type_logger;
pub(crate) use writer::{ImportSet, SourceWriter};

/// A string as a Java string literal, quotes included.
pub fn java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// One generated compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    /// Simple class name.
    pub name: String,
    /// Complete source text.
    pub source: String,
}

impl GeneratedUnit {
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// `package/with/slashes/Name.java`.
    pub fn relative_path(&self) -> String {
        if self.package.is_empty() {
            format!("{}.java", self.name)
        } else {
            format!("{}/{}.java", self.package.replace('.', "/"), self.name)
        }
    }
}

/// Failure to hand a unit to its sink.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("could not write `{unit}`: {source}")]
    Io {
        unit: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unit `{0}` was already written in this pass")]
    Duplicate(String),
}

/// Destination for generated units.
pub trait UnitSink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> Result<(), EmitError>;
}

/// Keeps units in memory, keyed by relative path.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    units: BTreeMap<String, GeneratedUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a unit by qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<&GeneratedUnit> {
        self.units
            .values()
            .find(|unit| unit.qualified_name() == qualified_name)
    }

    /// Units in path order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedUnit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn into_units(self) -> Vec<GeneratedUnit> {
        self.units.into_values().collect()
    }
}

impl UnitSink for MemorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> Result<(), EmitError> {
        use std::collections::btree_map::Entry;

        match self.units.entry(unit.relative_path()) {
            Entry::Vacant(slot) => {
                slot.insert(unit.clone());
                Ok(())
            }
            Entry::Occupied(_) => Err(EmitError::Duplicate(unit.qualified_name())),
        }
    }
}
