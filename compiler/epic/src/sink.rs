//! Writing units to disk.

use std::fs;
use std::path::{Path, PathBuf};

use epi_gen::{EmitError, GeneratedUnit, UnitSink};
use rustc_hash::FxHashSet;

/// Writes each unit to `<root>/<package path>/<Name>.java`, creating
/// directories as needed and overwriting stale files.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    written: FxHashSet<String>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySink {
            root: root.into(),
            written: FxHashSet::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of units written so far.
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

impl UnitSink for DirectorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> Result<(), EmitError> {
        let qualified = unit.qualified_name();
        if self.written.contains(&qualified) {
            return Err(EmitError::Duplicate(qualified));
        }

        let path = self.root.join(unit.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                unit: qualified.clone(),
                source,
            })?;
        }
        fs::write(&path, &unit.source).map_err(|source| EmitError::Io {
            unit: qualified.clone(),
            source,
        })?;

        tracing::trace!(path = %path.display(), "unit written to disk");
        self.written.insert(qualified);
        Ok(())
    }
}
