//! Source text building.
//!
//! `SourceWriter` builds a unit line by line with block-aware indentation.
//! `ImportSet` decides how a type is spelled inside a unit and collects the
//! imports that spelling needs.

use std::collections::{BTreeMap, BTreeSet};

/// Spaces per indentation level.
const INDENT: usize = 2;

/// Line-oriented string builder for generated source.
#[derive(Default)]
pub struct SourceWriter {
    buffer: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Emit indentation as the given number of spaces.
    pub fn emit_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    /// One line at the current depth. An empty line carries no indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            self.emit_indent(self.depth * INDENT);
            self.emit(text);
        }
        self.emit_newline();
    }

    /// A blank line, collapsing runs of blank lines into one.
    pub fn blank(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.emit_newline();
        }
    }

    /// A line that opens a block (`... {`); following lines are indented.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    /// Close the innermost block with `}` followed by `trailer`.
    pub fn close_with(&mut self, trailer: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("}}{trailer}"));
    }

    /// Close the innermost block and open a sibling on the same line
    /// (`} catch (...) {`).
    pub fn reopen(&mut self, header: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.open(&format!("}} {header}"));
    }

    /// Close the innermost block.
    pub fn close(&mut self) {
        self.close_with("");
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The finished text: no trailing blank lines, exactly one final newline.
    pub fn output(mut self) -> String {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer
    }
}

/// Imports of one unit.
///
/// A type is referenced by its short name when that name is free in the unit
/// and by its qualified name otherwise. The first type to claim a short name
/// keeps it, so callers reference types in a deterministic order.
pub struct ImportSet {
    package: String,
    /// Short name → qualified name it stands for.
    claimed: BTreeMap<String, String>,
    /// Qualified names to import.
    imports: BTreeSet<String>,
    static_imports: BTreeSet<String>,
}

impl ImportSet {
    /// Imports for a unit in `package` whose own class is `own_name`.
    pub fn new(package: &str, own_name: &str) -> Self {
        let mut claimed = BTreeMap::new();
        claimed.insert(own_name.to_string(), join(package, own_name));
        ImportSet {
            package: package.to_string(),
            claimed,
            imports: BTreeSet::new(),
            static_imports: BTreeSet::new(),
        }
    }

    /// Spelling of the top-level type with the given qualified name.
    ///
    /// The package is everything before the last dot.
    pub fn reference(&mut self, qualified: &str) -> String {
        let (package, name) = qualified.rsplit_once('.').unwrap_or(("", qualified));
        self.reference_in(package, name)
    }

    /// Spelling of `nested` (`Outer.Inner`) declared in `package`.
    ///
    /// Nested types are imported through their outermost type and spelled
    /// with the full nested path.
    pub fn reference_in(&mut self, package: &str, nested: &str) -> String {
        let outer = nested.split('.').next().unwrap_or(nested);
        let outer_qualified = join(package, outer);

        if self.claimed.contains_key(outer) {
            return self.spelling_in(package, nested);
        }

        self.claimed.insert(outer.to_string(), outer_qualified.clone());
        if package != self.package && package != "java.lang" && !package.is_empty() {
            self.imports.insert(outer_qualified);
        }
        nested.to_string()
    }

    /// The spelling `reference_in` would return, without claiming the name
    /// or adding an import.
    pub fn spelling_in(&self, package: &str, nested: &str) -> String {
        let outer = nested.split('.').next().unwrap_or(nested);
        match self.claimed.get(outer) {
            Some(owner) if *owner != join(package, outer) => join(package, nested),
            _ => nested.to_string(),
        }
    }

    /// Add `import static <member>;`.
    pub fn add_static(&mut self, member: &str) {
        self.static_imports.insert(member.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.static_imports.is_empty()
    }

    /// Import lines: static imports first, then a blank line, then regular
    /// imports, each group sorted.
    pub fn render(&self, out: &mut SourceWriter) {
        for member in &self.static_imports {
            out.line(&format!("import static {member};"));
        }
        if !self.static_imports.is_empty() && !self.imports.is_empty() {
            out.blank();
        }
        for import in &self.imports {
            out.line(&format!("import {import};"));
        }
    }
}

fn join(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
