//! Element references.
//!
//! Diagnostics attach to declarations rather than byte spans: the graph
//! carries no source text, so an element is named by its owner and member.

use std::fmt;

/// A reference to a declaration in the graph.
///
/// Ordered so that diagnostics for one type sort together.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum ElementRef {
    /// A type, by qualified name.
    Type(String),
    /// A field of a type.
    Field { owner: String, name: String },
    /// A method of a type.
    Method { owner: String, name: String },
}

impl ElementRef {
    pub fn ty(owner: impl Into<String>) -> Self {
        ElementRef::Type(owner.into())
    }

    pub fn field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        ElementRef::Field {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn method(owner: impl Into<String>, name: impl Into<String>) -> Self {
        ElementRef::Method {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Qualified name of the type that owns this element.
    pub fn owner(&self) -> &str {
        match self {
            ElementRef::Type(owner)
            | ElementRef::Field { owner, .. }
            | ElementRef::Method { owner, .. } => owner,
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Type(owner) => f.write_str(owner),
            ElementRef::Field { owner, name } => write!(f, "{owner}#{name}"),
            ElementRef::Method { owner, name } => write!(f, "{owner}#{name}()"),
        }
    }
}
