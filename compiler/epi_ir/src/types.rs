//! Type references.
//!
//! A `TypeRef` is the declared type of a field, a method return, a parameter
//! or a type argument. It is a reference only: the declaration of a named type
//! lives in the [`DeclGraph`](crate::DeclGraph).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::known;

/// The eight primitive scalar kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// The keyword spelling (`int`, `double`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Qualified name of the boxed wrapper class.
    pub fn boxed_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Char => "java.lang.Character",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named type with its type arguments, e.g. `java.util.List<Pose2d>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct DeclaredType {
    /// Qualified name (`package.Outer.Inner`).
    pub name: String,
    /// Type arguments; empty for non-generic or raw uses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl DeclaredType {
    /// Create a declared type without type arguments.
    pub fn new(name: impl Into<String>) -> Self {
        DeclaredType {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a declared type with type arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        DeclaredType {
            name: name.into(),
            args,
        }
    }

    /// The last dotted segment of the name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Reference to a type in a declaration signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// No value (method returns only).
    Void,
    /// A primitive scalar.
    Primitive(PrimitiveKind),
    /// An array of the component type.
    Array(Box<TypeRef>),
    /// A class, interface, enum or record.
    Declared(DeclaredType),
    /// A type variable of the enclosing declaration.
    TypeVar(String),
}

impl TypeRef {
    /// Shorthand for a primitive type.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }

    /// Shorthand for an array of `component`.
    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// Shorthand for a non-generic declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared(DeclaredType::new(name))
    }

    /// Shorthand for a generic declared type.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Declared(DeclaredType::generic(name, args))
    }

    /// Shorthand for `java.lang.String`.
    pub fn string() -> Self {
        TypeRef::declared(known::STRING)
    }

    /// Check if this is the `void` pseudo-type.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Check if this is `java.lang.String`.
    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::Declared(d) if d.name == known::STRING)
    }

    /// The declared type, if this is one.
    pub fn as_declared(&self) -> Option<&DeclaredType> {
        match self {
            TypeRef::Declared(d) => Some(d),
            _ => None,
        }
    }

    /// The primitive kind, if this is one.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeRef::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The array component type, if this is an array.
    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Source spelling with type arguments, e.g. `java.util.List<java.lang.String>`.
    pub fn source(&self) -> String {
        self.to_string()
    }

    /// Source spelling after erasing type arguments, suitable for class
    /// literals (`java.util.List`, `double[]`). Type variables erase to
    /// `java.lang.Object`.
    pub fn erasure(&self) -> String {
        match self {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(kind) => kind.keyword().to_string(),
            TypeRef::Array(component) => format!("{}[]", component.erasure()),
            TypeRef::Declared(d) => d.name.clone(),
            TypeRef::TypeVar(_) => known::OBJECT.to_string(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Primitive(kind) => write!(f, "{kind}"),
            TypeRef::Array(component) => write!(f, "{component}[]"),
            TypeRef::Declared(d) => {
                f.write_str(&d.name)?;
                if !d.args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in d.args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeRef::TypeVar(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests;
