//! The declaration graph.
//!
//! Holds every type declaration visible to one generation pass and answers
//! subtype questions by walking declared supertypes, substituting type
//! arguments along the way.
//!
//! # Design
//!
//! - Declarations are stored in insertion order (prelude first), indexed by
//!   qualified name through an `FxHashMap`.
//! - Prelude entries can be replaced once by a user declaration; two user
//!   declarations with the same name are a `GraphError`.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{prelude, DeclaredType, TypeDecl, TypeKind, TypeRef};

/// Error building a declaration graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Two user declarations share a qualified name.
    DuplicateType(String),
    /// A declaration has an empty name.
    EmptyName,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateType(name) => write!(f, "type `{name}` is declared twice"),
            GraphError::EmptyName => write!(f, "type declaration has an empty name"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Serialized form of a user declaration graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Every type declaration visible to one generation pass.
#[derive(Clone, Debug, Default)]
pub struct DeclGraph {
    decls: Vec<TypeDecl>,
    index: FxHashMap<String, usize>,
    builtin: FxHashSet<String>,
}

impl DeclGraph {
    /// An empty graph without the prelude.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph containing only the prelude.
    pub fn with_prelude() -> Self {
        let mut graph = Self::new();
        for decl in prelude::prelude() {
            let name = decl.qualified_name();
            graph.index.insert(name.clone(), graph.decls.len());
            graph.builtin.insert(name);
            graph.decls.push(decl);
        }
        graph
    }

    /// The prelude plus the given user declarations.
    pub fn from_decls(decls: impl IntoIterator<Item = TypeDecl>) -> Result<Self, GraphError> {
        let mut graph = Self::with_prelude();
        for decl in decls {
            graph.insert(decl)?;
        }
        Ok(graph)
    }

    /// The prelude plus the declarations of a serialized graph.
    pub fn from_input(input: GraphInput) -> Result<Self, GraphError> {
        Self::from_decls(input.types)
    }

    /// Add a user declaration, replacing a prelude entry of the same name.
    pub fn insert(&mut self, decl: TypeDecl) -> Result<(), GraphError> {
        if decl.name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        let name = decl.qualified_name();
        match self.index.get(&name).copied() {
            Some(idx) if self.builtin.remove(&name) => {
                self.decls[idx] = decl;
            }
            Some(_) => return Err(GraphError::DuplicateType(name)),
            None => {
                self.index.insert(name, self.decls.len());
                self.decls.push(decl);
            }
        }
        Ok(())
    }

    /// Look up a declaration by qualified name.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.index.get(name).map(|&idx| &self.decls[idx])
    }

    /// Look up the declaration behind a type reference.
    pub fn resolve(&self, ty: &TypeRef) -> Option<&TypeDecl> {
        ty.as_declared().and_then(|d| self.get(&d.name))
    }

    /// All declarations in insertion order, prelude included.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter()
    }

    /// User declarations in insertion order.
    pub fn user_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls
            .iter()
            .filter(|decl| !self.builtin.contains(&decl.qualified_name()))
    }

    /// Check if a declaration came from the prelude.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin.contains(name)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Check if `name` is `target` or transitively declares it as a supertype.
    pub fn is_subtype(&self, name: &str, target: &str) -> bool {
        self.find_supertype(&DeclaredType::new(name), target).is_some()
    }

    /// Check if a type reference names a subtype of `target`.
    pub fn is_subtype_ref(&self, ty: &TypeRef, target: &str) -> bool {
        ty.as_declared()
            .is_some_and(|declared| self.find_supertype(declared, target).is_some())
    }

    /// Find how `ty` instantiates the supertype `target`.
    ///
    /// Type arguments are substituted through every intermediate generic
    /// supertype, so for `class Rec extends Base<Pose>` with
    /// `class Base<T> extends ClassSpecificLogger<T>` this returns
    /// `ClassSpecificLogger<Pose>`.
    pub fn find_supertype(&self, ty: &DeclaredType, target: &str) -> Option<DeclaredType> {
        let mut visited = FxHashSet::default();
        self.find_supertype_inner(ty, target, &mut visited)
    }

    fn find_supertype_inner(
        &self,
        ty: &DeclaredType,
        target: &str,
        visited: &mut FxHashSet<String>,
    ) -> Option<DeclaredType> {
        if ty.name == target {
            return Some(ty.clone());
        }
        if !visited.insert(ty.name.clone()) {
            return None;
        }
        let decl = self.get(&ty.name)?;
        let bindings: FxHashMap<&str, &TypeRef> = decl
            .type_params
            .iter()
            .map(String::as_str)
            .zip(ty.args.iter())
            .collect();
        decl.supertypes.iter().find_map(|supertype| {
            let instantiated = substitute_declared(supertype, &bindings);
            self.find_supertype_inner(&instantiated, target, visited)
        })
    }

    /// Check if a type reference names an enum.
    pub fn is_enum(&self, ty: &TypeRef) -> bool {
        self.resolve(ty)
            .is_some_and(|decl| decl.kind == TypeKind::Enum)
            || self.is_subtype_ref(ty, crate::known::ENUM)
    }
}

fn substitute(ty: &TypeRef, bindings: &FxHashMap<&str, &TypeRef>) -> TypeRef {
    match ty {
        TypeRef::TypeVar(name) => bindings
            .get(name.as_str())
            .map_or_else(|| ty.clone(), |bound| (*bound).clone()),
        TypeRef::Array(component) => TypeRef::array(substitute(component, bindings)),
        TypeRef::Declared(declared) => TypeRef::Declared(substitute_declared(declared, bindings)),
        TypeRef::Void | TypeRef::Primitive(_) => ty.clone(),
    }
}

fn substitute_declared(ty: &DeclaredType, bindings: &FxHashMap<&str, &TypeRef>) -> DeclaredType {
    DeclaredType::generic(
        ty.name.clone(),
        ty.args.iter().map(|arg| substitute(arg, bindings)).collect(),
    )
}
