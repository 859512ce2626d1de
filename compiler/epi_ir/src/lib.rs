//! Epilogue IR - Declaration Graph Types
//!
//! This crate contains the data structures the generator works on:
//! - Type references as they appear in member signatures
//! - Type, field, method and constructor declarations
//! - The logging attributes attached to declarations
//! - Element references used to attach diagnostics
//! - The `DeclGraph`, with subtype queries over declared supertypes
//!
//! # Design Philosophy
//!
//! - **Host-model agnostic**: the graph is plain data. A host compiler (or the
//!   `epic` CLI reading JSON) builds it; nothing here parses source text.
//! - **Deterministic**: declaration order is preserved, lookups go through
//!   `FxHashMap` indices, iteration never depends on hash order.
//! - **Prelude**: the well-known library types the classifiers care about
//!   are declared once in [`prelude`], so user graphs only describe their
//!   own types.

mod attrs;
mod decl;
mod element;
mod graph;
pub mod known;
pub mod prelude;
mod types;

pub use attrs::{Importance, Logged, Naming, Strategy};
pub use decl::{
    ConstructorDecl, FieldDecl, Ineligibility, MethodDecl, Modifiers, TypeDecl, TypeKind,
};
pub use element::ElementRef;
pub use graph::{DeclGraph, GraphError, GraphInput};
pub use types::{DeclaredType, PrimitiveKind, TypeRef};
