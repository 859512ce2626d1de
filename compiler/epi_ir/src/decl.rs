//! Type and member declarations.
//!
//! Declarations are plain data. The builder-style methods (`with_field`,
//! `public`, `logged`, ...) exist so hosts and tests can assemble graphs
//! without spelling out every field.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{known, DeclaredType, ElementRef, Logged, TypeRef};

bitflags! {
    /// Declaration modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Modifiers: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

/// Serde adapter: modifiers travel as a list of lowercase keywords.
mod modifier_list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Modifiers;

    const KEYWORDS: &[(&str, Modifiers)] = &[
        ("public", Modifiers::PUBLIC),
        ("protected", Modifiers::PROTECTED),
        ("private", Modifiers::PRIVATE),
        ("static", Modifiers::STATIC),
        ("final", Modifiers::FINAL),
        ("abstract", Modifiers::ABSTRACT),
    ];

    pub(super) fn serialize<S: Serializer>(mods: &Modifiers, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_seq(
            KEYWORDS
                .iter()
                .filter(|(_, flag)| mods.contains(*flag))
                .map(|(keyword, _)| *keyword),
        )
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Modifiers, D::Error> {
        let words = Vec::<String>::deserialize(de)?;
        let mut mods = Modifiers::empty();
        for word in &words {
            let Some((_, flag)) = KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word.as_str())
            else {
                return Err(D::Error::custom(format!("unknown modifier `{word}`")));
            };
            mods |= *flag;
        }
        Ok(mods)
    }
}

/// The kind of a type declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
}

/// A field declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, with = "modifier_list")]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub logged: Option<Logged>,
    #[serde(default)]
    pub not_logged: bool,
}

impl FieldDecl {
    /// A package-private, non-static field with no attributes.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            modifiers: Modifiers::empty(),
            logged: None,
            not_logged: false,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    #[must_use]
    pub fn public(self) -> Self {
        self.with_modifiers(Modifiers::PUBLIC)
    }

    #[must_use]
    pub fn private(self) -> Self {
        self.with_modifiers(Modifiers::PRIVATE)
    }

    #[must_use]
    pub fn logged(mut self, logged: Logged) -> Self {
        self.logged = Some(logged);
        self
    }

    #[must_use]
    pub fn not_logged(mut self) -> Self {
        self.not_logged = true;
        self
    }

    pub fn is_public(&self) -> bool {
        self.modifiers.contains(Modifiers::PUBLIC)
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }
}

/// Why a method cannot be logged.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ineligibility {
    NotPublic,
    Static,
    ReturnsVoid,
    TakesParameters,
}

/// A method declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default, with = "modifier_list")]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub logged: Option<Logged>,
    #[serde(default)]
    pub not_logged: bool,
}

impl MethodDecl {
    /// A package-private, parameterless, non-static method.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        MethodDecl {
            name: name.into(),
            return_type,
            params: Vec::new(),
            modifiers: Modifiers::empty(),
            logged: None,
            not_logged: false,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    #[must_use]
    pub fn public(self) -> Self {
        self.with_modifiers(Modifiers::PUBLIC)
    }

    #[must_use]
    pub fn with_param(mut self, param: TypeRef) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn logged(mut self, logged: Logged) -> Self {
        self.logged = Some(logged);
        self
    }

    #[must_use]
    pub fn not_logged(mut self) -> Self {
        self.not_logged = true;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Every reason this method cannot be logged, in a fixed order.
    ///
    /// Empty means the method is a public, non-static, parameterless
    /// accessor that returns a value.
    pub fn ineligibility(&self) -> Vec<Ineligibility> {
        let mut reasons = Vec::new();
        if !self.modifiers.contains(Modifiers::PUBLIC) {
            reasons.push(Ineligibility::NotPublic);
        }
        if self.is_static() {
            reasons.push(Ineligibility::Static);
        }
        if self.return_type.is_void() {
            reasons.push(Ineligibility::ReturnsVoid);
        }
        if !self.params.is_empty() {
            reasons.push(Ineligibility::TakesParameters);
        }
        reasons
    }

    pub fn is_eligible(&self) -> bool {
        self.ineligibility().is_empty()
    }
}

/// A constructor declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default, with = "modifier_list")]
    pub modifiers: Modifiers,
}

/// A type declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Package, e.g. `frc.robot`. Empty for the default package.
    #[serde(default)]
    pub package: String,
    /// Nested path inside the package, e.g. `Outer.Inner`.
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, with = "modifier_list")]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Superclass and implemented interfaces, with type arguments.
    #[serde(default)]
    pub supertypes: Vec<DeclaredType>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub logged: Option<Logged>,
    /// Target types of a custom logger registration.
    #[serde(default)]
    pub custom_logger_for: Option<Vec<TypeRef>>,
}

impl TypeDecl {
    fn new(package: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDecl {
            package: package.into(),
            name: name.into(),
            kind,
            modifiers: Modifiers::PUBLIC,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            logged: None,
            custom_logger_for: None,
        }
    }

    /// A public class.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Class)
    }

    /// A public interface.
    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Interface)
    }

    /// A public enum.
    pub fn enumeration(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Enum)
    }

    /// A public record.
    pub fn record(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package, name, TypeKind::Record)
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, param: impl Into<String>) -> Self {
        self.type_params.push(param.into());
        self
    }

    #[must_use]
    pub fn extends(mut self, supertype: DeclaredType) -> Self {
        self.supertypes.push(supertype);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[must_use]
    pub fn logged(mut self, logged: Logged) -> Self {
        self.logged = Some(logged);
        self
    }

    #[must_use]
    pub fn custom_logger_for(mut self, targets: Vec<TypeRef>) -> Self {
        self.custom_logger_for = Some(targets);
        self
    }

    /// Declares `public static final <descriptor> struct`, making the type
    /// struct-serializable.
    #[must_use]
    pub fn with_struct(self) -> Self {
        let descriptor = format!("{}Struct", self.qualified_name());
        self.with_field(
            FieldDecl::new(known::STRUCT_FIELD, TypeRef::declared(descriptor))
                .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
        )
    }

    /// `package.Outer.Inner`, or just the nested path in the default package.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The type as a reference, with its own type parameters as arguments.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::Declared(self.as_declared())
    }

    /// The type as a declared type, with its own type parameters as arguments.
    pub fn as_declared(&self) -> DeclaredType {
        DeclaredType::generic(
            self.qualified_name(),
            self.type_params
                .iter()
                .map(|param| TypeRef::TypeVar(param.clone()))
                .collect(),
        )
    }

    pub fn element(&self) -> ElementRef {
        ElementRef::ty(self.qualified_name())
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// A type is struct-serializable when it exposes a public static
    /// `struct` descriptor field.
    pub fn is_struct_serializable(&self) -> bool {
        self.fields.iter().any(|field| {
            field.name == known::STRUCT_FIELD && field.is_public() && field.is_static()
        })
    }

    /// Check for a public constructor taking no arguments.
    ///
    /// Classes without declared constructors get an implicit public one.
    pub fn has_public_no_arg_constructor(&self) -> bool {
        if self.kind != TypeKind::Class || self.modifiers.contains(Modifiers::ABSTRACT) {
            return false;
        }
        if self.constructors.is_empty() {
            return true;
        }
        self.constructors
            .iter()
            .any(|ctor| ctor.params.is_empty() && ctor.modifiers.contains(Modifiers::PUBLIC))
    }
}

#[cfg(test)]
mod tests;
