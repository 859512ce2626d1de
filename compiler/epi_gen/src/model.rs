//! Loggable types and members as the generator sees them.
//!
//! These are views over `epi_ir` declarations with the attribute defaults
//! already applied, so later stages never re-derive inherited settings.

use epi_ir::{
    ElementRef, FieldDecl, Importance, Logged, MethodDecl, Modifiers, Naming, Strategy, TypeDecl,
    TypeRef,
};

use crate::naming;

/// A declared type marked for logging, directly or through a marked member.
#[derive(Clone, Debug)]
pub struct LoggableType<'g> {
    pub decl: &'g TypeDecl,
    pub strategy: Strategy,
    /// Default importance of the type's members.
    pub importance: Importance,
    pub display_name: Option<&'g str>,
    pub naming: Naming,
}

impl<'g> LoggableType<'g> {
    /// View a declaration with its `Logged` defaults applied.
    ///
    /// Types discovered only through a marked member behave as an unnamed
    /// `OPT_IN` type.
    pub fn from_decl(decl: &'g TypeDecl) -> Self {
        let defaults = Logged::default();
        let logged = decl.logged.as_ref().unwrap_or(&defaults);
        LoggableType {
            decl,
            strategy: logged.strategy,
            importance: logged.importance.unwrap_or_default(),
            display_name: decl.logged.as_ref().and_then(|l| l.name.as_deref()),
            naming: logged.default_naming,
        }
    }

    pub fn qualified_name(&self) -> String {
        self.decl.qualified_name()
    }

    pub fn simple_name(&self) -> &'g str {
        self.decl.simple_name()
    }

    pub fn element(&self) -> ElementRef {
        self.decl.element()
    }

    /// Every declared member, fields first, each in declaration order.
    pub fn members(&self) -> impl Iterator<Item = LoggableMember<'g>> + '_ {
        let decl = self.decl;
        let fields = decl
            .fields
            .iter()
            .map(move |field| LoggableMember::field(self, field));
        let methods = decl
            .methods
            .iter()
            .map(move |method| LoggableMember::method(self, method));
        fields.chain(methods)
    }

    /// Members the strategy selects for logging.
    ///
    /// Excluded and static members never qualify, and neither do ineligible
    /// methods. Under `OPT_IN` a member must carry `Logged`. Whether the
    /// member's type can actually be logged is decided by the classifiers.
    pub fn candidate_members(&self) -> impl Iterator<Item = LoggableMember<'g>> + '_ {
        let strategy = self.strategy;
        self.members()
            .filter(move |member| member.is_candidate(strategy))
    }
}

/// Whether a member is a field or an accessor method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// A field or method of a loggable type.
#[derive(Clone, Debug)]
pub struct LoggableMember<'g> {
    pub name: &'g str,
    pub kind: MemberKind,
    /// Field type, or method return type.
    pub ty: &'g TypeRef,
    pub modifiers: Modifiers,
    /// Own importance, or the enclosing type's default.
    pub importance: Importance,
    pub name_override: Option<&'g str>,
    /// Carries the `NotLogged` marker.
    pub excluded: bool,
    /// Carries its own `Logged` attribute.
    pub marked: bool,
    /// Method has parameters (always false for fields).
    pub takes_parameters: bool,
    pub element: ElementRef,
    naming: Naming,
}

impl<'g> LoggableMember<'g> {
    fn field(owner: &LoggableType<'g>, field: &'g FieldDecl) -> Self {
        LoggableMember {
            name: &field.name,
            kind: MemberKind::Field,
            ty: &field.ty,
            modifiers: field.modifiers,
            importance: member_importance(owner, field.logged.as_ref()),
            name_override: field.logged.as_ref().and_then(|l| l.name.as_deref()),
            excluded: field.not_logged,
            marked: field.logged.is_some(),
            takes_parameters: false,
            element: ElementRef::field(owner.qualified_name(), &field.name),
            naming: owner.naming,
        }
    }

    fn method(owner: &LoggableType<'g>, method: &'g MethodDecl) -> Self {
        LoggableMember {
            name: &method.name,
            kind: MemberKind::Method,
            ty: &method.return_type,
            modifiers: method.modifiers,
            importance: member_importance(owner, method.logged.as_ref()),
            name_override: method.logged.as_ref().and_then(|l| l.name.as_deref()),
            excluded: method.not_logged,
            marked: method.logged.is_some(),
            takes_parameters: !method.params.is_empty(),
            element: ElementRef::method(owner.qualified_name(), &method.name),
            naming: owner.naming,
        }
    }

    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    pub fn is_public(&self) -> bool {
        self.modifiers.contains(Modifiers::PUBLIC)
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Methods only: public, non-static, parameterless and non-void.
    pub fn is_eligible_method(&self) -> bool {
        self.kind == MemberKind::Method
            && self.is_public()
            && !self.is_static()
            && !self.takes_parameters
            && !self.ty.is_void()
    }

    fn is_candidate(&self, strategy: Strategy) -> bool {
        if self.excluded || self.is_static() {
            return false;
        }
        if self.kind == MemberKind::Method && !self.is_eligible_method() {
            return false;
        }
        match strategy {
            Strategy::OptIn => self.marked,
            Strategy::OptOut => true,
        }
    }

    /// The log key, falling back to the bare identifier when the derived key
    /// is unusable.
    pub fn log_key(&self) -> String {
        naming::log_key_name(self.name_override, self.name, self.naming)
            .unwrap_or_else(|_| self.name.to_string())
    }

    /// The log key, or why it could not be derived.
    pub fn try_log_key(&self) -> Result<String, naming::NamingError> {
        naming::log_key_name(self.name_override, self.name, self.naming)
    }
}

fn member_importance(owner: &LoggableType<'_>, logged: Option<&Logged>) -> Importance {
    logged
        .and_then(|l| l.importance)
        .unwrap_or(owner.importance)
}
