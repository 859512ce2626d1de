//! Per-type logger emission.
//!
//! Every root gets a `ClassSpecificLogger` subclass in its own package. The
//! `update` method reads each loggable member and hands it to the backend,
//! grouped into one `shouldLog` block per importance tier.

use std::collections::BTreeMap;

use epi_ir::{known, Importance, TypeRef};

use super::{java_string, GeneratedUnit, ImportSet, SourceWriter};
use crate::classify::LogSite;
use crate::context::UnitName;
use crate::{naming, GenContext, LoggableMember, LoggableType, MemberKind};

const PRIVATE_LOOKUP_FAILURE: &str = "[EPILOGUE] Could not load private fields for logging!";

/// A non-public field read through a `VarHandle`.
struct HandleField<'g> {
    name: &'g str,
    ty: &'g TypeRef,
}

impl HandleField<'_> {
    fn handle(&self) -> String {
        format!("${}", self.name)
    }
}

/// Generate the logger unit for one root.
#[tracing::instrument(level = "debug", skip_all, fields(root = %root.qualified_name()))]
pub fn emit_type_logger(cx: &GenContext<'_>, root: &LoggableType<'_>) -> GeneratedUnit {
    let unit = cx.unit_for(&root.qualified_name()).cloned().unwrap_or_else(|| {
        UnitName::new(root.decl.package.clone(), naming::default_unit_name(root.decl))
    });

    let target = root.decl.name.as_str();
    let aggregate_package = cx.config.aggregate_package.as_str();
    let aggregate_name = cx.config.aggregate_name.as_str();
    let mut imports = ImportSet::new(&unit.package, &unit.simple);
    imports.reference_in(&root.decl.package, target);
    let base = imports.reference(known::CLASS_SPECIFIC_LOGGER);
    let backend = imports.reference(known::EPILOGUE_BACKEND);
    // Claimed below only when some tier is emitted.
    let aggregate = imports.spelling_in(aggregate_package, aggregate_name);

    let mut tiers: BTreeMap<Importance, Vec<String>> = BTreeMap::new();
    let mut handles: Vec<HandleField<'_>> = Vec::new();
    for member in root.candidate_members() {
        let access = access_expression(&member);
        let key = member.log_key();
        let site = LogSite {
            key: &key,
            access: &access,
            ty: member.ty,
            aggregate: &aggregate,
        };
        let Some(statement) = cx.verdict(&site).emission else {
            continue;
        };
        if member.is_field() && !member.is_public() {
            handles.push(HandleField {
                name: member.name,
                ty: member.ty,
            });
        }
        tiers.entry(member.importance).or_default().push(statement);
    }
    tracing::debug!(
        logger = %unit.simple,
        tiers = tiers.len(),
        private_fields = handles.len(),
        "emitting logger"
    );

    let gates = (!tiers.is_empty()).then(|| {
        (
            imports.reference_in(aggregate_package, aggregate_name),
            imports.reference(known::LOGGED),
        )
    });
    let lookup = (!handles.is_empty()).then(|| {
        (
            imports.reference("java.lang.invoke.VarHandle"),
            imports.reference("java.lang.invoke.MethodHandles"),
        )
    });

    let mut out = SourceWriter::new();
    if !unit.package.is_empty() {
        out.line(&format!("package {};", unit.package));
        out.blank();
    }
    imports.render(&mut out);
    out.blank();

    out.open(&format!("public class {} extends {base}<{target}>", unit.simple));

    if let Some((var_handle, method_handles)) = &lookup {
        for field in &handles {
            out.line(&format!("private static final {var_handle} {};", field.handle()));
        }
        out.blank();
        out.open("static");
        out.open("try");
        out.line(&format!(
            "var lookup = {method_handles}.privateLookupIn({target}.class, {method_handles}.lookup());"
        ));
        for field in &handles {
            out.line(&format!(
                "{} = lookup.findVarHandle({target}.class, {}, {}.class);",
                field.handle(),
                java_string(field.name),
                field.ty.erasure()
            ));
        }
        out.reopen("catch (ReflectiveOperationException e)");
        out.line(&format!(
            "throw new RuntimeException({}, e);",
            java_string(PRIVATE_LOOKUP_FAILURE)
        ));
        out.close();
        out.close();
        out.blank();
    }

    out.open(&format!("public {}()", unit.simple));
    out.line(&format!("super({target}.class);"));
    out.close();
    out.blank();

    out.line("@Override");
    out.open(&format!("public void update({backend} backend, {target} object)"));
    if let Some((aggregate, logged)) = &gates {
        for (importance, statements) in &tiers {
            out.open(&format!(
                "if ({aggregate}.shouldLog({logged}.Importance.{importance}))"
            ));
            for statement in statements {
                out.line(statement);
            }
            out.close();
        }
    }
    out.close();
    out.close();

    GeneratedUnit {
        package: unit.package,
        name: unit.simple,
        source: out.output(),
    }
}

/// The expression reading a member from `object`.
fn access_expression(member: &LoggableMember<'_>) -> String {
    match member.kind {
        MemberKind::Method => format!("object.{}()", member.name),
        MemberKind::Field if member.is_public() => format!("object.{}", member.name),
        MemberKind::Field => {
            let cast = if contains_type_var(member.ty) {
                member.ty.erasure()
            } else {
                member.ty.source()
            };
            format!("(({cast}) ${}.get(object))", member.name)
        }
    }
}

fn contains_type_var(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::TypeVar(_) => true,
        TypeRef::Array(component) => contains_type_var(component),
        TypeRef::Declared(declared) => declared.args.iter().any(contains_type_var),
        TypeRef::Void | TypeRef::Primitive(_) => false,
    }
}
