//! Member validation.
//!
//! Checks every member of every root against the marking rules:
//!
//! - A member carrying `Logged` must be loggable. Marked methods must also be
//!   public, non-static, non-void and parameterless.
//! - Marked static fields are skipped with a warning.
//! - A member carrying both `Logged` and `NotLogged` is excluded, with a
//!   warning.
//! - Under `OPT_OUT`, an unmarked member that would be selected but cannot
//!   be logged is skipped with a note.
//!
//! Errors halt emission for the whole pass; warnings and notes do not.

use epi_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use epi_ir::Strategy;

use crate::{GenContext, LoggableMember, LoggableType, MemberKind};

const METHOD_RULE: &str =
    "logged methods must be public, non-static, non-void accessors without parameters";

/// Validate the members of every root.
#[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
pub fn validate(
    cx: &GenContext<'_>,
    roots: &[LoggableType<'_>],
    queue: &mut DiagnosticQueue,
) -> Result<(), ErrorGuaranteed> {
    let mut result = Ok(());
    for root in roots {
        for member in root.members() {
            if let Err(guar) = validate_member(cx, root, &member, queue) {
                result = Err(guar);
            }
        }
    }
    result
}

fn validate_member(
    cx: &GenContext<'_>,
    root: &LoggableType<'_>,
    member: &LoggableMember<'_>,
    queue: &mut DiagnosticQueue,
) -> Result<(), ErrorGuaranteed> {
    if member.marked && member.excluded {
        queue.push(
            Diagnostic::warning(ErrorCode::W1004)
                .with_message(format!(
                    "`{}` is marked both @Logged and @NotLogged",
                    member.name
                ))
                .with_label(member.element.clone(), "excluded from logging")
                .with_suggestion("remove one of the two annotations"),
        );
        return Ok(());
    }
    if member.excluded {
        return Ok(());
    }

    if member.is_field() && member.is_static() {
        if member.marked {
            queue.push(
                Diagnostic::warning(ErrorCode::W1003)
                    .with_message(format!("static field `{}` is not logged", member.name))
                    .with_label(member.element.clone(), "static field")
                    .with_note("only instance state is logged"),
            );
        }
        return Ok(());
    }

    if member.marked {
        if let Err(err) = member.try_log_key() {
            queue.push(
                Diagnostic::warning(ErrorCode::W1001)
                    .with_message(err.to_string())
                    .with_label(member.element.clone(), "name override declared here")
                    .with_note(format!("the key `{}` is used instead", member.name)),
            );
        }
        return validate_marked(cx, member, queue);
    }

    if root.strategy == Strategy::OptOut {
        if member.kind == MemberKind::Method && !member.is_eligible_method() {
            return Ok(());
        }
        if !cx.is_loggable(member.ty) {
            tracing::debug!(member = %member.element, ty = %member.ty, "excluded from logs");
            queue.push(
                Diagnostic::note(ErrorCode::N1001)
                    .with_message(format!(
                        "`{}` of type `{}` is excluded from logs",
                        member.name, member.ty
                    ))
                    .with_label(member.element.clone(), "type cannot be logged")
                    .with_suggestion("mark it @NotLogged to silence this note"),
            );
        }
    }
    Ok(())
}

/// Rules for a member carrying `Logged`.
fn validate_marked(
    cx: &GenContext<'_>,
    member: &LoggableMember<'_>,
    queue: &mut DiagnosticQueue,
) -> Result<(), ErrorGuaranteed> {
    let mut result = Ok(());

    if member.kind == MemberKind::Method {
        for (code, problem) in method_problems(member) {
            result = Err(queue.emit_error(
                Diagnostic::error(code)
                    .with_message(format!("logged method `{}()` {problem}", member.name))
                    .with_label(member.element.clone(), "marked @Logged")
                    .with_note(METHOD_RULE),
            ));
        }
        if result.is_err() {
            return result;
        }
    }

    if !cx.is_loggable(member.ty) {
        tracing::debug!(member = %member.element, ty = %member.ty, "not loggable");
        result = Err(queue.emit_error(
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!(
                    "`{}` has type `{}`, which cannot be logged",
                    member.name, member.ty
                ))
                .with_label(member.element.clone(), "marked @Logged")
                .with_suggestion(
                    "register a custom logger for the type, or mark the member @NotLogged",
                ),
        ));
    }
    result
}

/// Why a marked method cannot be logged, in a fixed order.
fn method_problems(member: &LoggableMember<'_>) -> Vec<(ErrorCode, &'static str)> {
    let mut problems = Vec::new();
    if !member.is_public() {
        problems.push((ErrorCode::E1002, "is not public"));
    }
    if member.is_static() {
        problems.push((ErrorCode::E1003, "is static"));
    }
    if member.ty.is_void() {
        problems.push((ErrorCode::E1004, "returns void"));
    }
    if member.takes_parameters {
        problems.push((ErrorCode::E1005, "takes parameters"));
    }
    problems
}

#[cfg(test)]
mod tests;
