use epi_diagnostic::ErrorCode;
use epi_ir::{FieldDecl, Logged, MethodDecl, Modifiers, PrimitiveKind, TypeDecl, TypeRef};
use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::{codes, graph, with_context};

fn double() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Double)
}

fn socket() -> TypeDecl {
    TypeDecl::class("frc.robot", "Socket")
}

fn socket_ty() -> TypeRef {
    TypeRef::declared("frc.robot.Socket")
}

/// Validate `decl` (plus the `Socket` helper type) and return the outcome
/// with every queued code.
fn run(decl: TypeDecl) -> (bool, Vec<ErrorCode>) {
    let graph = graph(vec![decl, socket()]);
    with_context(&graph, |cx, roots, queue| {
        let ok = validate(cx, roots, queue).is_ok();
        (ok, codes(queue))
    })
}

fn opt_out(name: &str) -> TypeDecl {
    TypeDecl::class("frc.robot", name).logged(Logged::default().with_strategy(Strategy::OptOut))
}

#[test]
fn loggable_marked_field_is_clean() {
    let decl = TypeDecl::class("frc.robot", "Arm")
        .with_field(FieldDecl::new("x", double()).logged(Logged::default()));
    assert_eq!(run(decl), (true, vec![]));
}

#[test]
fn marked_field_of_unloggable_type_is_an_error() {
    let decl = TypeDecl::class("frc.robot", "Arm")
        .with_field(FieldDecl::new("socket", socket_ty()).logged(Logged::default()));
    assert_eq!(run(decl), (false, vec![ErrorCode::E1001]));
}

#[test]
fn every_method_problem_is_reported() {
    let decl = TypeDecl::class("frc.robot", "Arm").with_method(
        MethodDecl::new("reset", TypeRef::Void)
            .with_modifiers(Modifiers::STATIC)
            .with_param(double())
            .logged(Logged::default()),
    );
    assert_eq!(
        run(decl),
        (
            false,
            vec![ErrorCode::E1002, ErrorCode::E1003, ErrorCode::E1004, ErrorCode::E1005]
        )
    );
}

#[test]
fn eligible_method_of_unloggable_type_is_an_error() {
    let decl = TypeDecl::class("frc.robot", "Arm").with_method(
        MethodDecl::new("getSocket", socket_ty())
            .public()
            .logged(Logged::default()),
    );
    assert_eq!(run(decl), (false, vec![ErrorCode::E1001]));
}

#[test]
fn marked_static_field_is_skipped_with_warning() {
    let decl = TypeDecl::class("frc.robot", "Arm").with_field(
        FieldDecl::new("count", double())
            .with_modifiers(Modifiers::STATIC)
            .logged(Logged::default()),
    );
    assert_eq!(run(decl), (true, vec![ErrorCode::W1003]));
}

#[test]
fn logged_and_not_logged_warns_and_excludes() {
    let decl = TypeDecl::class("frc.robot", "Arm").with_field(
        FieldDecl::new("socket", socket_ty())
            .logged(Logged::default())
            .not_logged(),
    );
    assert_eq!(run(decl), (true, vec![ErrorCode::W1004]));
}

#[test]
fn blank_override_warns_and_keeps_going() {
    let decl = TypeDecl::class("frc.robot", "Arm")
        .with_field(FieldDecl::new("x", double()).logged(Logged::named("   ")));
    assert_eq!(run(decl), (true, vec![ErrorCode::W1001]));
}

#[test]
fn opt_out_unloggable_field_is_a_note() {
    let decl = opt_out("Arm")
        .with_field(FieldDecl::new("x", double()))
        .with_field(FieldDecl::new("socket", socket_ty()));
    assert_eq!(run(decl), (true, vec![ErrorCode::N1001]));
}

#[test]
fn opt_out_skips_ineligible_and_excluded_members_silently() {
    let decl = opt_out("Arm")
        .with_field(FieldDecl::new("socket", socket_ty()).not_logged())
        .with_field(FieldDecl::new("shared", socket_ty()).with_modifiers(Modifiers::STATIC))
        .with_method(MethodDecl::new("stop", TypeRef::Void).public())
        .with_method(MethodDecl::new("getSocket", socket_ty()));
    assert_eq!(run(decl), (true, vec![]));
}

#[test]
fn opt_out_marked_member_still_errors() {
    let decl =
        opt_out("Arm").with_field(FieldDecl::new("socket", socket_ty()).logged(Logged::default()));
    assert_eq!(run(decl), (false, vec![ErrorCode::E1001]));
}

#[test]
fn opt_in_ignores_unmarked_members() {
    let decl = TypeDecl::class("frc.robot", "Arm")
        .logged(Logged::default())
        .with_field(FieldDecl::new("socket", socket_ty()));
    assert_eq!(run(decl), (true, vec![]));
}

#[test]
fn errors_in_one_root_do_not_hide_another() {
    let graph = graph(vec![
        socket(),
        TypeDecl::class("frc.robot", "Arm")
            .with_field(FieldDecl::new("socket", socket_ty()).logged(Logged::default())),
        TypeDecl::class("frc.robot", "Wrist").with_method(
            MethodDecl::new("getAngle", double()).logged(Logged::default()),
        ),
    ]);
    with_context(&graph, |cx, roots, queue| {
        assert!(validate(cx, roots, queue).is_err());
        assert_eq!(codes(queue), vec![ErrorCode::E1001, ErrorCode::E1002]);
    });
}
