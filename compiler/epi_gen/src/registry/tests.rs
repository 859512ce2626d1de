use epi_diagnostic::{DiagnosticConfig, ErrorCode};
use epi_ir::{ConstructorDecl, DeclaredType, Modifiers};
use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::graph;

fn logger_of(target: &str) -> DeclaredType {
    DeclaredType::generic(known::CLASS_SPECIFIC_LOGGER, vec![TypeRef::declared(target)])
}

fn recorder(name: &str, target: &str) -> TypeDecl {
    TypeDecl::class("frc.robot.logging", name)
        .extends(logger_of(target))
        .custom_logger_for(vec![TypeRef::declared(target)])
}

fn run(decls: Vec<TypeDecl>) -> (RecorderRegistry, Vec<Diagnostic>) {
    let graph = graph(decls);
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let registry = build_registry(&graph, &mut queue);
    (registry, queue.flush())
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|diag| diag.code).collect()
}

#[test]
fn valid_recorder_is_bound() {
    let (registry, diagnostics) = run(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        recorder("ElevatorRecorder", "frc.robot.Elevator"),
    ]);
    assert!(diagnostics.is_empty());
    assert_eq!(
        registry.get("frc.robot.Elevator"),
        Some(&RecorderBinding {
            target: "frc.robot.Elevator".to_string(),
            recorder: "frc.robot.logging.ElevatorRecorder".to_string(),
            recorder_simple: "ElevatorRecorder".to_string(),
            field: "elevatorRecorder".to_string(),
        })
    );
}

#[test]
fn missing_public_constructor_is_rejected() {
    let private_ctor = recorder("ElevatorRecorder", "frc.robot.Elevator").with_constructor(
        ConstructorDecl {
            params: Vec::new(),
            modifiers: Modifiers::PRIVATE,
        },
    );
    let (registry, diagnostics) = run(vec![TypeDecl::class("frc.robot", "Elevator"), private_ctor]);
    assert!(registry.is_empty());
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2001]);
}

#[test]
fn generic_recorder_is_rejected() {
    let generic = TypeDecl::class("frc.robot.logging", "AnyRecorder")
        .with_type_param("T")
        .extends(DeclaredType::generic(
            known::CLASS_SPECIFIC_LOGGER,
            vec![TypeRef::TypeVar("T".to_string())],
        ))
        .custom_logger_for(vec![TypeRef::declared("frc.robot.Elevator")]);
    let (registry, diagnostics) = run(vec![TypeDecl::class("frc.robot", "Elevator"), generic]);
    assert!(registry.is_empty());
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2002]);
}

#[test]
fn recorder_for_the_wrong_type_is_rejected() {
    let (registry, diagnostics) = run(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        TypeDecl::class("frc.robot", "Wrist"),
        TypeDecl::class("frc.robot.logging", "ElevatorRecorder")
            .extends(logger_of("frc.robot.Wrist"))
            .custom_logger_for(vec![TypeRef::declared("frc.robot.Elevator")]),
    ]);
    assert!(registry.is_empty());
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2003]);
    assert!(diagnostics[0].message.contains("ClassSpecificLogger<frc.robot.Elevator>"));
}

#[test]
fn non_logger_recorder_is_rejected() {
    let (_, diagnostics) = run(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        TypeDecl::class("frc.robot.logging", "NotALogger")
            .custom_logger_for(vec![TypeRef::declared("frc.robot.Elevator")]),
    ]);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2003]);
    assert_eq!(
        diagnostics[0].labels[0].message,
        "it does not extend ClassSpecificLogger"
    );
}

#[test]
fn target_is_found_through_generic_base_classes() {
    let base = TypeDecl::class("frc.robot.logging", "BaseRecorder")
        .with_modifiers(Modifiers::ABSTRACT)
        .with_type_param("T")
        .extends(DeclaredType::generic(
            known::CLASS_SPECIFIC_LOGGER,
            vec![TypeRef::TypeVar("T".to_string())],
        ));
    let concrete = TypeDecl::class("frc.robot.logging", "ElevatorRecorder")
        .extends(DeclaredType::generic(
            "frc.robot.logging.BaseRecorder",
            vec![TypeRef::declared("frc.robot.Elevator")],
        ))
        .custom_logger_for(vec![TypeRef::declared("frc.robot.Elevator")]);
    let (registry, diagnostics) =
        run(vec![TypeDecl::class("frc.robot", "Elevator"), base, concrete]);
    assert!(diagnostics.is_empty());
    assert!(registry.contains("frc.robot.Elevator"));
}

#[test]
fn duplicate_registration_keeps_the_first_by_name() {
    let (registry, diagnostics) = run(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        recorder("ZetaRecorder", "frc.robot.Elevator"),
        recorder("AlphaRecorder", "frc.robot.Elevator"),
    ]);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2004]);
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get("frc.robot.Elevator").map(|b| b.recorder.as_str()),
        Some("frc.robot.logging.AlphaRecorder")
    );
    assert!(diagnostics[0]
        .message
        .contains("already logged by `frc.robot.logging.AlphaRecorder`"));
    assert_eq!(
        diagnostics[0].primary_element(),
        Some(&ElementRef::ty("frc.robot.logging.ZetaRecorder"))
    );
}

#[test]
fn one_recorder_for_many_targets_is_instantiated_once() {
    let shared = TypeDecl::class("frc.robot.logging", "MotorRecorder")
        .extends(logger_of("frc.robot.Motor"))
        .custom_logger_for(vec![
            TypeRef::declared("frc.robot.Motor"),
            TypeRef::declared("frc.robot.Motor"),
        ]);
    let (registry, diagnostics) = run(vec![TypeDecl::class("frc.robot", "Motor"), shared]);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2004]);
    assert_eq!(registry.recorders().len(), 1);
}

#[test]
fn recorders_are_sorted_by_field() {
    let (registry, _) = run(vec![
        TypeDecl::class("frc.robot", "Wrist"),
        TypeDecl::class("frc.robot", "Elevator"),
        recorder("WristRecorder", "frc.robot.Wrist"),
        recorder("ElevatorRecorder", "frc.robot.Elevator"),
    ]);
    let fields: Vec<_> = registry
        .recorders()
        .into_iter()
        .map(|binding| binding.field.as_str())
        .collect();
    assert_eq!(fields, vec!["elevatorRecorder", "wristRecorder"]);
}

#[test]
fn registry_errors_do_not_stop_other_registrations() {
    let (registry, diagnostics) = run(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        TypeDecl::class("frc.robot", "Wrist"),
        recorder("ElevatorRecorder", "frc.robot.Elevator").with_type_param("T"),
        recorder("WristRecorder", "frc.robot.Wrist"),
    ]);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E2002]);
    assert!(!registry.contains("frc.robot.Elevator"));
    assert!(registry.contains("frc.robot.Wrist"));
}
