#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end generation passes over small robot projects.

use std::io;

use epi_diagnostic::ErrorCode;
use epi_gen::{check, generate, EmitError, GeneratedUnit, GeneratorConfig, MemorySink, UnitSink};
use epi_ir::{
    known, DeclGraph, DeclaredType, FieldDecl, Logged, MethodDecl, PrimitiveKind, Strategy,
    TypeDecl, TypeRef,
};
use pretty_assertions::assert_eq;

fn double() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Double)
}

fn recorder(name: &str, target: &str) -> TypeDecl {
    TypeDecl::class("frc.robot.logging", name)
        .extends(DeclaredType::generic(
            known::CLASS_SPECIFIC_LOGGER,
            vec![TypeRef::declared(target)],
        ))
        .custom_logger_for(vec![TypeRef::declared(target)])
}

fn robot_project() -> DeclGraph {
    DeclGraph::from_decls(vec![
        TypeDecl::class("frc.robot", "Robot")
            .extends(DeclaredType::new(known::TIMED_ROBOT))
            .logged(Logged::default())
            .with_field(
                FieldDecl::new("arm", TypeRef::declared("frc.robot.Arm"))
                    .private()
                    .logged(Logged::default()),
            ),
        TypeDecl::class("frc.robot", "Arm")
            .with_field(FieldDecl::new("x", double()).public().logged(Logged::default()))
            .with_method(
                MethodDecl::new("getAngle", double())
                    .public()
                    .logged(Logged::default()),
            ),
    ])
    .unwrap()
}

fn run(graph: &DeclGraph) -> (epi_gen::GenerationOutcome, MemorySink) {
    let mut sink = MemorySink::new();
    let outcome = generate(graph, &GeneratorConfig::default(), &mut sink);
    (outcome, sink)
}

#[test]
fn clean_project_writes_every_logger_and_the_aggregate() {
    let (outcome, sink) = run(&robot_project());
    assert!(outcome.diagnostics.is_empty());
    assert!(!outcome.halted);
    assert_eq!(
        outcome.units_written,
        vec![
            "frc.robot.ArmLogger".to_string(),
            "frc.robot.RobotLogger".to_string(),
            "edu.wpi.first.epilogue.Epilogue".to_string(),
        ]
    );
    assert_eq!(sink.len(), 3);

    let arm = sink.get("frc.robot.ArmLogger").unwrap();
    assert!(arm.source.contains("      backend.log(\"x\", object.x);\n"));
    assert!(arm.source.contains("      backend.log(\"getAngle\", object.getAngle());\n"));
}

#[test]
fn repeated_passes_are_byte_identical() {
    let graph = robot_project();
    let (_, first) = run(&graph);
    let (_, second) = run(&graph);
    assert_eq!(first.into_units(), second.into_units());
}

#[test]
fn duplicate_recorders_report_once_and_keep_the_first() {
    let graph = DeclGraph::from_decls(vec![
        TypeDecl::class("frc.robot", "Elevator"),
        recorder("ZetaRecorder", "frc.robot.Elevator"),
        recorder("AlphaRecorder", "frc.robot.Elevator"),
    ])
    .unwrap();
    let (outcome, sink) = run(&graph);
    assert_eq!(outcome.codes(), vec![ErrorCode::E2004]);
    assert!(!outcome.halted);

    let aggregate = sink.get("edu.wpi.first.epilogue.Epilogue").unwrap();
    assert!(aggregate.source.contains("alphaRecorder = new AlphaRecorder();"));
    assert!(!aggregate.source.contains("zetaRecorder"));
}

#[test]
fn opt_out_skips_unloggable_fields_with_a_note() {
    let graph = DeclGraph::from_decls(vec![
        TypeDecl::class("frc.robot", "Socket"),
        TypeDecl::class("frc.robot", "Arm")
            .logged(Logged::default().with_strategy(Strategy::OptOut))
            .with_field(FieldDecl::new("x", double()).public())
            .with_field(FieldDecl::new("socket", TypeRef::declared("frc.robot.Socket")).public()),
    ])
    .unwrap();
    let (outcome, sink) = run(&graph);
    assert_eq!(outcome.codes(), vec![ErrorCode::N1001]);
    assert!(!outcome.has_errors());

    let arm = sink.get("frc.robot.ArmLogger").unwrap();
    assert!(arm.source.contains("backend.log(\"x\", object.x);"));
    assert!(!arm.source.contains("socket"));
}

#[test]
fn validation_errors_halt_emission() {
    let graph = DeclGraph::from_decls(vec![TypeDecl::class("frc.robot", "Arm").with_method(
        MethodDecl::new("getAngle", double()).logged(Logged::default()),
    )])
    .unwrap();
    let (outcome, sink) = run(&graph);
    assert!(outcome.halted);
    assert_eq!(outcome.codes(), vec![ErrorCode::E1002]);
    assert!(outcome.units_written.is_empty());
    assert!(sink.is_empty());
}

#[test]
fn check_reports_without_writing() {
    let outcome = check(&robot_project(), &GeneratorConfig::default());
    assert!(outcome.diagnostics.is_empty());
    assert!(outcome.units_written.is_empty());
    assert!(!outcome.halted);
}

/// Sink that refuses one unit and stores the rest.
struct RefusingSink {
    refused: &'static str,
    inner: MemorySink,
}

impl UnitSink for RefusingSink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> Result<(), EmitError> {
        if unit.qualified_name() == self.refused {
            return Err(EmitError::Io {
                unit: unit.qualified_name(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.inner.write_unit(unit)
    }
}

#[test]
fn write_failures_are_reported_and_other_units_still_written() {
    let mut sink = RefusingSink {
        refused: "frc.robot.ArmLogger",
        inner: MemorySink::new(),
    };
    let outcome = generate(&robot_project(), &GeneratorConfig::default(), &mut sink);
    assert_eq!(outcome.codes(), vec![ErrorCode::E3001]);
    assert!(!outcome.halted);
    assert_eq!(
        outcome.units_written,
        vec![
            "frc.robot.RobotLogger".to_string(),
            "edu.wpi.first.epilogue.Epilogue".to_string(),
        ]
    );
    assert!(sink.inner.get("frc.robot.ArmLogger").is_none());
}
