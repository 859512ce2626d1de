#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Driver runs over graph files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use epic::cli::{CheckArgs, ColorChoice, GenerateArgs, OutputFormat, ReportArgs};
use epic::{run, CliError, Command, Exit};
use pretty_assertions::assert_eq;

const ROBOT: &str = r#"{
  "types": [
    {
      "package": "frc.robot",
      "name": "Robot",
      "modifiers": ["public"],
      "supertypes": [{"name": "edu.wpi.first.wpilibj.TimedRobot"}],
      "logged": {},
      "fields": [
        {"name": "arm", "type": {"declared": {"name": "frc.robot.Arm"}}, "modifiers": ["private"], "logged": {}}
      ]
    },
    {
      "package": "frc.robot",
      "name": "Arm",
      "modifiers": ["public"],
      "fields": [
        {"name": "angle", "type": {"primitive": "double"}, "modifiers": ["public"], "logged": {"importance": "CRITICAL"}}
      ]
    }
  ]
}"#;

const BROKEN: &str = r#"{
  "types": [
    {
      "package": "frc.robot",
      "name": "Arm",
      "methods": [
        {"name": "getAngle", "return_type": {"primitive": "double"}, "logged": {}}
      ]
    }
  ]
}"#;

fn report(config: Option<PathBuf>) -> ReportArgs {
    ReportArgs {
        config,
        format: OutputFormat::Json,
        color: ColorChoice::Never,
    }
}

fn write_graph(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn generate_writes_loggers_and_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), ROBOT);
    let out = dir.path().join("gen");

    let exit = run(Command::Generate(GenerateArgs {
        graph,
        out: out.clone(),
        report: report(None),
    }))
    .unwrap();
    assert_eq!(exit, Exit::Success);

    let arm = fs::read_to_string(out.join("frc/robot/ArmLogger.java")).unwrap();
    assert!(arm.contains("if (Epilogue.shouldLog(Logged.Importance.CRITICAL)) {"));
    assert!(arm.contains("backend.log(\"angle\", object.angle);"));
    assert!(out.join("frc/robot/RobotLogger.java").is_file());

    let aggregate = fs::read_to_string(out.join("edu/wpi/first/epilogue/Epilogue.java")).unwrap();
    assert!(aggregate.contains("public static void bind(Robot robot) {"));
}

#[test]
fn config_file_moves_the_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), ROBOT);
    let config = dir.path().join("epic.toml");
    fs::write(&config, "aggregate_package = \"frc.robot\"\naggregate_name = \"RobotLogs\"\n")
        .unwrap();
    let out = dir.path().join("gen");

    let exit = run(Command::Generate(GenerateArgs {
        graph,
        out: out.clone(),
        report: report(Some(config)),
    }))
    .unwrap();
    assert_eq!(exit, Exit::Success);
    assert!(out.join("frc/robot/RobotLogs.java").is_file());
    assert!(!out.join("edu").exists());
}

#[test]
fn errors_exit_with_diagnostics_status_and_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), BROKEN);
    let out = dir.path().join("gen");

    let exit = run(Command::Generate(GenerateArgs {
        graph,
        out: out.clone(),
        report: report(None),
    }))
    .unwrap();
    assert_eq!(exit, Exit::Diagnostics);
    assert_eq!(exit.code(), 2);
    assert!(!out.exists());
}

#[test]
fn check_never_writes() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), ROBOT);

    let exit = run(Command::Check(CheckArgs {
        graph,
        report: report(None),
    }))
    .unwrap();
    assert_eq!(exit, Exit::Success);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn unreadable_inputs_are_driver_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = run(Command::Check(CheckArgs {
        graph: dir.path().join("absent.json"),
        report: report(None),
    }));
    assert!(matches!(missing, Err(CliError::Read { .. })));

    let garbage = write_graph(dir.path(), "{ not json");
    let parsed = run(Command::Check(CheckArgs {
        graph: garbage,
        report: report(None),
    }));
    assert!(matches!(parsed, Err(CliError::Parse { .. })));

    let config = run(Command::Check(CheckArgs {
        graph: write_graph(dir.path(), ROBOT),
        report: report(Some(dir.path().join("absent.toml"))),
    }));
    assert!(matches!(config, Err(CliError::Config(_))));
}

#[test]
fn explain_rejects_unknown_codes() {
    assert_eq!(
        run(Command::Explain {
            code: "E1001".to_string()
        })
        .unwrap(),
        Exit::Success
    );
    assert!(matches!(
        run(Command::Explain {
            code: "X9999".to_string()
        }),
        Err(CliError::UnknownCode(_))
    ));
}
