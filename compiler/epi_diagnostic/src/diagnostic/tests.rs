use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(ElementRef::field("frc.robot.Arm", "socket"), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_element_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_secondary_label(ElementRef::ty("frc.robot.First"), "first registered here")
        .with_label(ElementRef::ty("frc.robot.Second"), "duplicate");

    assert_eq!(
        diag.primary_element(),
        Some(&ElementRef::ty("frc.robot.Second"))
    );
}

#[test]
fn test_note_is_not_error() {
    let diag = Diagnostic::note(ErrorCode::N1001).with_message("excluded");
    assert!(!diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.severity, Severity::Note);
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("test error")
        .with_label(ElementRef::method("frc.robot.Arm", "getAngle"), "primary")
        .with_secondary_label(ElementRef::ty("frc.robot.Arm"), "secondary")
        .with_note("a note")
        .with_suggestion("a suggestion");

    let output = diag.to_string();
    assert!(output.contains("error [E1002]: test error"));
    assert!(output.contains("--> frc.robot.Arm#getAngle(): primary"));
    assert!(output.contains("secondary"));
    assert!(output.contains("= note: a note"));
    assert!(output.contains("= help: a suggestion"));
}

#[test]
fn test_diagnostic_hash_and_eq() {
    use std::collections::HashSet;

    let d1 = Diagnostic::error(ErrorCode::E1001).with_message("test");
    let d2 = Diagnostic::error(ErrorCode::E1001).with_message("test");
    let d3 = Diagnostic::error(ErrorCode::E1002).with_message("other");

    assert_eq!(d1, d2);
    assert_ne!(d1, d3);

    let mut set = HashSet::new();
    set.insert(d1.clone());
    set.insert(d2);
    set.insert(d3);
    assert_eq!(set.len(), 2);
}
