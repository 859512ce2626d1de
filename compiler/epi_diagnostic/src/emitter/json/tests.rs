use super::*;
use crate::ErrorCode;
use epi_ir::ElementRef;
use pretty_assertions::assert_eq;

fn render(diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_json_output_parses_back() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("method \"getAngle\" is not public")
        .with_label(ElementRef::method("frc.robot.Arm", "getAngle"), "here")
        .with_note("logged methods must be public")
        .with_suggestion("make it public");

    let text = render(&[diag]);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let entry = &value[0];
    assert_eq!(entry["code"], "E1002");
    assert_eq!(entry["severity"], "error");
    assert_eq!(entry["message"], "method \"getAngle\" is not public");
    assert_eq!(entry["labels"][0]["element"], "frc.robot.Arm#getAngle()");
    assert_eq!(entry["labels"][0]["primary"], true);
    assert_eq!(entry["notes"][0], "logged methods must be public");
    assert_eq!(entry["suggestions"][0], "make it public");
}

#[test]
fn test_json_multiple_entries() {
    let text = render(&[
        Diagnostic::error(ErrorCode::E1001).with_message("one"),
        Diagnostic::warning(ErrorCode::W1001).with_message("two"),
    ]);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["severity"], "warning");
}

#[test]
fn test_json_empty_array() {
    let text = render(&[]);
    assert_eq!(text, "[]\n");
}
