use super::*;
use crate::PrimitiveKind;
use pretty_assertions::assert_eq;

fn double() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Double)
}

#[test]
fn test_eligible_accessor() {
    let method = MethodDecl::new("getAngle", double()).public();
    assert!(method.is_eligible());
}

#[test]
fn test_ineligibility_reports_every_reason() {
    let method = MethodDecl::new("setAngle", TypeRef::Void)
        .with_modifiers(Modifiers::STATIC)
        .with_param(double());
    assert_eq!(
        method.ineligibility(),
        vec![
            Ineligibility::NotPublic,
            Ineligibility::Static,
            Ineligibility::ReturnsVoid,
            Ineligibility::TakesParameters,
        ]
    );
}

#[test]
fn test_qualified_and_simple_names() {
    let decl = TypeDecl::class("frc.robot", "Drive.Module");
    assert_eq!(decl.qualified_name(), "frc.robot.Drive.Module");
    assert_eq!(decl.simple_name(), "Module");

    let default_package = TypeDecl::class("", "Robot");
    assert_eq!(default_package.qualified_name(), "Robot");
}

#[test]
fn test_struct_serializable_requires_public_static_field() {
    assert!(TypeDecl::record("frc.robot", "Pose").with_struct().is_struct_serializable());

    let instance_field = TypeDecl::class("frc.robot", "Pose").with_field(
        FieldDecl::new("struct", TypeRef::declared("frc.robot.PoseStruct")).public(),
    );
    assert!(!instance_field.is_struct_serializable());
}

#[test]
fn test_implicit_constructor() {
    assert!(TypeDecl::class("frc.robot", "Recorder").has_public_no_arg_constructor());
}

#[test]
fn test_explicit_constructors() {
    let only_args = TypeDecl::class("frc.robot", "Recorder").with_constructor(ConstructorDecl {
        params: vec![double()],
        modifiers: Modifiers::PUBLIC,
    });
    assert!(!only_args.has_public_no_arg_constructor());

    let private_no_arg = TypeDecl::class("frc.robot", "Recorder").with_constructor(ConstructorDecl {
        params: Vec::new(),
        modifiers: Modifiers::PRIVATE,
    });
    assert!(!private_no_arg.has_public_no_arg_constructor());

    let abstract_class =
        TypeDecl::class("frc.robot", "Recorder").with_modifiers(Modifiers::ABSTRACT);
    assert!(!abstract_class.has_public_no_arg_constructor());
}

#[test]
fn test_as_type_ref_uses_own_parameters() {
    let decl = TypeDecl::class("frc.robot", "Box").with_type_param("T");
    assert_eq!(decl.as_type_ref().source(), "frc.robot.Box<T>");
    assert!(decl.is_generic());
}

#[test]
fn test_modifiers_json_round_trip_shape() {
    let json = r#"{
        "name": "speed",
        "type": {"primitive": "double"},
        "modifiers": ["private", "final"],
        "logged": {"name": "Speed", "importance": "INFO"}
    }"#;
    let Ok(field) = serde_json::from_str::<FieldDecl>(json) else {
        panic!("field should deserialize");
    };
    assert_eq!(field.modifiers, Modifiers::PRIVATE | Modifiers::FINAL);
    let Some(logged) = &field.logged else {
        panic!("logged attribute should be present");
    };
    assert_eq!(logged.name.as_deref(), Some("Speed"));
    assert_eq!(logged.importance, Some(crate::Importance::Info));

    let Ok(value) = serde_json::to_value(&field) else {
        panic!("field should serialize");
    };
    assert_eq!(value["modifiers"], serde_json::json!(["private", "final"]));
}

#[test]
fn test_unknown_modifier_is_rejected() {
    let json = r#"{"name": "x", "type": {"primitive": "int"}, "modifiers": ["volatile"]}"#;
    let Err(err) = serde_json::from_str::<FieldDecl>(json) else {
        panic!("unknown modifier should fail");
    };
    assert!(err.to_string().contains("volatile"));
}
