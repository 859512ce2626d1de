use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_source_spelling() {
    let list = TypeRef::generic("java.util.List", vec![TypeRef::string()]);
    assert_eq!(list.source(), "java.util.List<java.lang.String>");
    assert_eq!(
        TypeRef::array(TypeRef::primitive(PrimitiveKind::Double)).source(),
        "double[]"
    );
    assert_eq!(TypeRef::Void.source(), "void");
}

#[test]
fn test_erasure_drops_arguments() {
    let map = TypeRef::generic(
        "java.util.Map",
        vec![TypeRef::string(), TypeRef::TypeVar("V".into())],
    );
    assert_eq!(map.erasure(), "java.util.Map");
    assert_eq!(TypeRef::TypeVar("T".into()).erasure(), "java.lang.Object");
    assert_eq!(
        TypeRef::array(TypeRef::generic("java.util.List", vec![TypeRef::string()])).erasure(),
        "java.util.List[]"
    );
}

#[test]
fn test_string_detection() {
    assert!(TypeRef::string().is_string());
    assert!(!TypeRef::declared("java.lang.Object").is_string());
    assert!(!TypeRef::array(TypeRef::string()).is_string());
}

#[test]
fn test_simple_name() {
    assert_eq!(DeclaredType::new("frc.robot.Outer.Inner").simple_name(), "Inner");
    assert_eq!(DeclaredType::new("Toplevel").simple_name(), "Toplevel");
}

#[test]
fn test_boxed_names_cover_all_primitives() {
    for kind in PrimitiveKind::ALL {
        assert!(kind.boxed_name().starts_with("java.lang."));
    }
}

#[test]
fn test_json_shape() {
    let json = r#"{"array": {"declared": {"name": "edu.wpi.first.math.geometry.Pose2d"}}}"#;
    let Ok(ty) = serde_json::from_str::<TypeRef>(json) else {
        panic!("type ref should deserialize");
    };
    assert_eq!(
        ty,
        TypeRef::array(TypeRef::declared("edu.wpi.first.math.geometry.Pose2d"))
    );

    let Ok(void) = serde_json::from_str::<TypeRef>(r#""void""#) else {
        panic!("void should deserialize");
    };
    assert!(void.is_void());
}
