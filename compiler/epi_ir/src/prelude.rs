//! Built-in declarations for well-known library types.
//!
//! The classifiers answer capability questions ("is this a collection?",
//! "is this a measure?") through subtype queries, so the supertype chains of
//! the standard and robotics libraries must be present in every graph. User
//! graphs may redeclare any of these; the user declaration replaces the
//! prelude entry.

use crate::{known, DeclaredType, FieldDecl, Modifiers, PrimitiveKind, TypeDecl, TypeRef};

fn var(name: &str) -> TypeRef {
    TypeRef::TypeVar(name.to_string())
}

fn sup(name: &str) -> DeclaredType {
    DeclaredType::new(name)
}

fn sup_of(name: &str, args: Vec<TypeRef>) -> DeclaredType {
    DeclaredType::generic(name, args)
}

fn split(qualified: &str) -> (&str, &str) {
    qualified.rsplit_once('.').unwrap_or(("", qualified))
}

fn class(qualified: &str) -> TypeDecl {
    let (package, name) = split(qualified);
    TypeDecl::class(package, name)
}

fn abstract_class(qualified: &str) -> TypeDecl {
    class(qualified).with_modifiers(Modifiers::ABSTRACT)
}

fn interface(qualified: &str) -> TypeDecl {
    let (package, name) = split(qualified);
    TypeDecl::interface(package, name)
}

/// A struct-serializable geometry class.
fn geometry(qualified: &str) -> TypeDecl {
    let (package, name) = split(qualified);
    let descriptor = format!("{package}.struct.{name}Struct");
    TypeDecl::class(package, name)
        .extends(sup("edu.wpi.first.util.struct.StructSerializable"))
        .with_field(
            FieldDecl::new(known::STRUCT_FIELD, TypeRef::declared(descriptor))
                .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
        )
}

/// A concrete measure interface over the given unit.
fn measure(name: &str, unit: &str) -> TypeDecl {
    TypeDecl::interface("edu.wpi.first.units.measure", name).extends(sup_of(
        known::MEASURE,
        vec![TypeRef::declared(format!("edu.wpi.first.units.{unit}"))],
    ))
}

/// Every prelude declaration, in a fixed order.
pub fn prelude() -> Vec<TypeDecl> {
    let mut decls = vec![
        // java.lang
        class(known::OBJECT),
        class(known::STRING).with_modifiers(Modifiers::FINAL),
        abstract_class(known::ENUM).with_type_param("E"),
    ];
    decls.extend(
        PrimitiveKind::ALL
            .iter()
            .map(|kind| class(kind.boxed_name()).with_modifiers(Modifiers::FINAL)),
    );

    // java.util
    decls.extend([
        interface("java.lang.Iterable").with_type_param("T"),
        interface(known::COLLECTION)
            .with_type_param("E")
            .extends(sup_of("java.lang.Iterable", vec![var("E")])),
        interface("java.util.List")
            .with_type_param("E")
            .extends(sup_of(known::COLLECTION, vec![var("E")])),
        interface("java.util.Set")
            .with_type_param("E")
            .extends(sup_of(known::COLLECTION, vec![var("E")])),
        interface("java.util.Queue")
            .with_type_param("E")
            .extends(sup_of(known::COLLECTION, vec![var("E")])),
        class("java.util.ArrayList")
            .with_type_param("E")
            .extends(sup_of("java.util.List", vec![var("E")])),
        class("java.util.LinkedList")
            .with_type_param("E")
            .extends(sup_of("java.util.List", vec![var("E")]))
            .extends(sup_of("java.util.Queue", vec![var("E")])),
        class("java.util.HashSet")
            .with_type_param("E")
            .extends(sup_of("java.util.Set", vec![var("E")])),
        interface("java.util.Map").with_type_param("K").with_type_param("V"),
        class("java.util.HashMap")
            .with_type_param("K")
            .with_type_param("V")
            .extends(sup_of("java.util.Map", vec![var("K"), var("V")])),
        interface(known::BOOLEAN_SUPPLIER),
        interface(known::INT_SUPPLIER),
        interface(known::LONG_SUPPLIER),
        interface(known::DOUBLE_SUPPLIER),
        interface("java.util.function.Supplier").with_type_param("T"),
    ]);

    // Units
    decls.extend([
        interface("edu.wpi.first.units.Unit"),
        interface(known::MEASURE).with_type_param("U"),
        measure("Distance", "DistanceUnit"),
        measure("Angle", "AngleUnit"),
        measure("Time", "TimeUnit"),
        measure("LinearVelocity", "LinearVelocityUnit"),
        measure("AngularVelocity", "AngularVelocityUnit"),
        measure("Voltage", "VoltageUnit"),
        measure("Current", "CurrentUnit"),
    ]);

    // Serialization and introspection
    decls.extend([
        interface("edu.wpi.first.util.struct.Struct").with_type_param("T"),
        interface("edu.wpi.first.util.struct.StructSerializable"),
        geometry("edu.wpi.first.math.geometry.Rotation2d"),
        geometry("edu.wpi.first.math.geometry.Translation2d"),
        geometry("edu.wpi.first.math.geometry.Pose2d"),
        geometry("edu.wpi.first.math.geometry.Pose3d"),
        geometry("edu.wpi.first.math.kinematics.ChassisSpeeds"),
        geometry("edu.wpi.first.math.kinematics.SwerveModuleState"),
        interface(known::SENDABLE),
        class("edu.wpi.first.wpilibj.smartdashboard.Field2d").extends(sup(known::SENDABLE)),
        class("edu.wpi.first.wpilibj.smartdashboard.SendableChooser")
            .with_type_param("V")
            .extends(sup(known::SENDABLE)),
    ]);

    // Command framework and robot base classes
    decls.extend([
        interface("edu.wpi.first.wpilibj2.command.Subsystem"),
        abstract_class(known::COMMAND).extends(sup(known::SENDABLE)),
        abstract_class(known::SUBSYSTEM_BASE)
            .extends(sup("edu.wpi.first.wpilibj2.command.Subsystem"))
            .extends(sup(known::SENDABLE)),
        abstract_class("edu.wpi.first.wpilibj.RobotBase"),
        abstract_class("edu.wpi.first.wpilibj.IterativeRobotBase")
            .extends(sup("edu.wpi.first.wpilibj.RobotBase")),
        class(known::TIMED_ROBOT).extends(sup("edu.wpi.first.wpilibj.IterativeRobotBase")),
    ]);

    // Logging runtime
    decls.push(abstract_class(known::CLASS_SPECIFIC_LOGGER).with_type_param("T"));

    decls
}
