//! Qualified names of the library types the generator recognizes.

pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";
pub const ENUM: &str = "java.lang.Enum";

pub const COLLECTION: &str = "java.util.Collection";

pub const BOOLEAN_SUPPLIER: &str = "java.util.function.BooleanSupplier";
pub const INT_SUPPLIER: &str = "java.util.function.IntSupplier";
pub const LONG_SUPPLIER: &str = "java.util.function.LongSupplier";
pub const DOUBLE_SUPPLIER: &str = "java.util.function.DoubleSupplier";

pub const MEASURE: &str = "edu.wpi.first.units.Measure";
pub const SENDABLE: &str = "edu.wpi.first.util.sendable.Sendable";
pub const COMMAND: &str = "edu.wpi.first.wpilibj2.command.Command";
pub const SUBSYSTEM_BASE: &str = "edu.wpi.first.wpilibj2.command.SubsystemBase";
pub const TIMED_ROBOT: &str = "edu.wpi.first.wpilibj.TimedRobot";

pub const EPILOGUE_PACKAGE: &str = "edu.wpi.first.epilogue";
pub const LOGGED: &str = "edu.wpi.first.epilogue.Logged";
pub const EPILOGUE_CONFIGURATION: &str = "edu.wpi.first.epilogue.EpilogueConfiguration";
pub const CLASS_SPECIFIC_LOGGER: &str = "edu.wpi.first.epilogue.logging.ClassSpecificLogger";
pub const EPILOGUE_BACKEND: &str = "edu.wpi.first.epilogue.logging.EpilogueBackend";

/// Name of the static descriptor field on struct-serializable types.
pub const STRUCT_FIELD: &str = "struct";
