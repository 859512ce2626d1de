//! Aggregate registry emission.
//!
//! The aggregate holds the shared configuration, one instance of every
//! generated logger and custom recorder, and the `update`/`bind` entry points
//! for roots that are main types.

use epi_ir::known;

use super::{java_string, GeneratedUnit, ImportSet, SourceWriter};
use crate::{GenContext, LoggableType};

/// Key under which each update's duration is recorded, in milliseconds.
const LAST_RUN_KEY: &str = "Epilogue/Stats/Last Run";

const SECONDS: &str = "edu.wpi.first.units.Units.Seconds";

/// Parameter name of `update`/`bind`; never shadows `config` or `start`.
const ROOT_PARAM: &str = "robot";

/// A `public static final` logger instance.
struct Instance {
    field: String,
    ty: String,
}

/// Generate the aggregate unit.
#[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
pub fn emit_aggregate(cx: &GenContext<'_>, roots: &[LoggableType<'_>]) -> GeneratedUnit {
    let package = cx.config.aggregate_package.as_str();
    let name = cx.config.aggregate_name.as_str();
    let mut imports = ImportSet::new(package, name);

    let config_ty = imports.reference(known::EPILOGUE_CONFIGURATION);
    let logged = imports.reference(known::LOGGED);
    let consumer = imports.reference("java.util.function.Consumer");

    let mut instances: Vec<Instance> = roots
        .iter()
        .filter_map(|root| cx.unit_for(&root.qualified_name()))
        .map(|unit| Instance {
            field: unit.field.clone(),
            ty: imports.reference_in(&unit.package, &unit.simple),
        })
        .collect();
    for binding in cx.recorders.recorders() {
        let ty = match cx.graph.get(&binding.recorder) {
            Some(decl) => imports.reference_in(&decl.package, &decl.name),
            None => binding.recorder.clone(),
        };
        instances.push(Instance {
            field: binding.field.clone(),
            ty,
        });
    }
    instances.sort_by(|a, b| a.field.cmp(&b.field));

    let main_roots: Vec<(String, String)> = roots
        .iter()
        .filter(|root| is_main_root(cx, root))
        .filter_map(|root| {
            let unit = cx.unit_for(&root.qualified_name())?;
            let ty = imports.reference_in(&root.decl.package, &root.decl.name);
            Some((ty, unit.field.clone()))
        })
        .collect();
    if !main_roots.is_empty() {
        imports.add_static(SECONDS);
    }
    tracing::debug!(
        instances = instances.len(),
        main_roots = main_roots.len(),
        "emitting aggregate"
    );

    let mut out = SourceWriter::new();
    if !package.is_empty() {
        out.line(&format!("package {package};"));
        out.blank();
    }
    imports.render(&mut out);
    out.blank();

    out.open(&format!("public final class {name}"));
    out.line(&format!("private static final {config_ty} config = new {config_ty}();"));
    out.blank();

    for instance in &instances {
        out.line(&format!(
            "public static final {ty} {field} = new {ty}();",
            ty = instance.ty,
            field = instance.field
        ));
    }
    out.blank();

    out.open(&format!("public static void configure({consumer}<{config_ty}> configurator)"));
    out.line("configurator.accept(config);");
    out.close();
    out.blank();

    out.open(&format!("public static {config_ty} getConfig()"));
    out.line("return config;");
    out.close();
    out.blank();

    out.line("/**");
    out.line(" * Checks if data associated with a given importance level should be logged.");
    out.line(" */");
    out.open(&format!("public static boolean shouldLog({logged}.Importance importance)"));
    out.line("return importance.compareTo(config.minimumImportance) >= 0;");
    out.close();

    for (ty, logger) in &main_roots {
        out.blank();
        emit_update(&mut out, ty, ROOT_PARAM, logger);
        out.blank();
        emit_bind(&mut out, ty, ROOT_PARAM);
    }

    out.close();

    GeneratedUnit {
        package: package.to_string(),
        name: name.to_string(),
        source: out.output(),
    }
}

/// Whether a root gets `update`/`bind` entry points.
fn is_main_root(cx: &GenContext<'_>, root: &LoggableType<'_>) -> bool {
    let qualified = root.qualified_name();
    cx.config
        .main_types
        .iter()
        .any(|main| cx.graph.is_subtype(&qualified, main))
}

/// Timed update of the whole tree under the root.
fn emit_update(out: &mut SourceWriter, ty: &str, param: &str, logger: &str) {
    out.open(&format!("public static void update({ty} {param})"));
    out.line("long start = System.nanoTime();");
    out.line(&format!(
        "{logger}.tryUpdate(config.backend.getNested(config.root), {param}, config.errorHandler);"
    ));
    out.line(&format!(
        "config.backend.log({}, (System.nanoTime() - start) / 1e6);",
        java_string(LAST_RUN_KEY)
    ));
    out.close();
}

/// Schedule `update` on the root's periodic loop.
fn emit_bind(out: &mut SourceWriter, ty: &str, param: &str) {
    out.open(&format!("public static void bind({ty} {param})"));
    out.open("if (config.loggingPeriod == null)");
    out.line(&format!("config.loggingPeriod = Seconds.of({param}.getPeriod());"));
    out.close();
    out.open("if (config.loggingPeriodOffset == null)");
    out.line("config.loggingPeriodOffset = config.loggingPeriod.div(2);");
    out.close();
    out.blank();
    out.open(&format!("{param}.addPeriodic(() ->"));
    out.line(&format!("update({param});"));
    out.close_with(", config.loggingPeriod, config.loggingPeriodOffset);");
    out.close();
}
