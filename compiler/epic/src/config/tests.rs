use figment::Jail;
use pretty_assertions::assert_eq;

use super::*;

fn load(explicit: Option<&Path>) -> figment::error::Result<GeneratorConfig> {
    load_config(explicit).map_err(|err| figment::Error::from(err.to_string()))
}

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|_jail| {
        assert_eq!(load(None)?, GeneratorConfig::default());
        Ok(())
    });
}

#[test]
fn local_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            CONFIG_FILE,
            r#"
aggregate_package = "frc.robot"
main_types = ["frc.robot.RobotBase"]
"#,
        )?;
        let config = load(None)?;
        assert_eq!(config.aggregate_package, "frc.robot");
        assert_eq!(config.main_types, vec!["frc.robot.RobotBase".to_string()]);
        assert_eq!(config.aggregate_name, "Epilogue");
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_the_local_lookup() {
    Jail::expect_with(|jail| {
        jail.create_file(CONFIG_FILE, "aggregate_name = \"Local\"\n")?;
        jail.create_file("ci.toml", "aggregate_name = \"Ci\"\n")?;
        let config = load(Some(Path::new("ci.toml")))?;
        assert_eq!(config.aggregate_name, "Ci");
        Ok(())
    });
}

#[test]
fn environment_beats_files() {
    Jail::expect_with(|jail| {
        jail.create_file(CONFIG_FILE, "aggregate_name = \"Local\"\nerror_limit = 3\n")?;
        jail.set_env("EPIC_AGGREGATE_NAME", "RobotLogs");
        jail.set_env("EPIC_ERROR_LIMIT", "0");
        let config = load(None)?;
        assert_eq!(config.aggregate_name, "RobotLogs");
        assert_eq!(config.error_limit, 0);
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_configuration() {
    Jail::expect_with(|jail| {
        jail.set_env("EPIC_LOG", "debug");
        assert_eq!(load(None)?, GeneratorConfig::default());
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let Err(err) = load_config(Some(Path::new("absent.toml"))) else {
            panic!("missing file should fail");
        };
        assert_eq!(
            err.to_string(),
            "configuration file `absent.toml` does not exist"
        );
        Ok(())
    });
}

#[test]
fn malformed_values_are_reported() {
    Jail::expect_with(|jail| {
        jail.create_file(CONFIG_FILE, "error_limit = \"many\"\n")?;
        assert!(matches!(load_config(None), Err(ConfigError::Figment(_))));
        Ok(())
    });
}
