//! Layered generator configuration.
//!
//! Sources, lowest to highest priority:
//! 1. `GeneratorConfig::default()`
//! 2. `--config <path>`, or `./epic.toml` when no path is given and it exists
//! 3. `EPIC_*` environment variables (`EPIC_AGGREGATE_NAME` sets
//!    `aggregate_name`)

use std::path::{Path, PathBuf};

use epi_gen::GeneratorConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "epic.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "EPIC_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file `{}` does not exist", .0.display())]
    Missing(PathBuf),

    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),
}

/// Build the provider chain.
pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(GeneratorConfig::default()));
    match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::Missing(path.to_path_buf())),
        Some(path) => figment = figment.merge(Toml::file(path)),
        None => {
            let local = Path::new(CONFIG_FILE);
            if local.exists() {
                figment = figment.merge(Toml::file(local));
            }
        }
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

/// Load the configuration for one run.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = figment(explicit)?.extract()?;
    tracing::debug!(
        aggregate = %config.aggregate_qualified_name(),
        main_types = config.main_types.len(),
        error_limit = config.error_limit,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests;
