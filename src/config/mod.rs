//! Configuration loading from TOML files and environment variables.
//!
//! Precedence (highest wins):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. Environment variables (`THEMEWEAVE_THEME_DIR`, `THEMEWEAVE_NOTES`,
//!    `THEMEWEAVE_DRY_RUN`)
//! 3. TOML file given via `--config`
//! 4. `./themeweave.toml`
//! 5. `$XDG_CONFIG_HOME/themeweave/themeweave.toml`
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod env;
mod sources;
mod types;

pub use defaults::DEFAULT_CONFIG_TEMPLATE;
pub use types::{BatchConfig, Config, ConfigSource, LoadedConfig, TargetsConfig};

use env::apply_env_overrides;
use sources::{config_root_dir, read_config_text_with_sources};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = match text {
        Some(text) => toml::from_str(&text)?,
        None => Config::default(),
    };
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

/// Reject values that would make the batch meaningless.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.batch.theme_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "batch.theme_dir must not be empty".to_string(),
        ));
    }
    if config.batch.notes.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "batch.notes must not be empty".to_string(),
        ));
    }
    if let Some(blank) = config.targets.extra.iter().find(|name| name.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "targets.extra contains a blank name `{blank}`"
        )));
    }
    Ok(())
}
