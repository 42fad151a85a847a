//! Configuration data model.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::defaults::{DEFAULT_NOTES, DEFAULT_THEME_DIR};
use crate::targets::TargetSet;

/// Top-level configuration, as read from `themeweave.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub batch: BatchConfig,
    pub targets: TargetsConfig,
}

impl Config {
    /// Built-in allow-list extended with `[targets] extra`.
    pub fn target_set(&self) -> TargetSet {
        TargetSet::with_extra(self.targets.extra.iter().cloned())
    }
}

/// `[batch]` settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub theme_dir: PathBuf,
    pub notes: String,
    /// Abort on the first per-theme failure instead of skipping it.
    pub strict: bool,
    pub dry_run: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            theme_dir: PathBuf::from(DEFAULT_THEME_DIR),
            notes: DEFAULT_NOTES.to_string(),
            strict: false,
            dry_run: false,
        }
    }
}

/// `[targets]` settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TargetsConfig {
    pub extra: Vec<String>,
}

/// Where the effective config file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`.
    Explicit(PathBuf),
    /// `./themeweave.toml`.
    Local(PathBuf),
    /// `$XDG_CONFIG_HOME/themeweave/themeweave.toml`.
    Global(PathBuf),
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::Global(path) => {
                write!(f, "{}", path.display())
            }
            Self::BuiltInDefaults => write!(f, "built-in defaults"),
        }
    }
}

/// Resolved config plus its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
