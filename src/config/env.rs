//! Environment overrides.
//!
//! `THEMEWEAVE_*` variables override file values but not CLI flags.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_THEME_DIR: &str = "THEMEWEAVE_THEME_DIR";
pub(super) const ENV_NOTES: &str = "THEMEWEAVE_NOTES";
pub(super) const ENV_DRY_RUN: &str = "THEMEWEAVE_DRY_RUN";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = env_lookup(ENV_THEME_DIR) {
        config.batch.theme_dir = PathBuf::from(dir);
    }
    if let Some(notes) = env_lookup(ENV_NOTES) {
        config.batch.notes = notes;
    }
    if let Some(raw) = env_lookup(ENV_DRY_RUN) {
        config.batch.dry_run = parse_flag(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_DRY_RUN} value `{raw}`: expected true/false/1/0"
            ))
        })?;
    }
    Ok(())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
