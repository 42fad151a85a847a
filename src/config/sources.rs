//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::ConfigSource;

/// Read config text from the highest-precedence available source.
///
/// Returns `None` text when no file exists and defaults apply.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(Option<String>, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist.
    if let Some(path) = path_override {
        let text = read_file(path)?;
        return Ok((Some(text), ConfigSource::Explicit(path.to_path_buf())));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if let Some(text) = read_optional(&local, read_file)? {
        return Ok((Some(text), ConfigSource::Local(local)));
    }

    if let Some(root) = config_root() {
        let global = root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Some(text) = read_optional(&global, read_file)? {
            return Ok((Some(text), ConfigSource::Global(global)));
        }
    }

    Ok((None, ConfigSource::BuiltInDefaults))
}

/// Read a file that may legitimately be absent.
fn read_optional<FRead>(path: &Path, read_file: &FRead) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Platform config root (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
pub(super) fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}
