//! Default configuration constants.

/// Embedded default `themeweave.toml`, printed by `--print-default-config`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/themeweave.toml");
/// Theme directory, relative to the working directory.
pub(super) const DEFAULT_THEME_DIR: &str = "default/content/themes";
/// Note attached to records that have none.
pub(super) const DEFAULT_NOTES: &str = "Generatively enhanced CSS from themeweave";
/// Config file name used for both local and global lookup.
pub(super) const CONFIG_FILE_NAME: &str = "themeweave.toml";
/// Directory under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "themeweave";
