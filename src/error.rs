//! Unified error types for theme generation.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Color text that is neither `#RRGGBB` nor an explicit `rgb(a)(...)` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Unsupported(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(value) => write!(f, "unsupported color: {value}"),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// RecordError
// ---------------------------------------------------------------------------

/// Errors reading, decoding, or writing a single theme record.
#[derive(Debug)]
pub enum RecordError {
    /// The record (or its directory) could not be read or written.
    Io(PathBuf, std::io::Error),
    /// The file is not valid JSON.
    Json(PathBuf, serde_json::Error),
    /// The file parsed but its top level is not a JSON object.
    NotAnObject(PathBuf),
    /// A required field is absent or not a string.
    MissingField { path: PathBuf, field: &'static str },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "io: {}: {e}", path.display()),
            Self::Json(path, e) => write!(f, "json: {}: {e}", path.display()),
            Self::NotAnObject(path) => {
                write!(f, "{}: top-level value is not an object", path.display())
            }
            Self::MissingField { path, field } => {
                write!(f, "{}: missing `{field}` field", path.display())
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Json(_, e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Failure while processing one matched theme.
#[derive(Debug)]
pub enum ThemeError {
    Color(ColorError),
    Record(RecordError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(e) => write!(f, "color: {e}"),
            Self::Record(e) => write!(f, "record: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(e) => Some(e),
            Self::Record(e) => Some(e),
        }
    }
}

impl From<ColorError> for ThemeError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

impl From<RecordError> for ThemeError {
    fn from(e: RecordError) -> Self {
        Self::Record(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// BatchError
// ---------------------------------------------------------------------------

/// Errors that stop the whole batch.
#[derive(Debug)]
pub enum BatchError {
    /// The theme directory itself could not be listed.
    Listing(RecordError),
    /// Strict mode: the first per-theme failure aborts the run.
    Aborted { name: String, source: ThemeError },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing(e) => write!(f, "listing: {e}"),
            Self::Aborted { name, source } => write!(f, "aborted at `{name}`: {source}"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Listing(e) => Some(e),
            Self::Aborted { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_names_offending_value() {
        assert_eq!(
            ColorError::Unsupported("not-a-color".into()).to_string(),
            "unsupported color: not-a-color"
        );
    }

    #[test]
    fn record_error_display_includes_path() {
        let e = RecordError::MissingField {
            path: PathBuf::from("themes/a.json"),
            field: "name",
        };
        assert_eq!(e.to_string(), "themes/a.json: missing `name` field");

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = RecordError::Io(PathBuf::from("themes"), io_err);
        let s = e.to_string();
        assert!(s.starts_with("io: themes"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn theme_error_wraps_color_error() {
        let e = ThemeError::from(ColorError::Unsupported("#12".into()));
        assert_eq!(e.to_string(), "color: unsupported color: #12");
    }

    #[test]
    fn strict_abort_chains_down_to_the_io_error() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let e = BatchError::Aborted {
            name: "Aurora Drift".into(),
            source: ThemeError::from(RecordError::Io(PathBuf::from("a.json"), io_err)),
        };
        let theme = e.source().expect("theme error");
        assert!(theme.to_string().starts_with("record: io: a.json"));
        let record = theme.source().expect("record error");
        let io = record.source().expect("io error");
        assert_eq!(io.to_string(), "read-only");
        assert!(io.source().is_none());
    }

    #[test]
    fn batch_error_names_aborting_theme() {
        let e = BatchError::Aborted {
            name: "Aurora Drift".into(),
            source: ThemeError::Color(ColorError::Unsupported("oops".into())),
        };
        let s = e.to_string();
        assert!(s.contains("`Aurora Drift`"), "got: {s}");
        assert!(s.contains("oops"), "got: {s}");
    }
}
