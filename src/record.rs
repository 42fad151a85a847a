//! A theme record as stored on disk.
//!
//! Records are owned by another system, so the object is kept as an ordered
//! JSON map and only three things are touched: `name` is read, `custom_css`
//! is overwritten, and `notes` is filled in when absent. Every other field
//! round-trips untouched and in its original order.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{ColorError, RecordError};
use crate::palette::Palette;

pub const NAME_FIELD: &str = "name";
pub const CUSTOM_CSS_FIELD: &str = "custom_css";
pub const NOTES_FIELD: &str = "notes";

/// What applying a stylesheet did to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// At least one field changed; the record needs saving.
    Changed,
    /// The record already carried this stylesheet and a note.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRecord {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl ThemeRecord {
    /// Decode record text loaded from `path`.
    pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Self, RecordError> {
        let path = path.into();
        let value: Value =
            serde_json::from_str(text).map_err(|e| RecordError::Json(path.clone(), e))?;
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(RecordError::NotAnObject(path)),
        }
    }

    /// Encode as 4-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, RecordError> {
        use serde::Serialize;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields
            .serialize(&mut serializer)
            .map_err(|e| RecordError::Json(self.path.clone(), e))?;
        buf.push(b'\n');
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The record's display name.
    pub fn name(&self) -> Result<&str, RecordError> {
        self.fields
            .get(NAME_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| RecordError::MissingField {
                path: self.path.clone(),
                field: NAME_FIELD,
            })
    }

    pub fn palette(&self) -> Result<Palette, ColorError> {
        Palette::from_fields(&self.fields)
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.fields.get(CUSTOM_CSS_FIELD).and_then(Value::as_str)
    }

    pub fn notes(&self) -> Option<&Value> {
        self.fields.get(NOTES_FIELD)
    }

    /// Overwrite `custom_css` and set `notes` only if the record has none.
    pub fn apply_stylesheet(&mut self, css: &str, default_notes: &str) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::Unchanged;
        if self.custom_css() != Some(css) {
            self.fields
                .insert(CUSTOM_CSS_FIELD.to_string(), Value::String(css.to_string()));
            outcome = ApplyOutcome::Changed;
        }
        if !self.fields.contains_key(NOTES_FIELD) {
            self.fields.insert(
                NOTES_FIELD.to_string(),
                Value::String(default_notes.to_string()),
            );
            outcome = ApplyOutcome::Changed;
        }
        outcome
    }
}
