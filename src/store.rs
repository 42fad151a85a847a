//! Filesystem-backed theme record storage.
//!
//! One record per `*.json` file in a flat directory. Records are rewritten
//! in place through a sibling temporary file so an interrupted run never
//! leaves a half-written theme behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RecordError;
use crate::record::ThemeRecord;

/// Extension of theme record files.
const RECORD_FILE_EXT: &str = "json";
/// Extension appended while a rewrite is in flight.
const TEMP_FILE_EXT: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct ThemeStore {
    /// Directory containing `*.json` theme records.
    root: PathBuf,
}

impl ThemeStore {
    /// Open an existing theme directory; it is never created.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, RecordError> {
        let root = root.as_ref().to_path_buf();
        let meta = fs::metadata(&root).map_err(|e| RecordError::Io(root.clone(), e))?;
        if !meta.is_dir() {
            let e = std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory");
            return Err(RecordError::Io(root, e));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record files sorted by path, so batch order is stable across runs.
    pub fn list(&self) -> Result<Vec<PathBuf>, RecordError> {
        let entries = fs::read_dir(&self.root).map_err(|e| RecordError::Io(self.root.clone(), e))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RecordError::Io(self.root.clone(), e))?;
            let path = entry.path();
            if is_record_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    pub fn load(&self, path: &Path) -> Result<ThemeRecord, RecordError> {
        let text = fs::read_to_string(path).map_err(|e| RecordError::Io(path.to_path_buf(), e))?;
        ThemeRecord::from_json(path, &text)
    }

    /// Rewrite a record at its original location.
    pub fn save(&self, record: &ThemeRecord) -> Result<(), RecordError> {
        let text = record.to_json()?;
        let path = record.path();
        let tmp_path = path.with_extension(TEMP_FILE_EXT);
        fs::write(&tmp_path, text).map_err(|e| RecordError::Io(tmp_path.clone(), e))?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RecordError::Io(path.to_path_buf(), e));
        }
        Ok(())
    }
}

fn is_record_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == RECORD_FILE_EXT)
}
