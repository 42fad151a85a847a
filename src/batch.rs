//! Batch driver: regenerate styles for every targeted theme in a directory.
//!
//! Records are processed one at a time in path order. A record that fails
//! (unreadable, malformed JSON, unsupported color) is reported and skipped
//! unless strict mode is on, in which case the first failure ends the run.
//! Composition happens entirely before a record is mutated, so a failing
//! theme is never half-written.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::compose::{compose_stylesheet, PatternVariant};
use crate::config::BatchConfig;
use crate::error::{BatchError, ThemeError};
use crate::record::{ApplyOutcome, ThemeRecord};
use crate::store::ThemeStore;
use crate::targets::TargetSet;

/// Knobs for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Note written when a record has none.
    pub notes: String,
    pub strict: bool,
    /// Compose and count, but never write.
    pub dry_run: bool,
}

impl From<&BatchConfig> for BatchOptions {
    fn from(config: &BatchConfig) -> Self {
        Self {
            notes: config.notes.clone(),
            strict: config.strict,
            dry_run: config.dry_run,
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from(&BatchConfig::default())
    }
}

/// A record the batch could not process.
#[derive(Debug)]
pub struct ThemeFailure {
    pub path: PathBuf,
    /// Known once the record has been decoded.
    pub name: Option<String>,
    pub error: ThemeError,
}

impl fmt::Display for ThemeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({}): {}", self.path.display(), self.error),
            None => write!(f, "{}: {}", self.path.display(), self.error),
        }
    }
}

/// Counts for a finished run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub dry_run: bool,
    /// Record files found.
    pub scanned: usize,
    /// Records whose name is on the allow-list.
    pub matched: usize,
    /// Records rewritten (or that would be, in a dry run).
    pub updated: usize,
    /// Targeted records that already carried identical output.
    pub unchanged: usize,
    /// Records without a name or not on the allow-list.
    pub skipped: usize,
    pub failures: Vec<ThemeFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(f, "dry run: ")?;
        }
        write!(
            f,
            "scanned {}, matched {}, {} {}, unchanged {}, skipped {}, failed {}",
            self.scanned,
            self.matched,
            if self.dry_run { "would update" } else { "updated" },
            self.updated,
            self.unchanged,
            self.skipped,
            self.failed()
        )
    }
}

enum Regenerated {
    Written(PatternVariant),
    WouldWrite(PatternVariant),
    Unchanged,
}

/// Regenerate every targeted record under `store`.
///
/// Only a failure to list the directory (or any failure in strict mode)
/// is returned as an error; everything else lands in the report.
pub fn run_batch(
    store: &ThemeStore,
    targets: &TargetSet,
    options: &BatchOptions,
) -> Result<BatchReport, BatchError> {
    let paths = store.list().map_err(BatchError::Listing)?;
    info!(
        dir = %store.root().display(),
        records = paths.len(),
        targets = targets.len(),
        dry_run = options.dry_run,
        "scanning theme records"
    );

    let mut report = BatchReport {
        dry_run: options.dry_run,
        ..BatchReport::default()
    };
    for path in paths {
        report.scanned += 1;
        let mut record = match store.load(&path) {
            Ok(record) => record,
            Err(e) => {
                record_failure(&mut report, options, &path, None, e.into())?;
                continue;
            }
        };
        let Ok(name) = record.name().map(str::to_string) else {
            debug!(path = %path.display(), "record has no name; skipping");
            report.skipped += 1;
            continue;
        };
        if !targets.contains(&name) {
            debug!(theme = %name, "not targeted; skipping");
            report.skipped += 1;
            continue;
        }
        report.matched += 1;

        match regenerate(store, &mut record, &name, options) {
            Ok(Regenerated::Written(pattern)) => {
                info!(theme = %name, pattern = pattern.marker(), "updated");
                report.updated += 1;
            }
            Ok(Regenerated::WouldWrite(pattern)) => {
                info!(theme = %name, pattern = pattern.marker(), "would update");
                report.updated += 1;
            }
            Ok(Regenerated::Unchanged) => {
                debug!(theme = %name, "already up to date");
                report.unchanged += 1;
            }
            Err(e) => record_failure(&mut report, options, &path, Some(name), e)?,
        }
    }

    info!(summary = %report, "batch finished");
    Ok(report)
}

fn regenerate(
    store: &ThemeStore,
    record: &mut ThemeRecord,
    name: &str,
    options: &BatchOptions,
) -> Result<Regenerated, ThemeError> {
    let palette = record.palette()?;
    let sheet = compose_stylesheet(name, &palette)?;
    match record.apply_stylesheet(&sheet.css, &options.notes) {
        ApplyOutcome::Unchanged => Ok(Regenerated::Unchanged),
        ApplyOutcome::Changed if options.dry_run => Ok(Regenerated::WouldWrite(sheet.pattern)),
        ApplyOutcome::Changed => {
            store.save(record)?;
            Ok(Regenerated::Written(sheet.pattern))
        }
    }
}

fn record_failure(
    report: &mut BatchReport,
    options: &BatchOptions,
    path: &Path,
    name: Option<String>,
    error: ThemeError,
) -> Result<(), BatchError> {
    if options.strict {
        let name = name.unwrap_or_else(|| path.display().to_string());
        return Err(BatchError::Aborted {
            name,
            source: error,
        });
    }
    let failure = ThemeFailure {
        path: path.to_path_buf(),
        name,
        error,
    };
    warn!(failure = %failure, "skipping theme");
    report.failures.push(failure);
    Ok(())
}
