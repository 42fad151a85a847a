//! End-to-end batch runs against a scratch theme directory.
//!
//! These go through the public library API exactly as the binary does:
//! open a store, run the batch with the built-in allow-list, inspect files.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use themeweave::batch::{run_batch, BatchOptions};
use themeweave::compose::PatternVariant;
use themeweave::error::BatchError;
use themeweave::store::ThemeStore;
use themeweave::targets::TargetSet;

const DEFAULT_NOTES: &str = "Generatively enhanced CSS from themeweave";

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let dir = std::env::temp_dir().join(format!(
            "themeweave-e2e-{label}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create scratch dir");
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, text).expect("write fixture");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read record");
    serde_json::from_str(&text).expect("record stays valid json")
}

fn run(dir: &ScratchDir, options: &BatchOptions) -> Result<themeweave::batch::BatchReport, BatchError> {
    let store = ThemeStore::open(dir.path()).expect("open store");
    run_batch(&store, &TargetSet::builtin(), options)
}

#[test]
fn targeted_record_gets_css_and_default_note() {
    let dir = ScratchDir::new("aurora");
    let aurora = dir.write(
        "aurora-drift.json",
        r##"{
    "name": "Aurora Drift",
    "blur_strength": 8,
    "main_text_color": "#ffffff",
    "italics_text_color": "rgba(200, 200, 255, 0.9)",
    "underline_text_color": "rgba(120, 80, 240, 1)",
    "quote_text_color": "#2cb67d",
    "chat_tint_color": "rgba(10, 12, 30, 0.9)"
}
"##,
    );
    let unlisted_text = "{\n    \"name\": \"Unlisted Theme\",\n    \"main_text_color\": \"#ffffff\"\n}\n";
    let unlisted = dir.write("unlisted.json", unlisted_text);

    let report = run(&dir, &BatchOptions::default()).expect("batch");
    assert_eq!(report.matched, 1);
    assert_eq!(report.updated, 1);

    let record = read_json(&aurora);
    let css = record["custom_css"].as_str().expect("custom_css string");
    assert!(!css.is_empty());
    let markers = PatternVariant::MARKERS
        .iter()
        .filter(|marker| css.contains(&format!("/* weave: {marker} */")))
        .count();
    assert_eq!(markers, 1, "expected exactly one weave marker");
    assert_eq!(record["notes"], Value::String(DEFAULT_NOTES.to_string()));
    assert_eq!(record["blur_strength"], Value::from(8));

    assert_eq!(fs::read_to_string(&unlisted).expect("read"), unlisted_text);
}

#[test]
fn regeneration_is_deterministic_across_directories() {
    let body = r##"{"name": "Velvet Prism", "main_text_color": "#e0def4", "quote_text_color": "#31748f"}"##;
    let first = ScratchDir::new("det-a");
    let second = ScratchDir::new("det-b");
    let a = first.write("velvet.json", body);
    let b = second.write("velvet.json", body);

    run(&first, &BatchOptions::default()).expect("first");
    run(&second, &BatchOptions::default()).expect("second");

    assert_eq!(
        fs::read_to_string(a).expect("read a"),
        fs::read_to_string(b).expect("read b")
    );
}

#[test]
fn existing_notes_survive() {
    let dir = ScratchDir::new("notes");
    let path = dir.write(
        "opal.json",
        r#"{"name": "Opal Skies", "notes": "curated by hand"}"#,
    );
    run(&dir, &BatchOptions::default()).expect("batch");
    let record = read_json(&path);
    assert_eq!(record["notes"], Value::String("curated by hand".into()));
    assert!(record["custom_css"].as_str().is_some_and(|css| css.contains("opal-skies-orb")));
}

#[test]
fn malformed_color_leaves_record_byte_identical() {
    let dir = ScratchDir::new("malformed");
    let text = r#"{"name": "Neon Opus", "underline_text_color": "not-a-color"}"#;
    let path = dir.write("neon.json", text);

    let report = run(&dir, &BatchOptions::default()).expect("batch continues");
    assert_eq!(report.failed(), 1);
    assert!(report.failures[0].to_string().contains("not-a-color"));
    assert_eq!(fs::read_to_string(path).expect("read"), text);
}

#[test]
fn malformed_tint_fails_the_theme_without_touching_it() {
    let dir = ScratchDir::new("bad-tint");
    let text = r##"{"name": "Aurora Drift", "main_text_color": "#ffffff", "chat_tint_color": "}body{display:none"}"##;
    let path = dir.write("aurora.json", text);

    let report = run(&dir, &BatchOptions::default()).expect("batch continues");
    assert_eq!(report.failed(), 1);
    assert_eq!(report.updated, 0);
    assert_eq!(fs::read_to_string(path).expect("read"), text);
}

#[test]
fn custom_target_set_controls_matching() {
    let dir = ScratchDir::new("custom-targets");
    let path = dir.write("mine.json", r#"{"name": "Unlisted Theme"}"#);
    let store = ThemeStore::open(dir.path()).expect("open");
    let targets = TargetSet::with_extra(["Unlisted Theme"]);
    let report = run_batch(&store, &targets, &BatchOptions::default()).expect("batch");
    assert_eq!(report.updated, 1);
    assert!(read_json(&path)["custom_css"].is_string());
}
