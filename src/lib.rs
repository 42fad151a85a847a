//! themeweave: deterministic decorative CSS for a catalog of chat themes.
//!
//! Each targeted theme record's palette is turned into an animated,
//! layered stylesheet whose every "random" choice is a hash of the theme's
//! name, so re-running the generator reproduces identical output.
//!
//! # Quick start
//!
//! ```no_run
//! use themeweave::batch::{run_batch, BatchOptions};
//! use themeweave::store::ThemeStore;
//! use themeweave::targets::TargetSet;
//!
//! let store = ThemeStore::open("default/content/themes").unwrap();
//! let report = run_batch(&store, &TargetSet::builtin(), &BatchOptions::default()).unwrap();
//! println!("{report}");
//! ```

pub mod batch;
pub mod color;
pub mod compose;
pub mod config;
pub mod error;
pub mod palette;
pub mod record;
pub mod seed;
pub mod store;
pub mod targets;
#[cfg(test)]
pub mod testsupport;
