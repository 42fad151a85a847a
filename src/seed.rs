//! Seeded value generator.
//!
//! Every "random" choice a theme makes is a hash of `(seed, index)`, so the
//! same theme always regenerates the same stylesheet regardless of call order.

use sha2::{Digest, Sha256};

/// Separator between seed and index in the hashed key.
const KEY_SEPARATOR: char = '|';

/// Largest `f64` strictly below 1.0.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

/// Normalize a display name into a seed: lowercase, non-alphanumeric runs
/// collapsed to `-`, leading and trailing `-` trimmed.
///
/// Names that normalize identically share every derived value.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Deterministic value in `[0, scale)` for `(seed, index)`.
///
/// The first four bytes of `SHA-256("{seed}|{index}")`, read big-endian and
/// divided by `u32::MAX`, give the unit value.
pub fn derive(seed: &str, index: u32, scale: f64) -> f64 {
    let key = format!("{seed}{KEY_SEPARATOR}{index}");
    let digest = Sha256::digest(key.as_bytes());
    let raw = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let unit = (f64::from(raw) / f64::from(u32::MAX)).min(MAX_UNIT);
    unit * scale
}

/// Per-theme view over [`derive`] bound to one seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeded {
    seed: String,
}

impl Seeded {
    /// Seed derived from a theme display name.
    pub fn from_name(name: &str) -> Self {
        Self {
            seed: slugify(name),
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// `derive(seed, index, scale)`.
    pub fn value(&self, index: u32, scale: f64) -> f64 {
        derive(&self.seed, index, scale)
    }

    /// Truncated integer draw in `[0, bound)`.
    pub fn whole(&self, index: u32, bound: u32) -> u32 {
        self.value(index, f64::from(bound)) as u32
    }

    /// Value centered on zero: `[-span/2, span/2)`.
    pub fn centered(&self, index: u32, span: f64) -> f64 {
        self.value(index, span) - span / 2.0
    }

    /// Value in `[base, base + range)`.
    pub fn banded(&self, index: u32, base: f64, range: f64) -> f64 {
        base + self.value(index, range)
    }

    /// Namespaced identifier, e.g. `aurora-drift-bg`.
    pub fn ident(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.seed)
    }
}
