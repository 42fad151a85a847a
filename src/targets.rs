//! Allow-list of theme names that receive generated styles.

use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Built-in theme names, matched exactly against a record's `name`.
const BUILTIN_TARGETS: &[&str] = &[
    "Arcane Drift", "Arcane Nebula", "Arcane Symphony", "Arcane Waltz", "Auric Flux",
    "Aurora Drift", "Aurora Rhythm", "Azure Overdrive", "Bionic Fusion", "Blossom Pulsegrid",
    "Blossom Rift", "Cascade Rift", "Celestial Matrix", "Celestial Reverie", "Chromatic Dynasty",
    "Chromatic Eclipse", "Chromatic Matrix", "Chromatic Spark", "Coral Harbor", "Crimson Dynasty",
    "Crimson Pulsewave", "Crystalline Haze", "Crystalline Surge", "Cyber Vortex",
    "Dreamwave Cascade", "Dreamwave Pulse", "Electric Cascade", "Electric Horizon",
    "Electric Opus", "Ethereal Cathedral", "Frosted Nebula", "Frosted Phantom", "Galactic Prism",
    "Glimmer Drift", "Glimmer Flux", "Glimmer Rift", "Glimmer Whisper", "Holographic Voyage",
    "Inferno Glow", "Inferno Nebula", "Inferno Prism", "Inferno Pulse", "Inferno Radiance",
    "Iridescent Fusion", "Iridescent Monsoon", "Iridescent Pulsegrid", "Iridescent Reverie",
    "Kaleido Dream", "Kaleido Overdrive", "Kaleido Prism", "Luminous Fractals",
    "Luminous Galaxy", "Lunar Cathedral", "Lunar Spark", "Midnight Lagoon", "Midnight Noir",
    "Midnight Pulsewave", "Midnight Spark", "Mirage Embers", "Mirage Haze", "Mirage Panorama",
    "Mythic Lattice", "Nebula Dream", "Nebula Flux", "Neon Opus", "Obsidian Glow",
    "Obsidian Harbor", "Obsidian Panorama", "Obsidian Prism", "Obsidian Pulse",
    "Obsidian Rapture", "Obsidian Spectrum", "Opal Current", "Opal Skies", "Phantom Reverie",
    "Prismatic Vortex", "Quantum Sanctuary", "Radiant Dusk", "Retro Embers", "Retro Sanctuary",
    "Seraphic Storm", "Shimmer Current", "Shimmer Phantom", "Solar Cathedral", "Solar Panorama",
    "Solarflare Embers", "Solaris Aurora", "Solaris Breeze", "Solaris Drift",
    "Spectrum Pulsegrid", "Spectrum Reactor", "Turbo Haze", "Turbo Pulsegrid",
    "Umbral Cathedral", "Vapor Harbor", "Velocity Bloom", "Velvet Cascade", "Velvet Panorama",
    "Velvet Prism", "Zenith Lattice",
];

fn builtin_set() -> &'static BTreeSet<String> {
    static SET: OnceLock<BTreeSet<String>> = OnceLock::new();
    SET.get_or_init(|| BUILTIN_TARGETS.iter().map(|name| name.to_string()).collect())
}

/// Immutable set of theme names eligible for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    names: BTreeSet<String>,
}

impl TargetSet {
    /// The built-in allow-list.
    pub fn builtin() -> Self {
        Self {
            names: builtin_set().clone(),
        }
    }

    /// Built-in names plus `extra`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::builtin();
        set.names.extend(extra.into_iter().map(Into::into));
        set
    }

    /// Exactly `names`, without the built-ins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self::builtin()
    }
}
