//! The five background weaves.
//!
//! Each theme gets exactly one, chosen by a seeded draw. A weave owns the
//! `body` background stack and both full-viewport overlay layers; everything
//! else in the stylesheet is shared.

use super::css::{join_blocks, Rule};
use super::StyleParams;
use crate::seed::Seeded;

/// Seed index of the weave selection draw.
const PATTERN_INDEX: u32 = 12;

/// Percent coordinates of a gradient center, each in `[0, 82)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    fn draw(seeded: &Seeded, index: u32) -> Self {
        Self {
            x: seeded.whole(index, 82),
            y: seeded.whole(index + 1, 82),
        }
    }
}

/// Background weave variant with its own seeded parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternVariant {
    /// Two drifting radial orbs over a palette cone.
    OrbitalBloom {
        accent_at: Point,
        glow_at: Point,
        scan_angle: u32,
    },
    /// Repeating mist stripes over a linear wash.
    StripedMesh {
        accent_at: Point,
        wash_angle: u32,
        cone_angle: u32,
    },
    /// Concentric ripples under crossing stripes.
    RippleLattice {
        wash_angle: u32,
        stripe_angle: u32,
        glow_at: Point,
    },
    /// Hue-rotated cone clipped into a shard polygon.
    PrismShard { cone_angle: u32, mist_at: Point },
    /// Full palette cone with repeating rays.
    ConicVortex { glow_at: Point, ray_angle: u32 },
}

impl PatternVariant {
    /// Marker names, in selection-index order.
    pub const MARKERS: [&'static str; 5] = [
        "orbital-bloom",
        "striped-mesh",
        "ripple-lattice",
        "prism-shard",
        "conic-vortex",
    ];

    /// Pick the weave for a seed and draw its parameters.
    pub fn select(seeded: &Seeded) -> Self {
        match seeded.whole(PATTERN_INDEX, 5) {
            0 => Self::OrbitalBloom {
                accent_at: Point::draw(seeded, 13),
                glow_at: Point::draw(seeded, 15),
                scan_angle: seeded.whole(17, 360),
            },
            1 => Self::StripedMesh {
                accent_at: Point::draw(seeded, 18),
                wash_angle: seeded.whole(20, 360),
                cone_angle: seeded.whole(21, 360),
            },
            2 => Self::RippleLattice {
                wash_angle: seeded.whole(22, 360),
                stripe_angle: seeded.whole(23, 360),
                glow_at: Point::draw(seeded, 24),
            },
            3 => Self::PrismShard {
                cone_angle: seeded.whole(26, 360),
                mist_at: Point::draw(seeded, 27),
            },
            _ => Self::ConicVortex {
                glow_at: Point::draw(seeded, 29),
                ray_angle: seeded.whole(31, 360),
            },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::OrbitalBloom { .. } => 0,
            Self::StripedMesh { .. } => 1,
            Self::RippleLattice { .. } => 2,
            Self::PrismShard { .. } => 3,
            Self::ConicVortex { .. } => 4,
        }
    }

    pub fn marker(&self) -> &'static str {
        Self::MARKERS[self.index()]
    }

    /// Render the `body` stack and both overlays.
    pub fn render(&self, p: &StyleParams) -> String {
        let [main, italics, underline, quote] = &p.palette;
        let keys = &p.keys;
        let bg_anim = |timing: &str| format!("{} {:.2}s {timing}", keys.bg, p.orbit_secs);
        let shimmer = |key: &str, timing: &str| format!("{key} {:.2}s {timing}", p.shimmer_secs);
        let pulse = |key: &str, timing: &str| format!("{key} {:.2}s {timing}", p.pulse_secs);

        let (body, before, after) = match *self {
            Self::OrbitalBloom {
                accent_at,
                glow_at,
                scan_angle,
            } => (
                Rule::new("body")
                    .layers(
                        "background-image",
                        vec![
                            radial_at(accent_at, &p.accent, 58),
                            radial_at(glow_at, &p.glow, 64),
                            format!(
                                "conic-gradient(from {}deg, {main}, {underline}, {italics}, {quote}, {main})",
                                p.swirl_angle
                            ),
                        ],
                    )
                    .decl("animation", bg_anim("ease-in-out infinite alternate"))
                    .decl(
                        "backdrop-filter",
                        format!("saturate(145%) hue-rotate({}deg)", p.hue_shift),
                    ),
                Rule::new("body::before")
                    .decl("inset", "-12vh")
                    .decl(
                        "background",
                        format!("radial-gradient(circle, {} 0%, transparent 64%)", p.mist),
                    )
                    .decl("filter", "blur(48px)")
                    .decl("mix-blend-mode", "screen")
                    .decl("animation", shimmer(&keys.orb, "ease-in-out infinite alternate"))
                    .decl("opacity", 0.32),
                Rule::new("body::after")
                    .decl(
                        "background",
                        format!(
                            "linear-gradient({scan_angle}deg, transparent 0 28%, {} 48%, transparent 72%)",
                            p.negative
                        ),
                    )
                    .decl("mix-blend-mode", "color-dodge")
                    .decl("animation", pulse(&keys.scan, "linear infinite"))
                    .decl("opacity", 0.22),
            ),
            Self::StripedMesh {
                accent_at,
                wash_angle,
                cone_angle,
            } => (
                Rule::new("body")
                    .layers(
                        "background-image",
                        vec![
                            format!(
                                "repeating-linear-gradient({}deg, transparent 0 40px, {} 40px 80px)",
                                p.swirl_angle, p.mist
                            ),
                            radial_at(accent_at, &p.accent, 55),
                            format!("linear-gradient({wash_angle}deg, {quote}, {italics})"),
                        ],
                    )
                    .decl("animation", bg_anim("ease-in-out infinite alternate"))
                    .decl("background-size", "120% 120%, cover, cover")
                    .decl("filter", "contrast(110%) saturate(130%)"),
                Rule::new("body::before")
                    .decl(
                        "background",
                        format!(
                            "conic-gradient(from {cone_angle}deg, transparent 0 25%, {} 45%, transparent 75%)",
                            p.glow
                        ),
                    )
                    .decl("animation", shimmer(&keys.mesh, "linear infinite"))
                    .decl("mix-blend-mode", "lighten")
                    .decl("opacity", 0.25),
                Rule::new("body::after")
                    .decl(
                        "background",
                        "radial-gradient(ellipse at center, transparent 0 40%, rgba(0, 0, 0, 0.4) 70%, transparent 100%)",
                    )
                    .decl("backdrop-filter", "blur(6px) saturate(180%)")
                    .decl("mix-blend-mode", "soft-light")
                    .decl("animation", pulse(&keys.scan, "linear infinite"))
                    .decl("opacity", 0.35),
            ),
            Self::RippleLattice {
                wash_angle,
                stripe_angle,
                glow_at,
            } => (
                Rule::new("body")
                    .layers(
                        "background-image",
                        vec![
                            format!("linear-gradient({}deg, {italics}, transparent 45%)", p.swirl_angle),
                            format!(
                                "repeating-radial-gradient(circle, transparent 0 12px, {} 12px 18px)",
                                p.mist
                            ),
                            format!(
                                "linear-gradient({wash_angle}deg, {}, {quote}, {})",
                                p.accent, p.glow
                            ),
                        ],
                    )
                    .decl("animation", bg_anim("alternate infinite"))
                    .decl("background-size", "cover, 280px 280px, cover")
                    .decl("filter", "saturate(170%) brightness(95%)"),
                Rule::new("body::before")
                    .decl(
                        "background",
                        format!(
                            "repeating-linear-gradient({stripe_angle}deg, transparent 0 22px, {} 22px 44px)",
                            p.negative
                        ),
                    )
                    .decl(
                        "mask-image",
                        "radial-gradient(circle at center, rgba(0, 0, 0, 1) 0%, transparent 68%)",
                    )
                    .decl("animation", shimmer(&keys.mesh, "alternate infinite"))
                    .decl("opacity", 0.3),
                Rule::new("body::after")
                    .decl("background", radial_at(glow_at, &p.glow, 68))
                    .decl("mix-blend-mode", "screen")
                    .decl("animation", pulse(&keys.orb, "ease-in-out infinite"))
                    .decl("opacity", 0.28),
            ),
            Self::PrismShard {
                cone_angle,
                mist_at,
            } => (
                Rule::new("body")
                    .layers(
                        "background-image",
                        vec![
                            format!("linear-gradient({}deg, {quote} 0%, transparent 48%)", p.swirl_angle),
                            format!(
                                "conic-gradient(from {cone_angle}deg at 50% 50%, {}, {}, {underline}, {})",
                                p.accent, p.glow, p.accent
                            ),
                        ],
                    )
                    .decl("animation", bg_anim("ease-in-out infinite"))
                    .decl(
                        "filter",
                        format!("hue-rotate({}deg) saturate(160%)", p.hue_shift),
                    ),
                Rule::new("body::before")
                    .decl("background", radial_at(mist_at, &p.mist, 60))
                    .decl(
                        "clip-path",
                        "polygon(0% 12%, 35% 0%, 65% 8%, 100% 0%, 100% 88%, 68% 100%, 32% 92%, 0% 100%)",
                    )
                    .decl("animation", shimmer(&keys.mesh, "ease-in-out infinite alternate"))
                    .decl("mix-blend-mode", "hard-light")
                    .decl("opacity", 0.38),
                Rule::new("body::after")
                    .decl(
                        "background",
                        "radial-gradient(ellipse at center, transparent 0 45%, rgba(0, 0, 0, 0.55) 70%)",
                    )
                    .decl("mix-blend-mode", "multiply")
                    .decl("animation", pulse(&keys.scan, "linear infinite"))
                    .decl("opacity", 0.4),
            ),
            Self::ConicVortex { glow_at, ray_angle } => (
                Rule::new("body")
                    .layers(
                        "background-image",
                        vec![
                            format!(
                                "conic-gradient(from {}deg, {main}, {}, {underline}, {quote}, {main})",
                                p.swirl_angle, p.accent
                            ),
                            radial_at(glow_at, &p.glow, 70),
                        ],
                    )
                    .decl("animation", bg_anim("ease-in-out infinite"))
                    .decl("filter", "saturate(150%) brightness(105%)"),
                Rule::new("body::before")
                    .decl(
                        "background",
                        format!(
                            "repeating-conic-gradient(from {ray_angle}deg, transparent 0 15deg, {} 15deg 30deg)",
                            p.mist
                        ),
                    )
                    .decl("animation", shimmer(&keys.mesh, "linear infinite"))
                    .decl("mix-blend-mode", "color-dodge")
                    .decl("opacity", 0.24),
                Rule::new("body::after")
                    .decl(
                        "background",
                        "radial-gradient(circle at center, transparent 0 35%, rgba(0, 0, 0, 0.55) 60%)",
                    )
                    .decl("backdrop-filter", "blur(8px) saturate(190%)")
                    .decl("animation", pulse(&keys.scan, "ease-in-out infinite"))
                    .decl("opacity", 0.36),
            ),
        };

        format!(
            "/* weave: {} */\n{}",
            self.marker(),
            join_blocks([body, before, after])
        )
    }
}

fn radial_at(at: Point, color: &str, fade: u8) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, {color} 0%, transparent {fade}%)",
        at.x, at.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn selection_is_stable_per_seed() {
        let seeded = Seeded::from_name("Kaleido Prism");
        assert_eq!(PatternVariant::select(&seeded), PatternVariant::select(&seeded));
    }

    #[test]
    fn all_five_variants_are_reachable() {
        let mut seen = [false; 5];
        for i in 0..200 {
            let seeded = Seeded::from_name(&format!("Theme {i}"));
            seen[PatternVariant::select(&seeded).index()] = true;
        }
        assert_eq!(seen, [true; 5]);
    }

    #[test]
    fn drawn_points_stay_inside_the_frame() {
        for i in 0..50 {
            let seeded = Seeded::from_name(&format!("Frame {i}"));
            let point = Point::draw(&seeded, 13);
            assert!(point.x < 82 && point.y < 82);
        }
    }

    #[test]
    fn each_variant_renders_its_marker_and_three_layers() {
        let palette = Palette::default();
        let mut rendered = [false; 5];
        for i in 0..200 {
            let name = format!("Layered {i}");
            let params = StyleParams::derive(&name, &palette).expect("derive");
            let variant = PatternVariant::select(&params.seeded);
            let css = variant.render(&params);
            assert!(css.starts_with(&format!("/* weave: {} */\nbody {{", variant.marker())));
            assert_eq!(css.matches("body::before {").count(), 1);
            assert_eq!(css.matches("body::after {").count(), 1);
            assert!(css.contains(&format!("animation: {} ", params.keys.bg)));
            rendered[variant.index()] = true;
        }
        assert_eq!(rendered, [true; 5]);
    }
}
