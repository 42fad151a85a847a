//! Style composer.
//!
//! Turns a theme's name and palette into a complete stylesheet: a shared
//! header, one of five background weaves, message-surface styling, and the
//! keyframes the weave animates with. Every numeric choice comes from the
//! theme's seed, so output is a pure function of `(name, palette)`.

mod css;
mod pattern;

pub use pattern::{PatternVariant, Point};

use crate::color;
use crate::error::ColorError;
use crate::palette::Palette;
use crate::seed::Seeded;
use css::{join_blocks, Keyframes, Rule};

/// Blend ratio for `mist` (main toward underline).
const MIST_RATIO: f64 = 0.4;
/// Blend ratio for `negative` (quote toward italics).
const NEGATIVE_RATIO: f64 = 0.6;

/// Animation names, namespaced by seed so stylesheets of different themes
/// can coexist on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationKeys {
    pub bg: String,
    pub orb: String,
    pub scan: String,
    pub mesh: String,
}

impl AnimationKeys {
    fn for_seed(seeded: &Seeded) -> Self {
        Self {
            bg: seeded.ident("bg"),
            orb: seeded.ident("orb"),
            scan: seeded.ident("scan"),
            mesh: seeded.ident("mesh"),
        }
    }
}

/// Values shared by every layer of one theme's stylesheet.
#[derive(Debug, Clone)]
pub struct StyleParams {
    pub seeded: Seeded,
    /// Ordered palette, as spelled in the record.
    pub palette: [String; 4],
    pub accent: String,
    pub glow: String,
    pub mist: String,
    pub negative: String,
    /// Degrees in `[-160, 160)`.
    pub hue_shift: i32,
    /// Degrees in `[0, 360)`.
    pub swirl_angle: u32,
    pub orbit_secs: f64,
    pub shimmer_secs: f64,
    pub pulse_secs: f64,
    pub keys: AnimationKeys,
}

impl StyleParams {
    /// Derive shared parameters, validating the palette first.
    pub fn derive(name: &str, palette: &Palette) -> Result<Self, ColorError> {
        palette.validate()?;

        let seeded = Seeded::from_name(name);
        let ordered = palette.ordered.clone();
        let accent = ordered[seeded.whole(5, 4) as usize].clone();
        let glow = ordered[seeded.whole(6, 4) as usize].clone();
        let mist = color::lerp(&ordered[0], &ordered[2], MIST_RATIO)?;
        let negative = color::lerp(&ordered[3], &ordered[1], NEGATIVE_RATIO)?;

        Ok(Self {
            hue_shift: seeded.whole(7, 320) as i32 - 160,
            swirl_angle: seeded.whole(8, 360),
            orbit_secs: seeded.banded(9, 8.0, 18.0),
            shimmer_secs: seeded.banded(10, 10.0, 18.0),
            pulse_secs: seeded.banded(11, 7.0, 12.0),
            keys: AnimationKeys::for_seed(&seeded),
            seeded,
            palette: ordered,
            accent,
            glow,
            mist,
            negative,
        })
    }
}

/// A composed stylesheet and the weave it was built around.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub pattern: PatternVariant,
    pub css: String,
}

/// Compose the full stylesheet text for a theme.
pub fn compose(name: &str, palette: &Palette) -> Result<String, ColorError> {
    compose_stylesheet(name, palette).map(|sheet| sheet.css)
}

/// Like [`compose`], also reporting which weave was selected.
pub fn compose_stylesheet(name: &str, palette: &Palette) -> Result<Stylesheet, ColorError> {
    let params = StyleParams::derive(name, palette)?;
    let pattern = PatternVariant::select(&params.seeded);
    let css = join_blocks([
        shared_header(name, &params, palette),
        pattern.render(&params),
        message_surface(&params, palette),
        keyframes(&params),
    ]);
    Ok(Stylesheet { pattern, css })
}

fn shared_header(name: &str, params: &StyleParams, palette: &Palette) -> String {
    let comment = format!("/* {} signature weave */", name.replace("*/", "* /"));
    let body = Rule::new("body")
        .decl("color", &params.palette[0])
        .decl("background-color", palette.chat_tint())
        .decl("background-attachment", "fixed")
        .decl("overflow-x", "hidden");
    let overlays = Rule::new("body::before,\nbody::after")
        .decl("content", "''")
        .decl("position", "fixed")
        .decl("inset", 0)
        .decl("pointer-events", "none");
    format!("{comment}\n{}", join_blocks([body, overlays]))
}

fn message_surface(params: &StyleParams, palette: &Palette) -> String {
    let s = &params.seeded;
    let bubble = Rule::new(".mes, .mesText, .swipe-message")
        .decl(
            "background",
            format!(
                "linear-gradient(135deg, {}, {})",
                palette.user_tint(),
                palette.bot_tint()
            ),
        )
        .decl("border", format!("1px solid {}", palette.border()))
        .decl("box-shadow", format!("0 0 34px {}", params.glow))
        .decl(
            "backdrop-filter",
            format!("blur({:.1}px) saturate(180%)", s.banded(32, 4.0, 8.0)),
        )
        .decl("transform-style", "preserve-3d")
        .decl("transition", "transform 0.6s ease, box-shadow 0.6s ease");
    let hover = Rule::new(".mes:hover")
        .decl(
            "transform",
            format!(
                "translateY(-6px) rotateX({:.2}deg) rotateY({:.2}deg) scale(1.02)",
                s.centered(33, 6.0),
                s.centered(34, 6.0)
            ),
        )
        .decl("box-shadow", format!("0 18px 48px {}", params.accent));
    let code = Rule::new(".chat_mes_block .mes_text p code")
        .decl("background", "rgba(0, 0, 0, 0.45)")
        .decl("color", &params.accent)
        .decl("border", format!("1px solid {}", params.mist))
        .decl("border-radius", "8px")
        .decl("padding", "2px 6px")
        .decl("box-shadow", format!("0 0 18px {}", params.glow));
    let quote = Rule::new(".chat_mes_block .mes_text blockquote")
        .decl("border-left", format!("3px solid {}", params.accent))
        .decl("background", "rgba(0, 0, 0, 0.32)")
        .decl("box-shadow", format!("inset 0 0 18px {}", params.glow));
    let avatar = Rule::new(".mes .avatar")
        .decl("filter", format!("drop-shadow(0 0 12px {})", params.glow));
    let selection = Rule::new("::selection")
        .decl("background", &params.accent)
        .decl("color", &params.palette[0]);
    join_blocks([bubble, hover, code, quote, avatar, selection])
}

fn keyframes(params: &StyleParams) -> String {
    let s = &params.seeded;
    let keys = &params.keys;

    let bg = Keyframes::new(&keys.bg)
        .step(0, vec![("transform", "scale(1) translate3d(0, 0, 0)".into())])
        .step(
            50,
            vec![(
                "transform",
                format!(
                    "scale(1.06) translate3d({:.2}%, {:.2}%, 0)",
                    s.centered(35, 6.0),
                    s.centered(36, 6.0)
                ),
            )],
        )
        .step(
            100,
            vec![(
                "transform",
                format!(
                    "scale(1.12) translate3d({:.2}%, {:.2}%, 0)",
                    s.centered(37, 10.0),
                    s.centered(38, 10.0)
                ),
            )],
        );

    let (orb_dx, orb_dy) = (s.centered(39, 2.0), s.centered(40, 2.0));
    let orb = Keyframes::new(&keys.orb)
        .step(
            0,
            vec![
                (
                    "transform",
                    format!("translate3d({:.2}%, {:.2}%, 0) scale(1)", orb_dx - 3.0, orb_dy - 3.0),
                ),
                ("opacity", "0.18".into()),
            ],
        )
        .step(
            50,
            vec![
                (
                    "transform",
                    format!("translate3d({:.2}%, {:.2}%, 0) scale(1.08)", orb_dx + 4.0, orb_dy + 5.0),
                ),
                ("opacity", "0.36".into()),
            ],
        )
        .step(
            100,
            vec![
                (
                    "transform",
                    format!("translate3d({:.2}%, {:.2}%, 0) scale(1.02)", orb_dx - 2.0, orb_dy + 6.0),
                ),
                ("opacity", "0.24".into()),
            ],
        );

    let tilt = s.centered(41, 30.0);
    let scan = Keyframes::new(&keys.scan)
        .step(
            0,
            vec![
                ("transform", format!("rotate({tilt:.2}deg)")),
                ("opacity", "0.12".into()),
            ],
        )
        .step(50, vec![("opacity", "0.28".into())])
        .step(
            100,
            vec![
                ("transform", format!("rotate({:.2}deg)", tilt + 360.0)),
                ("opacity", "0.12".into()),
            ],
        );

    let drift = s.centered(42, 2.0);
    let mesh = Keyframes::new(&keys.mesh)
        .step(
            0,
            vec![
                ("transform", format!("translateY({:.2}%) scale(1)", drift - 4.0)),
                ("opacity", "0.2".into()),
            ],
        )
        .step(
            50,
            vec![
                ("transform", format!("translateY({:.2}%) scale(1.06)", 4.0 - drift)),
                ("opacity", "0.32".into()),
            ],
        )
        .step(
            100,
            vec![
                ("transform", format!("translateY({:.2}%) scale(1.02)", drift - 6.0)),
                ("opacity", "0.24".into()),
            ],
        );

    join_blocks([bg, orb, scan, mesh])
}
