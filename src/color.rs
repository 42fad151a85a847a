//! Color text parsing and interpolation.
//!
//! Two textual forms are accepted: `#RRGGBB` and `rgb(r, g, b)` /
//! `rgba(r, g, b, a)`. Everything is normalized to [`Rgba`] and written back
//! out in the explicit `rgba(...)` form with a two-decimal alpha.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Normalized color: 8-bit channels plus alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear blend toward `other`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate. Channels
    /// round half-to-even and saturate at the representable range.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: (self.a + (other.a - self.a) * t).clamp(0.0, 1.0),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let value = (from + (f64::from(to) - from) * t).round_ties_even();
    value.clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else {
            parse_explicit(trimmed)
        };
        parsed.ok_or_else(|| ColorError::Unsupported(text.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgba::new(r, g, b, 1.0))
}

fn parse_explicit(text: &str) -> Option<Rgba> {
    let lower = text.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = match parts.get(3) {
        Some(raw) => parse_alpha(raw)?,
        None => 1.0,
    };
    Some(Rgba::new(r, g, b, a))
}

fn parse_channel(raw: &str) -> Option<u8> {
    let value: f64 = raw.parse().ok()?;
    if !(0.0..=255.0).contains(&value) {
        return None;
    }
    // Fractional channels truncate.
    Some(value as u8)
}

fn parse_alpha(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    (0.0..=1.0).contains(&value).then_some(value)
}

/// Blend two color texts and return the explicit-channel text.
///
/// Both inputs are parsed before anything is computed, so a malformed value
/// fails without partial output.
pub fn lerp(a: &str, b: &str, t: f64) -> Result<String, ColorError> {
    let from: Rgba = a.parse()?;
    let to: Rgba = b.parse()?;
    Ok(from.lerp(&to, t).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triplet() {
        let c: Rgba = "#ff8000".parse().expect("hex");
        assert_eq!(c, Rgba::new(255, 128, 0, 1.0));
        let c: Rgba = "  #0A0b0C ".parse().expect("hex with padding");
        assert_eq!(c, Rgba::new(10, 11, 12, 1.0));
    }

    #[test]
    fn parses_explicit_channels_with_and_without_alpha() {
        let c: Rgba = "rgba(255, 255, 255, 0.85)".parse().expect("rgba");
        assert_eq!(c, Rgba::new(255, 255, 255, 0.85));
        let c: Rgba = "rgba(8,8,12)".parse().expect("rgba without alpha");
        assert_eq!(c, Rgba::new(8, 8, 12, 1.0));
        let c: Rgba = "rgb(1, 2, 3)".parse().expect("rgb");
        assert_eq!(c, Rgba::new(1, 2, 3, 1.0));
        let c: Rgba = "rgba(10.9, 0, 0, 1)".parse().expect("fractional channel");
        assert_eq!(c.r, 10);
    }

    #[test]
    fn rejects_unsupported_forms() {
        for bad in [
            "not-a-color",
            "#fff",
            "#12345g",
            "#+f0000",
            "rgba(1, 2)",
            "rgba(1, 2, 3, 4, 5)",
            "rgba(256, 0, 0, 1)",
            "rgba(0, 0, 0, 1.5)",
            "rgba(0, 0, 0, 1",
            "hsl(0, 0%, 0%)",
            "",
        ] {
            let err = bad.parse::<Rgba>().expect_err(bad);
            assert_eq!(err, ColorError::Unsupported(bad.to_string()));
        }
    }

    #[test]
    fn formats_with_two_decimal_alpha() {
        assert_eq!(Rgba::new(1, 2, 3, 1.0).to_string(), "rgba(1, 2, 3, 1.00)");
        assert_eq!(Rgba::new(1, 2, 3, 0.555).to_string(), "rgba(1, 2, 3, 0.56)");
    }

    #[test]
    fn lerp_endpoints_reproduce_inputs() {
        assert_eq!(
            lerp("#102030", "rgba(200, 100, 0, 0.5)", 0.0).expect("lerp"),
            "rgba(16, 32, 48, 1.00)"
        );
        assert_eq!(
            lerp("#102030", "rgba(200, 100, 0, 0.5)", 1.0).expect("lerp"),
            "rgba(200, 100, 0, 0.50)"
        );
    }

    #[test]
    fn lerp_midpoint_rounds_half_to_even() {
        // (0 + 5) / 2 = 2.5 -> 2, (0 + 7) / 2 = 3.5 -> 4
        assert_eq!(
            lerp("rgba(0, 0, 0, 0)", "rgba(5, 7, 100, 1)", 0.5).expect("lerp"),
            "rgba(2, 4, 50, 0.50)"
        );
    }

    #[test]
    fn lerp_uses_fixed_blend_ratio() {
        assert_eq!(
            lerp("rgba(255, 255, 255, 1)", "rgba(255, 255, 255, 0.65)", 0.4).expect("lerp"),
            "rgba(255, 255, 255, 0.86)"
        );
    }

    #[test]
    fn lerp_extrapolates_beyond_unit_range() {
        let out = lerp("rgba(100, 100, 100, 0.5)", "rgba(200, 100, 0, 0.5)", 1.2).expect("lerp");
        assert_eq!(out, "rgba(220, 100, 0, 0.50)");
        let saturated = lerp("#000000", "#ffffff", 2.0).expect("lerp");
        assert_eq!(saturated, "rgba(255, 255, 255, 1.00)");
    }

    #[test]
    fn lerp_reports_offending_value() {
        let err = lerp("#ffffff", "not-a-color", 0.5).expect_err("malformed");
        assert_eq!(err.to_string(), "unsupported color: not-a-color");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn channel_text() -> impl Strategy<Value = (u8, u8, u8, String)> {
            (any::<u8>(), any::<u8>(), any::<u8>(), prop::bool::ANY).prop_map(|(r, g, b, hex)| {
                let text = if hex {
                    format!("#{r:02x}{g:02x}{b:02x}")
                } else {
                    format!("rgba({r}, {g}, {b}, 1)")
                };
                (r, g, b, text)
            })
        }

        proptest! {
            #[test]
            fn lerp_endpoints_round_trip(a in channel_text(), b in channel_text()) {
                let start: Rgba = lerp(&a.3, &b.3, 0.0).expect("lerp").parse().expect("reparse");
                prop_assert_eq!((start.r, start.g, start.b), (a.0, a.1, a.2));
                let end: Rgba = lerp(&a.3, &b.3, 1.0).expect("lerp").parse().expect("reparse");
                prop_assert_eq!((end.r, end.g, end.b), (b.0, b.1, b.2));
            }

            #[test]
            fn lerp_midpoint_is_rounded_average(a in channel_text(), b in channel_text()) {
                let mid: Rgba = lerp(&a.3, &b.3, 0.5).expect("lerp").parse().expect("reparse");
                let avg = |x: u8, y: u8| ((f64::from(x) + f64::from(y)) / 2.0).round_ties_even() as u8;
                prop_assert_eq!(mid.r, avg(a.0, b.0));
                prop_assert_eq!(mid.g, avg(a.1, b.1));
                prop_assert_eq!(mid.b, avg(a.2, b.2));
            }
        }
    }
}
