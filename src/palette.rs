//! Theme palette extraction.
//!
//! A palette is read straight from a theme record's JSON fields. The four
//! text colors form the ordered palette the composer indexes into; the tint
//! and border fields are optional and fall back to palette entries.

use serde_json::{Map, Value};

use crate::color::Rgba;
use crate::error::ColorError;

pub const MAIN_TEXT_COLOR: &str = "main_text_color";
pub const ITALICS_TEXT_COLOR: &str = "italics_text_color";
pub const UNDERLINE_TEXT_COLOR: &str = "underline_text_color";
pub const QUOTE_TEXT_COLOR: &str = "quote_text_color";
pub const CHAT_TINT_COLOR: &str = "chat_tint_color";
pub const USER_MES_BLUR_TINT_COLOR: &str = "user_mes_blur_tint_color";
pub const BOT_MES_BLUR_TINT_COLOR: &str = "bot_mes_blur_tint_color";
pub const BORDER_COLOR: &str = "border_color";

/// Field names of the ordered palette, in index order.
pub const ORDERED_FIELDS: [&str; 4] = [
    MAIN_TEXT_COLOR,
    ITALICS_TEXT_COLOR,
    UNDERLINE_TEXT_COLOR,
    QUOTE_TEXT_COLOR,
];

/// Translucent-white fallbacks for the ordered palette.
const ORDERED_DEFAULTS: [&str; 4] = [
    "rgba(255, 255, 255, 1)",
    "rgba(255, 255, 255, 0.85)",
    "rgba(255, 255, 255, 0.65)",
    "rgba(255, 255, 255, 0.55)",
];

const DEFAULT_CHAT_TINT: &str = "rgba(8, 8, 12, 0.95)";

/// Colors a theme contributes to its generated stylesheet.
///
/// Values are kept as the record spelled them; they are only normalized when
/// blended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// main, italics, underline, quote
    pub ordered: [String; 4],
    pub chat_tint: Option<String>,
    pub user_tint: Option<String>,
    pub bot_tint: Option<String>,
    pub border: Option<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ordered: ORDERED_DEFAULTS.map(str::to_string),
            chat_tint: None,
            user_tint: None,
            bot_tint: None,
            border: None,
        }
    }
}

impl Palette {
    /// Read palette fields from a record object.
    ///
    /// Absent or `null` fields take their defaults; any other non-string
    /// value is rejected as an unsupported color.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ColorError> {
        let mut palette = Palette::default();
        for (slot, field) in palette.ordered.iter_mut().zip(ORDERED_FIELDS) {
            if let Some(value) = string_field(fields, field)? {
                *slot = value;
            }
        }
        palette.chat_tint = string_field(fields, CHAT_TINT_COLOR)?;
        palette.user_tint = string_field(fields, USER_MES_BLUR_TINT_COLOR)?;
        palette.bot_tint = string_field(fields, BOT_MES_BLUR_TINT_COLOR)?;
        palette.border = string_field(fields, BORDER_COLOR)?;
        Ok(palette)
    }

    /// Parse every ordered entry, failing on the first malformed one.
    pub fn parsed(&self) -> Result<[Rgba; 4], ColorError> {
        Ok([
            self.ordered[0].parse()?,
            self.ordered[1].parse()?,
            self.ordered[2].parse()?,
            self.ordered[3].parse()?,
        ])
    }

    /// Parse every color the record supplied, ordered entries first.
    ///
    /// Tint and border fields are checked only when present; their defaults
    /// are known-good.
    pub fn validate(&self) -> Result<(), ColorError> {
        self.parsed()?;
        let extras = [&self.chat_tint, &self.user_tint, &self.bot_tint, &self.border];
        for text in extras.into_iter().flatten() {
            text.parse::<Rgba>()?;
        }
        Ok(())
    }

    pub fn main_text(&self) -> &str {
        &self.ordered[0]
    }

    pub fn chat_tint(&self) -> &str {
        self.chat_tint.as_deref().unwrap_or(DEFAULT_CHAT_TINT)
    }

    /// User bubble tint, falling back to the underline color.
    pub fn user_tint(&self) -> &str {
        self.user_tint.as_deref().unwrap_or(&self.ordered[2])
    }

    /// Bot bubble tint, falling back to the quote color.
    pub fn bot_tint(&self) -> &str {
        self.bot_tint.as_deref().unwrap_or(&self.ordered[3])
    }

    /// Bubble border, falling back to the italics color.
    pub fn border(&self) -> &str {
        self.border.as_deref().unwrap_or(&self.ordered[1])
    }
}

fn string_field(fields: &Map<String, Value>, field: &str) -> Result<Option<String>, ColorError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(ColorError::Unsupported(other.to_string())),
    }
}
