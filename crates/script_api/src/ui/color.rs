//! Color normalization
//!
//! Scripts hand colors over in several shapes. Everything is reduced to a
//! packed `0xRRGGBB` integer before it is stored in a command.

use serde::{Deserialize, Serialize};

/// Packed `0xRRGGBB` color
pub type PackedColor = u32;

/// `#FFFFFF`
pub const WHITE: PackedColor = 0x00FF_FFFF;

/// `#333333`
pub const DARK_GREY: PackedColor = 0x0033_3333;

/// Color as supplied by a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Packed `0xRRGGBB` integer
    Packed(i64),
    /// Float channels, 0.0 to 1.0
    Rgb {
        /// Red channel
        r: f32,
        /// Green channel
        g: f32,
        /// Blue channel
        b: f32,
    },
    /// `"#RRGGBB"` or `"RRGGBB"`
    Hex(String),
    /// Anything else a script sent
    Other(serde_json::Value),
}

impl ColorValue {
    /// Color from float channels
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Color from a hex string
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Hex(value.into())
    }

    /// Packed form, or `None` if the value is malformed
    pub fn to_packed(&self) -> Option<PackedColor> {
        match self {
            Self::Packed(value) => u32::try_from(*value).ok().filter(|v| *v <= WHITE),
            Self::Rgb { r, g, b } => {
                let r = channel_to_byte(*r)?;
                let g = channel_to_byte(*g)?;
                let b = channel_to_byte(*b)?;
                Some((r << 16) | (g << 8) | b)
            }
            Self::Hex(text) => parse_hex(text),
            Self::Other(_) => None,
        }
    }
}

impl From<PackedColor> for ColorValue {
    fn from(value: PackedColor) -> Self {
        Self::Packed(i64::from(value))
    }
}

/// Channels outside 0..=1 are clamped; NaN and infinities are malformed
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_byte(channel: f32) -> Option<u32> {
    if !channel.is_finite() {
        return None;
    }
    Some((channel.clamp(0.0, 1.0) * 255.0).round() as u32)
}

fn parse_hex(text: &str) -> Option<PackedColor> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Normalize an optional script color, falling back to `fallback`
pub fn resolve_color(value: Option<&ColorValue>, fallback: PackedColor) -> PackedColor {
    match value {
        None => fallback,
        Some(color) => color.to_packed().unwrap_or_else(|| {
            log::warn!("Malformed color {:?}, using #{:06X}", color, fallback);
            fallback
        }),
    }
}
