//! Color types and utilities

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),

    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Serialized as a `#RRGGBB` or `#RRGGBBAA` string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to 0..=1
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn parse_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_owned()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::BadLength(s.to_owned()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit(s.to_owned()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::BadDigit(s.to_owned()))?;

        Ok(if digits.len() == 6 {
            Self::from_hex(value)
        } else {
            Self::from_rgba8(
                (value >> 24) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            )
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::parse_hex("#1e1e2e").unwrap();
        assert_eq!(color.to_rgba8(), [0x1e, 0x1e, 0x2e, 0xff]);
        assert_eq!(color.to_hex_string(), "#1e1e2e");
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = Color::parse_hex("#ff000080").unwrap();
        assert_eq!(color.to_rgba8(), [0xff, 0x00, 0x00, 0x80]);
        assert_eq!(color.to_hex_string(), "#ff000080");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::parse_hex("000000"),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#000"),
            Err(ParseColorError::BadLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ParseColorError::BadDigit(_))
        ));
    }

    #[test]
    fn test_lerp_clamps() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::WHITE);
        assert!(serde_json::from_str::<Color>("\"white\"").is_err());
    }
}
