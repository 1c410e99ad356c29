//! The color subsystem: an RGBA value type and its parsing rules.
//!
//! Colors are written by users in three forms: a color name (`red`), a hex
//! triplet (`#FF0000`), or a numeric tuple (`(1, 0, 0)` or `255, 0, 0`).
//! Parsing returns an explicit [`ColorParseError`] rather than suppressing
//! failures; the validator maps any error variant to a plain invalid result.

use crate::core::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB components (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a user-entered color token.
    ///
    /// Accepts, in order of precedence:
    /// - a hex string starting with `#` (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
    /// - a numeric tuple, optionally bracketed: 3 or 4 comma-separated
    ///   components, normalized `0.0..=1.0` when every component is at most 1,
    ///   otherwise integral `0..=255`
    /// - a color name from the built-in table (case-insensitive)
    pub fn parse(token: &str) -> Result<Self, ColorParseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if token.starts_with('#') {
            return Self::from_hex(token);
        }
        if token.contains(',') {
            return Self::from_tuple(token);
        }
        Self::from_name(token)
    }

    /// Parse a hex color string.
    ///
    /// Supports formats: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (a bare
    /// string without `#` is accepted too).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        // Hex digits are ASCII; reject multi-byte text before slicing so the
        // byte-indexed component ranges stay on char boundaries.
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }
        let component = |range: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        match digits.len() {
            3 => Ok(Self::rgb(
                component(&digits[0..1])? * 17,
                component(&digits[1..2])? * 17,
                component(&digits[2..3])? * 17,
            )),
            4 => Ok(Self::new(
                component(&digits[0..1])? * 17,
                component(&digits[1..2])? * 17,
                component(&digits[2..3])? * 17,
                component(&digits[3..4])? * 17,
            )),
            6 => Ok(Self::rgb(
                component(&digits[0..2])?,
                component(&digits[2..4])?,
                component(&digits[4..6])?,
            )),
            8 => Ok(Self::new(
                component(&digits[0..2])?,
                component(&digits[2..4])?,
                component(&digits[4..6])?,
                component(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidHex(hex.to_string())),
        }
    }

    /// Parse a numeric tuple, optionally wrapped in `(...)` or `[...]`.
    pub fn from_tuple(token: &str) -> Result<Self, ColorParseError> {
        let inner = strip_brackets(token.trim());
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::ComponentCount(parts.len()));
        }

        let mut components = Vec::with_capacity(parts.len());
        for part in &parts {
            let value: f64 = part
                .parse()
                .map_err(|_| ColorParseError::BadComponent(part.to_string()))?;
            components.push(value);
        }

        // All components at most 1 means the normalized 0..1 form;
        // otherwise components are 0..255 integers.
        let normalized = components.iter().all(|c| *c <= 1.0);
        let mut channels = [0u8; 4];
        channels[3] = 255;
        for (i, value) in components.iter().enumerate() {
            let scaled = if normalized { value * 255.0 } else { *value };
            if !(0.0..=255.0).contains(&scaled) {
                return Err(ColorParseError::OutOfRange(*value));
            }
            channels[i] = scaled.round() as u8;
        }

        Ok(Self::new(channels[0], channels[1], channels[2], channels[3]))
    }

    /// Look up a named color (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, ColorParseError> {
        let rgb = match name.trim().to_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "green" => (0, 128, 0),
            "yellow" => (255, 255, 0),
            "cyan" | "aqua" => (0, 255, 255),
            "magenta" | "fuchsia" => (255, 0, 255),
            "gray" | "grey" => (128, 128, 128),
            "silver" => (192, 192, 192),
            "maroon" => (128, 0, 0),
            "olive" => (128, 128, 0),
            "navy" => (0, 0, 128),
            "teal" => (0, 128, 128),
            "purple" => (128, 0, 128),
            "orange" => (255, 165, 0),
            "pink" => (255, 192, 203),
            "brown" => (165, 42, 42),
            "violet" => (238, 130, 238),
            "indigo" => (75, 0, 130),
            "gold" => (255, 215, 0),
            "beige" => (245, 245, 220),
            "coral" => (255, 127, 80),
            "crimson" => (220, 20, 60),
            "khaki" => (240, 230, 140),
            "lavender" => (230, 230, 250),
            "orchid" => (218, 112, 214),
            "plum" => (221, 160, 221),
            "salmon" => (250, 128, 114),
            "tan" => (210, 180, 140),
            "turquoise" => (64, 224, 208),
            "chocolate" => (210, 105, 30),
            "firebrick" => (178, 34, 34),
            "hotpink" => (255, 105, 180),
            "ivory" => (255, 255, 240),
            "sienna" => (160, 82, 45),
            "skyblue" => (135, 206, 235),
            "slategray" | "slategrey" => (112, 128, 144),
            "transparent" => return Ok(Self::TRANSPARENT),
            other => return Err(ColorParseError::UnknownName(other.to_string())),
        };
        Ok(Self::rgb(rgb.0, rgb.1, rgb.2))
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Common colors
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Strip one matching layer of `(...)` or `[...]`.
fn strip_brackets(token: &str) -> &str {
    if (token.starts_with('(') && token.ends_with(')'))
        || (token.starts_with('[') && token.ends_with(']'))
    {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("#00FF00FF").unwrap(), Color::new(0, 255, 0, 255));
        assert_eq!(Color::from_hex("#F00").unwrap(), Color::rgb(255, 0, 0));
        assert!(Color::from_hex("#F0").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_hex_multibyte_input_is_invalid() {
        // Byte lengths 3/6 with non-ASCII content must error, not panic
        assert!(matches!(
            Color::from_hex("#é."),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#ааа"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse("#日本"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::new(0, 255, 0, 128).to_hex(), "#00FF0080");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::parse("red").unwrap(), Color::RED);
        assert_eq!(Color::parse("Red").unwrap(), Color::RED);
        assert_eq!(Color::parse("skyblue").unwrap(), Color::rgb(135, 206, 235));
        assert_eq!(
            Color::parse("notacolor"),
            Err(ColorParseError::UnknownName("notacolor".to_string()))
        );
    }

    #[test]
    fn test_tuple_normalized() {
        // Every component at most 1: the normalized 0..1 form
        assert_eq!(Color::parse("(1, 0, 0)").unwrap(), Color::RED);
        assert_eq!(Color::parse("[0.5, 0.5, 0.5]").unwrap(), Color::rgb(128, 128, 128));
        assert_eq!(Color::parse("1, 1, 1, 0").unwrap(), Color::new(255, 255, 255, 0));
    }

    #[test]
    fn test_tuple_byte_range() {
        assert_eq!(Color::parse("(255, 0, 0)").unwrap(), Color::RED);
        assert_eq!(Color::parse("255, 165, 0").unwrap(), Color::rgb(255, 165, 0));
        assert_eq!(
            Color::parse("(300, 0, 0)"),
            Err(ColorParseError::OutOfRange(300.0))
        );
    }

    #[test]
    fn test_tuple_errors() {
        assert_eq!(
            Color::parse("(1, 0)"),
            Err(ColorParseError::ComponentCount(2))
        );
        assert_eq!(
            Color::parse("(a, b, c)"),
            Err(ColorParseError::BadComponent("a".to_string()))
        );
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
    }
}
