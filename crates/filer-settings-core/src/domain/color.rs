//! RGB(A) color value with the `#rrggbb` text encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::CodecError;

/// An 8-bit-per-channel color.
///
/// The text form written to disk is always `#rrggbb` in lowercase.  The alpha
/// channel is accepted on input (`#aarrggbb`) but not written back, so two
/// colors that differ only in alpha encode identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xff,
        }
    }

    /// Returns the `#rrggbb` name of the color.
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);

        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self {
                alpha: byte(0)?,
                red: byte(2)?,
                green: byte(4)?,
                blue: byte(6)?,
            }),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(0xff, 0x00, 0x00),
            "green" => Self::rgb(0x00, 0x80, 0x00),
            "blue" => Self::rgb(0x00, 0x00, 0xff),
            "yellow" => Self::rgb(0xff, 0xff, 0x00),
            "cyan" => Self::rgb(0x00, 0xff, 0xff),
            "magenta" => Self::rgb(0xff, 0x00, 0xff),
            "gray" | "grey" => Self::rgb(0x80, 0x80, 0x80),
            "transparent" => Self {
                alpha: 0x00,
                ..Self::BLACK
            },
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = CodecError;

    /// Parses `#rgb`, `#rrggbb`, `#aarrggbb` or a basic color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = match text.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_name(text),
        };
        parsed.ok_or_else(|| CodecError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color: Color = "#4e7fb4".parse().unwrap();
        assert_eq!(color, Color::rgb(0x4e, 0x7f, 0xb4));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("#4E7FB4".parse::<Color>(), "#4e7fb4".parse::<Color>());
    }

    #[test]
    fn test_parse_short_hex_expands_nibbles() {
        assert_eq!("#fa0".parse::<Color>(), Ok(Color::rgb(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn test_parse_argb_hex() {
        let color: Color = "#80ff0000".parse().unwrap();
        assert_eq!(color.alpha, 0x80);
        assert_eq!(color.red, 0xff);
        assert_eq!(color.name(), "#ff0000");
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("white".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("Grey".parse::<Color>(), "gray".parse::<Color>());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "#", "#12345", "#gggggg", "#+1234f", "4e7fb4", "chartreuse-ish"] {
            assert_eq!(
                text.parse::<Color>(),
                Err(CodecError::InvalidColor(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_name_is_lowercase_rrggbb() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).name(), "#ab01ff");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }
}
