//! Font description with a comma-separated text encoding.
//!
//! Text form (ten fields, the layout desktop toolkits use for font strings):
//!
//! ```text
//! family,pointSize,pixelSize,styleHint,weight,italic,underline,strikeOut,fixedPitch,rawMode
//! Sans,10,-1,5,50,0,0,0,0,0
//! ```
//!
//! A bare family name (`"DejaVu Sans"`) or a truncated list is accepted on
//! input; the missing fields take the values of [`FontSpec::default`].  The
//! full ten-field form is always written back.  A list longer than ten fields
//! is read as a family name that itself contains commas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::CodecError;

/// Fields in the full text form.
const FIELD_COUNT: usize = 10;

/// "Any style" hint, used when no hint was given.
const STYLE_HINT_ANY: i32 = 5;

/// Normal font weight on the 0..=99 scale.
const WEIGHT_NORMAL: i32 = 50;

/// A font selection.
///
/// `point_size` is `-1.0` when the size is given in pixels instead, and
/// `pixel_size` is `-1` when the size is given in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub point_size: f64,
    pub pixel_size: i32,
    pub style_hint: i32,
    pub weight: i32,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    pub fixed_pitch: bool,
}

impl FontSpec {
    /// Creates a regular-weight font of `family` at `point_size` points.
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            ..Self::default()
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            point_size: 10.0,
            pixel_size: -1,
            style_hint: STYLE_HINT_ANY,
            weight: WEIGHT_NORMAL,
            italic: false,
            underline: false,
            strike_out: false,
            fixed_pitch: false,
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},0",
            self.family,
            self.point_size,
            self.pixel_size,
            self.style_hint,
            self.weight,
            u8::from(self.italic),
            u8::from(self.underline),
            u8::from(self.strike_out),
            u8::from(self.fixed_pitch),
        )
    }
}

impl FromStr for FontSpec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::InvalidFont(s.to_string());
        let parts: Vec<&str> = s.split(',').collect();

        // Fields beyond the ten-field layout belong to a family name with commas.
        let family_len = parts.len().saturating_sub(FIELD_COUNT - 1).max(1);
        let family = parts[..family_len].join(",");
        let family = family.trim();
        if family.is_empty() {
            return Err(invalid());
        }
        let mut font = FontSpec {
            family: family.to_string(),
            ..FontSpec::default()
        };
        let mut fields = parts[family_len..].iter().map(|f| f.trim());

        // Missing trailing fields keep their defaults; present ones must parse.
        if let Some(text) = fields.next() {
            font.point_size = text.parse().map_err(|_| invalid())?;
            if !font.point_size.is_finite() {
                return Err(invalid());
            }
        }
        let mut int_field = |target: &mut i32| -> Result<(), CodecError> {
            if let Some(text) = fields.next() {
                *target = text.parse().map_err(|_| invalid())?;
            }
            Ok(())
        };
        int_field(&mut font.pixel_size)?;
        int_field(&mut font.style_hint)?;
        int_field(&mut font.weight)?;

        let mut flags = [false; 4];
        for flag in &mut flags {
            if let Some(text) = fields.next() {
                let value: i32 = text.parse().map_err(|_| invalid())?;
                *flag = value != 0;
            }
        }
        [font.italic, font.underline, font.strike_out, font.fixed_pitch] = flags;

        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_description() {
        // Arrange
        let text = "DejaVu Sans,11.5,-1,5,75,1,0,1,0,0";

        // Act
        let font: FontSpec = text.parse().unwrap();

        // Assert
        assert_eq!(font.family, "DejaVu Sans");
        assert_eq!(font.point_size, 11.5);
        assert_eq!(font.pixel_size, -1);
        assert_eq!(font.weight, 75);
        assert!(font.italic);
        assert!(!font.underline);
        assert!(font.strike_out);
        assert!(!font.fixed_pitch);
    }

    #[test]
    fn test_parse_bare_family_uses_defaults() {
        let font: FontSpec = "Cantarell".parse().unwrap();
        assert_eq!(font, FontSpec::new("Cantarell", 10.0));
    }

    #[test]
    fn test_parse_truncated_list() {
        let font: FontSpec = "Noto Sans,9".parse().unwrap();
        assert_eq!(font.point_size, 9.0);
        assert_eq!(font.weight, 50);
    }

    #[test]
    fn test_parse_rejects_empty_family_and_bad_numbers() {
        for text in ["", ",10", "Sans,big", "Sans,10,-1,5,bold", "Sans,NaN"] {
            assert!(text.parse::<FontSpec>().is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_family_with_commas_survives_display_then_parse() {
        // Arrange
        let font = FontSpec {
            weight: 75,
            italic: true,
            ..FontSpec::new("Foo, Bar Sans", 9.0)
        };

        // Act
        let text = font.to_string();
        let parsed: FontSpec = text.parse().unwrap();

        // Assert
        assert_eq!(text, "Foo, Bar Sans,9,-1,5,75,1,0,0,0,0");
        assert_eq!(parsed, font);
    }

    #[test]
    fn test_display_writes_ten_fields() {
        assert_eq!(FontSpec::default().to_string(), "Sans,10,-1,5,50,0,0,0,0,0");
    }

    #[test]
    fn test_display_then_parse_is_identity() {
        let font = FontSpec {
            family: "Monospace".to_string(),
            point_size: 12.25,
            pixel_size: -1,
            style_hint: 7,
            weight: 63,
            italic: false,
            underline: true,
            strike_out: false,
            fixed_pitch: true,
        };
        assert_eq!(font.to_string().parse::<FontSpec>(), Ok(font));
    }
}
