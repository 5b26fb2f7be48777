//! Core theme types.
//!
//! This module defines the value types shared by every part of the engine:
//! - `Color` - RGB color with a canonical `#rrggbb` text form
//! - `Hsl` - hue/saturation/lightness intermediate
//! - `ThemeSeed` - the two base colors a theme is derived from
//! - `ThemeError` - the single failure mode of the engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert;

/// Errors raised by the theme engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid color format: \"{value}\" (expected #RRGGBB hex)")]
    InvalidColorFormat { value: String },
}

/// RGB color representation.
///
/// Each component is a value from 0-255. Serializes as a lowercase
/// `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Create a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#5e2933" or "5E2933").
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        convert::parse_hex(hex)
    }

    /// Convert to hex string (e.g., "#5e2933").
    pub fn to_hex(&self) -> String {
        convert::format_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        convert::hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }

    /// CSS `rgba()` expression for this color at the given alpha.
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build an HSL value, wrapping the hue and clamping the percentages.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

pub(crate) fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub const DEFAULT_PRIMARY: Color = Color::new(0x5e, 0x29, 0x33);
pub const DEFAULT_SECONDARY: Color = Color::new(0x81, 0x54, 0x43);

/// The two base colors a theme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeSeed {
    pub primary: Color,
    pub secondary: Color,
}

impl ThemeSeed {
    pub const fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }

    pub fn from_hex(primary: &str, secondary: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            primary: Color::from_hex(primary)?,
            secondary: Color::from_hex(secondary)?,
        })
    }
}

impl Default for ThemeSeed {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, DEFAULT_SECONDARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_serializes_as_hex() {
        let json = serde_json::to_string(&Color::new(0x5e, 0x29, 0x33)).unwrap();
        assert_eq!(json, "\"#5e2933\"");

        let back: Color = serde_json::from_str("\"#5E2933\"").unwrap();
        assert_eq!(back, Color::new(0x5e, 0x29, 0x33));
    }

    #[test]
    fn test_color_deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<Color>("\"#abc\"").is_err());
    }

    #[test]
    fn test_color_display_and_from_str() {
        let color: Color = "815443".parse().unwrap();
        assert_eq!(color.to_string(), "#815443");
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(
            DEFAULT_PRIMARY.to_rgba(0.2),
            "rgba(94, 41, 51, 0.2)".to_string()
        );
    }

    #[test]
    fn test_hsl_new_wraps_and_clamps() {
        let hsl = Hsl::new(-30.0, 120.0, -5.0);
        assert_eq!(hsl.h, 330.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);

        assert_eq!(Hsl::new(720.0, 50.0, 50.0).h, 0.0);
    }

    #[test]
    fn test_seed_from_hex_propagates_error() {
        let err = ThemeSeed::from_hex("#5e2933", "brown").unwrap_err();
        assert_eq!(
            err,
            ThemeError::InvalidColorFormat {
                value: "brown".to_string()
            }
        );
    }
}
