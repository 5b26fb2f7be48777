//! Harmonious color suggestions by hue rotation.

use serde::{Deserialize, Serialize};

use crate::adjust::rotate_hue;
use crate::types::{Color, ThemeError};

pub const COMPLEMENTARY: f64 = 180.0;
pub const ANALOGOUS: f64 = 30.0;
pub const TRIADIC: f64 = 120.0;

/// Five colors sharing the seed's saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuggestions {
    pub complementary: Color,
    pub analogous1: Color,
    pub analogous2: Color,
    pub triadic1: Color,
    pub triadic2: Color,
}

impl ColorSuggestions {
    /// Name/color pairs in a fixed display order.
    pub fn named(&self) -> [(&'static str, Color); 5] {
        [
            ("complementary", self.complementary),
            ("analogous1", self.analogous1),
            ("analogous2", self.analogous2),
            ("triadic1", self.triadic1),
            ("triadic2", self.triadic2),
        ]
    }
}

pub fn suggest_palette(seed: Color) -> ColorSuggestions {
    ColorSuggestions {
        complementary: rotate_hue(seed, COMPLEMENTARY),
        analogous1: rotate_hue(seed, ANALOGOUS),
        analogous2: rotate_hue(seed, -ANALOGOUS),
        triadic1: rotate_hue(seed, TRIADIC),
        triadic2: rotate_hue(seed, 2.0 * TRIADIC),
    }
}

pub fn suggest_palette_hex(seed: &str) -> Result<ColorSuggestions, ThemeError> {
    Ok(suggest_palette(Color::from_hex(seed)?))
}
