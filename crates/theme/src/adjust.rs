//! Single-dimension HSL adjustments.
//!
//! Every operation converts to HSL, shifts one field, clamps it back into
//! range and converts back to RGB. Out-of-range results are clamped, never
//! reported as errors.

use crate::types::{Color, Hsl, ThemeError};

pub fn lighten(color: Color, percent: f64) -> Color {
    map_hsl(color, |hsl| Hsl::new(hsl.h, hsl.s, hsl.l + percent))
}

pub fn darken(color: Color, percent: f64) -> Color {
    map_hsl(color, |hsl| Hsl::new(hsl.h, hsl.s, hsl.l - percent))
}

pub fn saturate(color: Color, percent: f64) -> Color {
    map_hsl(color, |hsl| Hsl::new(hsl.h, hsl.s + percent, hsl.l))
}

pub fn desaturate(color: Color, percent: f64) -> Color {
    map_hsl(color, |hsl| Hsl::new(hsl.h, hsl.s - percent, hsl.l))
}

/// Rotate the hue by `degrees`, keeping saturation and lightness.
pub fn rotate_hue(color: Color, degrees: f64) -> Color {
    map_hsl(color, |hsl| Hsl::new(hsl.h + degrees, hsl.s, hsl.l))
}

fn map_hsl(color: Color, f: impl FnOnce(Hsl) -> Hsl) -> Color {
    Color::from_hsl(f(color.to_hsl()))
}

/// Which HSL adjustment to apply to a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
}

impl Adjustment {
    pub fn apply(self, color: Color, percent: f64) -> Color {
        match self {
            Adjustment::Lighten => lighten(color, percent),
            Adjustment::Darken => darken(color, percent),
            Adjustment::Saturate => saturate(color, percent),
            Adjustment::Desaturate => desaturate(color, percent),
        }
    }
}

/// Parse `hex`, apply `adjustment`, and return the result as `#rrggbb`.
pub fn adjust_hex(hex: &str, adjustment: Adjustment, percent: f64) -> Result<String, ThemeError> {
    let color = Color::from_hex(hex)?;
    Ok(adjustment.apply(color, percent).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_lighten_clamps_to_white() {
        assert_eq!(lighten(Color::BLACK, 150.0), Color::WHITE);
        assert_eq!(
            adjust_hex("#000000", Adjustment::Lighten, 150.0).unwrap(),
            "#ffffff"
        );
    }

    #[test]
    fn test_darken_clamps_to_black() {
        assert_eq!(darken(Color::WHITE, 150.0), Color::BLACK);
    }

    #[test]
    fn test_negative_percent_also_clamps() {
        assert_eq!(lighten(Color::WHITE, -500.0), Color::BLACK);
        assert_eq!(darken(Color::BLACK, -500.0), Color::WHITE);
    }

    #[test]
    fn test_lighten_and_darken_move_lightness_only() {
        let base = hex("#815443");
        let before = base.to_hsl();

        let lighter = lighten(base, 10.0).to_hsl();
        assert!((lighter.l - (before.l + 10.0)).abs() < 0.5);
        assert!((lighter.h - before.h).abs() < 1.5);

        let darker = darken(base, 10.0).to_hsl();
        assert!((darker.l - (before.l - 10.0)).abs() < 0.5);
    }

    #[test]
    fn test_saturation_stays_in_range() {
        let base = hex("#815443");
        for percent in [-1000.0, -30.0, 0.0, 30.0, 1000.0] {
            let s1 = saturate(base, percent).to_hsl().s;
            let s2 = desaturate(base, percent).to_hsl().s;
            assert!((0.0..=100.0).contains(&s1), "saturate({}) -> {}", percent, s1);
            assert!((0.0..=100.0).contains(&s2), "desaturate({}) -> {}", percent, s2);
        }
    }

    #[test]
    fn test_desaturate_fully_gives_gray() {
        let gray = desaturate(hex("#815443"), 100.0);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_saturate_gray_keeps_gray_hue_zero() {
        // achromatic input has hue 0, so saturating pushes it toward red
        let tinted = saturate(hex("#808080"), 50.0);
        assert!(tinted.r > tinted.g);
        assert_eq!(tinted.g, tinted.b);
    }

    #[test]
    fn test_rotate_hue_full_turn_is_identity() {
        let base = hex("#5e2933");
        assert_eq!(rotate_hue(base, 360.0), base);
    }

    #[test]
    fn test_adjust_hex_rejects_invalid() {
        assert!(matches!(
            adjust_hex("#fff", Adjustment::Darken, 5.0),
            Err(ThemeError::InvalidColorFormat { .. })
        ));
    }
}
