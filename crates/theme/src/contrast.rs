//! WCAG relative luminance and contrast checks.

use serde::Serialize;

use crate::types::{Color, ThemeError};

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;

/// Threshold used when callers don't pass one (WCAG AA, normal text).
pub const DEFAULT_THRESHOLD: f64 = AA_NORMAL;

/// Dark text color offered by [`pick_readable_text`].
pub const NEAR_BLACK: Color = Color::new(0x0a, 0x0a, 0x0a);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagGrade {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA-large")]
    AaLarge,
    #[serde(rename = "FAIL")]
    Fail,
}

impl WcagGrade {
    pub fn label(&self) -> &'static str {
        match self {
            WcagGrade::Aaa => "AAA",
            WcagGrade::Aa => "AA",
            WcagGrade::AaLarge => "AA-large",
            WcagGrade::Fail => "FAIL",
        }
    }
}

/// Pass/fail judgment for a color pair, with the ratio that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastVerdict {
    pub ratio: f64,
    pub threshold: f64,
    pub passes: bool,
    pub grade: WcagGrade,
}

/// Convert sRGB channel to linear for luminance calculation.
fn linearize(val: u8) -> f64 {
    let v = val as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance (0.0 = black, 1.0 = white).
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors (1:1 to 21:1). Order doesn't matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_contrast(a: Color, b: Color, threshold: f64) -> bool {
    contrast_ratio(a, b) >= threshold
}

pub fn check_contrast(a: Color, b: Color, threshold: f64) -> ContrastVerdict {
    let ratio = contrast_ratio(a, b);
    ContrastVerdict {
        ratio,
        threshold,
        passes: ratio >= threshold,
        grade: wcag_grade(ratio),
    }
}

pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ThemeError> {
    Ok(contrast_ratio(Color::from_hex(a)?, Color::from_hex(b)?))
}

pub fn check_contrast_hex(a: &str, b: &str, threshold: f64) -> Result<ContrastVerdict, ThemeError> {
    Ok(check_contrast(
        Color::from_hex(a)?,
        Color::from_hex(b)?,
        threshold,
    ))
}

pub fn wcag_grade(ratio: f64) -> WcagGrade {
    if ratio >= AAA_NORMAL {
        WcagGrade::Aaa
    } else if ratio >= AA_NORMAL {
        WcagGrade::Aa
    } else if ratio >= AA_LARGE {
        WcagGrade::AaLarge
    } else {
        WcagGrade::Fail
    }
}

/// White or near-black, whichever reads better on `background`. White wins ties.
pub fn pick_readable_text(background: Color) -> Color {
    let with_white = contrast_ratio(background, Color::WHITE);
    let with_black = contrast_ratio(background, NEAR_BLACK);
    if with_white >= with_black {
        Color::WHITE
    } else {
        NEAR_BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_black_on_white_is_max() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "ratio was {}", ratio);
    }

    #[test]
    fn test_same_color_is_one() {
        for c in ["#000000", "#ffffff", "#5e2933", "#815443", "#7f7f7f"] {
            assert!((contrast_ratio(hex(c), hex(c)) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let colors = ["#000000", "#ffffff", "#5e2933", "#815443", "#f7f6f6", "#0a0a0a"];
        for a in colors {
            for b in colors {
                assert_eq!(contrast_ratio(hex(a), hex(b)), contrast_ratio(hex(b), hex(a)));
            }
        }
    }

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_meets_contrast_threshold_inclusive() {
        let ratio = contrast_ratio(hex("#5e2933"), Color::WHITE);
        assert!(meets_contrast(hex("#5e2933"), Color::WHITE, ratio));
        assert!(!meets_contrast(hex("#5e2933"), Color::WHITE, ratio + 0.01));
    }

    #[test]
    fn test_default_threshold_on_known_pairs() {
        assert!(meets_contrast(hex("#5e2933"), Color::WHITE, DEFAULT_THRESHOLD));
        assert!(!meets_contrast(hex("#b0b0b0"), Color::WHITE, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_check_contrast_carries_ratio() {
        let verdict = check_contrast(Color::BLACK, Color::WHITE, DEFAULT_THRESHOLD);
        assert!(verdict.passes);
        assert_eq!(verdict.grade, WcagGrade::Aaa);
        assert_eq!(verdict.threshold, 4.5);
        assert!((verdict.ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_hex_entry_points_propagate_errors() {
        assert!(contrast_ratio_hex("#000000", "white").is_err());
        assert!(check_contrast_hex("#12345", "#ffffff", 4.5).is_err());
        assert!((contrast_ratio_hex("#000000", "#FFFFFF").unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_wcag_grade_boundaries() {
        assert_eq!(wcag_grade(7.0), WcagGrade::Aaa);
        assert_eq!(wcag_grade(4.5), WcagGrade::Aa);
        assert_eq!(wcag_grade(3.0), WcagGrade::AaLarge);
        assert_eq!(wcag_grade(2.99), WcagGrade::Fail);
    }

    #[test]
    fn test_pick_readable_text() {
        assert_eq!(pick_readable_text(Color::WHITE), NEAR_BLACK);
        assert_eq!(pick_readable_text(Color::BLACK), Color::WHITE);
        assert_eq!(pick_readable_text(hex("#5e2933")), Color::WHITE);
        assert_eq!(pick_readable_text(hex("#f7f6f6")), NEAR_BLACK);
    }
}
