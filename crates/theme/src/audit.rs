//! Contrast audit over the pairs a generated site puts text on.

use serde::Serialize;

use crate::contrast::{contrast_ratio, wcag_grade, WcagGrade, AA_NORMAL};
use crate::tokens::ThemeTokens;
use crate::types::Color;

/// One background/foreground pair from a token set.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub pair: String,
    pub bg: Color,
    pub fg: Color,
    pub ratio: f64,
    pub grade: WcagGrade,
    pub pass: bool,
}

pub fn audit_tokens(tokens: &ThemeTokens) -> Vec<ContrastReport> {
    let checks = [
        ("cream", "primaryDark", tokens.cream, tokens.primary_dark),
        ("cream", "textDark", tokens.cream, tokens.text_dark),
        ("primaryDark", "textLight", tokens.primary_dark, tokens.text_light),
        ("primaryLight", "textLight", tokens.primary_light, tokens.text_light),
        ("accentBrown", "textLight", tokens.accent_brown, tokens.text_light),
        ("secondaryBeige", "primaryDark", tokens.secondary_beige, tokens.primary_dark),
        ("dark", "textGray", tokens.dark, tokens.text_gray),
        ("dark", "textLight", tokens.dark, tokens.text_light),
    ];

    checks
        .iter()
        .map(|(bg_name, fg_name, bg, fg)| {
            let ratio = contrast_ratio(*bg, *fg);
            ContrastReport {
                pair: format!("{} ↔ {}", bg_name, fg_name),
                bg: *bg,
                fg: *fg,
                ratio,
                grade: wcag_grade(ratio),
                pass: ratio >= AA_NORMAL,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::derive_theme_hex;

    #[test]
    fn test_audit_tokens_covers_text_pairs() {
        let tokens = derive_theme_hex("#5e2933", "#815443").unwrap();
        let reports = audit_tokens(&tokens);
        assert_eq!(reports.len(), 8);

        let on_primary = reports
            .iter()
            .find(|r| r.pair == "primaryDark ↔ textLight")
            .unwrap();
        assert!(on_primary.pass);
        assert_eq!(on_primary.bg.to_hex(), "#5e2933");
    }

    #[test]
    fn test_pale_seed_fails_text_pairs() {
        let tokens = derive_theme_hex("#fafafa", "#eeeeee").unwrap();
        let reports = audit_tokens(&tokens);

        let on_primary = reports
            .iter()
            .find(|r| r.pair == "primaryDark ↔ textLight")
            .unwrap();
        assert!(!on_primary.pass);
        assert_eq!(on_primary.grade, WcagGrade::Fail);
    }
}
