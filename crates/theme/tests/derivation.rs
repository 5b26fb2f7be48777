use std::sync::Arc;

use folio_theme::*;
use pretty_assertions::assert_eq;

const PRIMARY: &str = "#5e2933";
const SECONDARY: &str = "#815443";

fn sample_tokens() -> ThemeTokens {
    derive_theme_hex(PRIMARY, SECONDARY).unwrap()
}

#[test]
fn derivation_is_deterministic() {
    let first = sample_tokens();
    let second = sample_tokens();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(to_css_variables(&first), to_css_variables(&second));
}

#[test]
fn derived_colors_match_known_values() {
    let tokens = sample_tokens();

    assert_eq!(tokens.accent_brown.to_hex(), "#70493a");
    assert_eq!(tokens.secondary_beige.to_hex(), "#a4a1a0");
    assert_eq!(
        tokens.gradient_secondary,
        "linear-gradient(135deg, #815443 0%, #70493a 100%)"
    );
    assert_eq!(
        tokens.gradient_beige,
        "linear-gradient(135deg, #a4a1a0 0%, #f7f6f6 100%)"
    );
}

#[test]
fn tokens_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(sample_tokens()).unwrap();

    assert_eq!(json["primaryDark"], "#5e2933");
    assert_eq!(json["primaryLight"], "#815443");
    assert_eq!(json["accentBrown"], "#70493a");
    assert_eq!(json["shadowLg"], "0 20px 60px rgba(94, 41, 51, 0.3)");
    assert_eq!(json["h1Size"], "clamp(2.5rem, 5vw, 4rem)");
    assert_eq!(
        json["contrastCheck"],
        serde_json::json!({
            "primaryOnWhite": true,
            "primaryOnCream": true,
            "secondaryOnWhite": true,
        })
    );

    let back: ThemeTokens = serde_json::from_value(json).unwrap();
    assert_eq!(back, sample_tokens());
}

#[test]
fn css_block_lists_every_token_once() {
    let tokens = sample_tokens();
    let css = tokens.to_css_variables();

    for entry in tokens.entries() {
        let line = format!("    --{}: {};\n", entry.css_name, entry.value);
        assert_eq!(css.matches(&line).count(), 1, "missing or repeated: {}", line);
    }
}

#[test]
fn suggestions_for_primary_seed() {
    let suggestions = suggest_palette_hex(PRIMARY).unwrap();

    let named: Vec<(&str, String)> = suggestions
        .named()
        .iter()
        .map(|(name, color)| (*name, color.to_hex()))
        .collect();

    assert_eq!(
        named,
        vec![
            ("complementary", "#295e54".to_string()),
            ("analogous1", "#5e3a29".to_string()),
            ("analogous2", "#5e294e".to_string()),
            ("triadic1", "#335e29".to_string()),
            ("triadic2", "#29335e".to_string()),
        ]
    );
}

#[test]
fn suggestions_ignore_secondary_color() {
    let a = derive_theme_hex(PRIMARY, "#000000").unwrap();
    let b = derive_theme_hex(PRIMARY, "#ffffff").unwrap();

    assert_eq!(
        suggest_palette(a.primary_dark),
        suggest_palette(b.primary_dark)
    );
}

#[test]
fn cache_agrees_with_direct_derivation() {
    let cache = ThemeCache::new();
    let cached = cache.get_or_derive_hex(PRIMARY, SECONDARY).unwrap();

    assert_eq!(*cached, sample_tokens());
    assert!(Arc::ptr_eq(
        &cached,
        &cache.get_or_derive(ThemeSeed::default())
    ));
}

#[test]
fn palette_preview_from_tokens() {
    let palette = generate_palette(&sample_tokens());
    let json = serde_json::to_value(palette).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "primary": { "dark": "#5e2933", "main": "#5e2933", "light": "#815443" },
            "secondary": { "dark": "#70493a", "main": "#a4a1a0", "light": "#f7f6f6" },
            "neutral": { "dark": "#0a0a0a", "main": "#b0b0b0", "light": "#ffffff" },
        })
    );
}

#[test]
fn invalid_colors_propagate_from_every_entry_point() {
    assert!(matches!(
        parse_hex("notacolor"),
        Err(ThemeError::InvalidColorFormat { .. })
    ));
    assert!(derive_theme_hex("#5e2933", "#12345").is_err());
    assert!(suggest_palette_hex("#abc").is_err());
    assert!(contrast::contrast_ratio_hex("#000000", "black").is_err());
    assert!(ThemeCache::new().get_or_derive_hex("x", "y").is_err());
}
