//! Theme token derivation.
//!
//! [`derive_theme`] turns a primary and a secondary color into the full set of
//! design tokens a portfolio site is styled with: anchor colors, derived
//! accents, fixed neutrals, gradients, shadows and typography constants. The
//! derivation is deterministic, so a token set can be cached by its seed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjust::{darken, desaturate, lighten};
use crate::contrast::{meets_contrast, DEFAULT_THRESHOLD};
use crate::types::{Color, ThemeError, ThemeSeed};

pub const CREAM: Color = Color::new(0xf7, 0xf6, 0xf6);
pub const DARK: Color = Color::new(0x0a, 0x0a, 0x0a);
pub const TEXT_LIGHT: Color = Color::new(0xff, 0xff, 0xff);
pub const TEXT_GRAY: Color = Color::new(0xb0, 0xb0, 0xb0);
pub const TEXT_DARK: Color = Color::new(0x33, 0x33, 0x33);

const GRADIENT_ANGLE: u32 = 135;

const BORDER_RADIUS: &str = "16px";
const BORDER_RADIUS_LARGE: &str = "100px";
const TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
const FONT_FAMILY: &str = "'DM Sans', 'Poppins', sans-serif";
const H1_SIZE: &str = "clamp(2.5rem, 5vw, 4rem)";
const H2_SIZE: &str = "clamp(2rem, 4vw, 3rem)";
const H3_SIZE: &str = "clamp(1.5rem, 3vw, 2rem)";
const P_SIZE: &str = "1.1rem";

/// Marker line preceding the generated `:root` block.
pub const CSS_MARKER: &str = "/* ===== CSS VARIABLES - GENERATED THEME ===== */";

/// Advisory contrast verdicts recorded alongside a token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub primary_on_white: bool,
    pub primary_on_cream: bool,
    pub secondary_on_white: bool,
}

/// The seed pairs behind a [`ContrastCheck`], as `(name, foreground, background)`.
pub fn contrast_pairs(seed: &ThemeSeed) -> [(&'static str, Color, Color); 3] {
    [
        ("primaryOnWhite", seed.primary, Color::WHITE),
        ("primaryOnCream", seed.primary, CREAM),
        ("secondaryOnWhite", seed.secondary, Color::WHITE),
    ]
}

impl ContrastCheck {
    pub fn evaluate(seed: &ThemeSeed) -> Self {
        let [primary_on_white, primary_on_cream, secondary_on_white] = contrast_pairs(seed)
            .map(|(_, fg, bg)| meets_contrast(fg, bg, DEFAULT_THRESHOLD));

        Self {
            primary_on_white,
            primary_on_cream,
            secondary_on_white,
        }
    }

    pub fn all_pass(&self) -> bool {
        self.primary_on_white && self.primary_on_cream && self.secondary_on_white
    }

    /// Names of the failing checks, in declaration order.
    pub fn failures(&self) -> Vec<&'static str> {
        [
            ("primaryOnWhite", self.primary_on_white),
            ("primaryOnCream", self.primary_on_cream),
            ("secondaryOnWhite", self.secondary_on_white),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| name)
        .collect()
    }
}

/// The complete token set derived from a [`ThemeSeed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub primary_dark: Color,
    pub primary_light: Color,
    pub accent_brown: Color,
    pub secondary_beige: Color,
    pub cream: Color,

    pub dark: Color,
    pub text_light: Color,
    pub text_gray: Color,
    pub text_dark: Color,

    pub gradient_primary: String,
    pub gradient_secondary: String,
    pub gradient_beige: String,

    pub shadow: String,
    pub shadow_lg: String,
    pub border_radius: String,
    pub border_radius_large: String,
    pub transition: String,

    pub font_family: String,
    pub h1_size: String,
    pub h2_size: String,
    pub h3_size: String,
    pub p_size: String,

    pub contrast_check: ContrastCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenGroup {
    Colors,
    Gradients,
    Effects,
    Typography,
}

impl TokenGroup {
    pub fn label(&self) -> &'static str {
        match self {
            TokenGroup::Colors => "Colors",
            TokenGroup::Gradients => "Gradients",
            TokenGroup::Effects => "Effects",
            TokenGroup::Typography => "Typography",
        }
    }
}

/// One flattened token: its key, CSS custom property name and rendered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub key: &'static str,
    pub css_name: &'static str,
    pub group: TokenGroup,
    pub value: String,
}

fn gradient(from: Color, to: Color) -> String {
    format!(
        "linear-gradient({}deg, {} 0%, {} 100%)",
        GRADIENT_ANGLE, from, to
    )
}

fn shadow(color: Color, offset_y: u32, blur: u32, alpha: f64) -> String {
    format!("0 {}px {}px {}", offset_y, blur, color.to_rgba(alpha))
}

/// Derive the full token set from two seed colors.
pub fn derive_theme(primary: Color, secondary: Color) -> ThemeTokens {
    let accent_brown = darken(secondary, 5.0);
    let secondary_beige = lighten(desaturate(secondary, 30.0), 25.0);

    let contrast_check = ContrastCheck::evaluate(&ThemeSeed::new(primary, secondary));

    debug!(
        %primary,
        %secondary,
        %accent_brown,
        %secondary_beige,
        contrast_ok = contrast_check.all_pass(),
        "derived theme tokens"
    );

    ThemeTokens {
        primary_dark: primary,
        primary_light: secondary,
        accent_brown,
        secondary_beige,
        cream: CREAM,

        dark: DARK,
        text_light: TEXT_LIGHT,
        text_gray: TEXT_GRAY,
        text_dark: TEXT_DARK,

        gradient_primary: gradient(primary, secondary),
        gradient_secondary: gradient(secondary, accent_brown),
        gradient_beige: gradient(secondary_beige, CREAM),

        shadow: shadow(primary, 10, 30, 0.2),
        shadow_lg: shadow(primary, 20, 60, 0.3),
        border_radius: BORDER_RADIUS.to_string(),
        border_radius_large: BORDER_RADIUS_LARGE.to_string(),
        transition: TRANSITION.to_string(),

        font_family: FONT_FAMILY.to_string(),
        h1_size: H1_SIZE.to_string(),
        h2_size: H2_SIZE.to_string(),
        h3_size: H3_SIZE.to_string(),
        p_size: P_SIZE.to_string(),

        contrast_check,
    }
}

/// [`derive_theme`] from hex strings, failing if either doesn't parse.
pub fn derive_theme_hex(primary: &str, secondary: &str) -> Result<ThemeTokens, ThemeError> {
    let seed = ThemeSeed::from_hex(primary, secondary)?;
    Ok(derive_theme_from_seed(seed))
}

pub fn derive_theme_from_seed(seed: ThemeSeed) -> ThemeTokens {
    derive_theme(seed.primary, seed.secondary)
}

impl ThemeTokens {
    /// All tokens in a fixed order, grouped for CSS output.
    pub fn entries(&self) -> Vec<TokenEntry> {
        use TokenGroup::*;

        let rows: [(&'static str, &'static str, TokenGroup, String); 22] = [
            ("primaryDark", "primary-dark", Colors, self.primary_dark.to_hex()),
            ("primaryLight", "primary-light", Colors, self.primary_light.to_hex()),
            ("secondaryBeige", "secondary-beige", Colors, self.secondary_beige.to_hex()),
            ("accentBrown", "accent-brown", Colors, self.accent_brown.to_hex()),
            ("cream", "cream", Colors, self.cream.to_hex()),
            ("dark", "dark", Colors, self.dark.to_hex()),
            ("textLight", "text-light", Colors, self.text_light.to_hex()),
            ("textGray", "text-gray", Colors, self.text_gray.to_hex()),
            ("textDark", "text-dark", Colors, self.text_dark.to_hex()),
            ("gradientPrimary", "gradient-primary", Gradients, self.gradient_primary.clone()),
            ("gradientSecondary", "gradient-secondary", Gradients, self.gradient_secondary.clone()),
            ("gradientBeige", "gradient-beige", Gradients, self.gradient_beige.clone()),
            ("shadow", "shadow", Effects, self.shadow.clone()),
            ("shadowLg", "shadow-lg", Effects, self.shadow_lg.clone()),
            ("borderRadius", "border-radius", Effects, self.border_radius.clone()),
            ("borderRadiusLarge", "border-radius-large", Effects, self.border_radius_large.clone()),
            ("transition", "transition", Effects, self.transition.clone()),
            ("fontFamily", "font-family", Typography, self.font_family.clone()),
            ("h1Size", "h1-size", Typography, self.h1_size.clone()),
            ("h2Size", "h2-size", Typography, self.h2_size.clone()),
            ("h3Size", "h3-size", Typography, self.h3_size.clone()),
            ("pSize", "p-size", Typography, self.p_size.clone()),
        ];

        rows.into_iter()
            .map(|(key, css_name, group, value)| TokenEntry {
                key,
                css_name,
                group,
                value,
            })
            .collect()
    }

    /// Look a token up by its camelCase key (e.g. `"accentBrown"`).
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
    }

    pub fn to_css_variables(&self) -> String {
        to_css_variables(self)
    }
}

/// Render tokens as a `:root { --name: value; }` block.
///
/// Declarations appear in the order of [`ThemeTokens::entries`] with one
/// comment line per group, so output is stable across runs.
pub fn to_css_variables(tokens: &ThemeTokens) -> String {
    let mut css = String::new();
    css.push_str(CSS_MARKER);
    css.push_str("\n:root {\n");

    let mut current: Option<TokenGroup> = None;
    for entry in tokens.entries() {
        if current != Some(entry.group) {
            if current.is_some() {
                css.push('\n');
            }
            css.push_str(&format!("    /* {} */\n", entry.group.label()));
            current = Some(entry.group);
        }
        css.push_str(&format!("    --{}: {};\n", entry.css_name, entry.value));
    }

    css.push('}');
    css
}

/// Dark/main/light trio shown as one row of a palette preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub dark: Color,
    pub main: Color,
    pub light: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalettePreview {
    pub primary: Swatch,
    pub secondary: Swatch,
    pub neutral: Swatch,
}

/// Group a token set into the three swatch rows of a palette preview.
pub fn generate_palette(tokens: &ThemeTokens) -> PalettePreview {
    PalettePreview {
        primary: Swatch {
            dark: tokens.primary_dark,
            main: tokens.primary_dark,
            light: tokens.primary_light,
        },
        secondary: Swatch {
            dark: tokens.accent_brown,
            main: tokens.secondary_beige,
            light: tokens.cream,
        },
        neutral: Swatch {
            dark: tokens.dark,
            main: tokens.text_gray,
            light: tokens.text_light,
        },
    }
}
