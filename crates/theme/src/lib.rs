//! Theme derivation engine for folio portfolio sites.
//!
//! Two seed colors go in; out come a named token set ([`ThemeTokens`]), hue
//! rotated suggestions ([`ColorSuggestions`]) and WCAG contrast verdicts.
//! Everything under `convert`, `adjust`, `contrast`, `tokens` and `suggest`
//! is pure and safe to call from any thread.

pub mod adjust;
pub mod audit;
pub mod cache;
pub mod contrast;
pub mod convert;
mod loader;
pub mod suggest;
pub mod tokens;
mod types;
pub mod validation;

pub use adjust::{darken, desaturate, lighten, rotate_hue, saturate, Adjustment};
pub use cache::ThemeCache;
pub use contrast::{
    check_contrast, contrast_ratio, meets_contrast, pick_readable_text, relative_luminance,
    ContrastVerdict, WcagGrade, DEFAULT_THRESHOLD,
};
pub use convert::{format_hex, hsl_to_rgb, parse_hex, rgb_to_hsl};
pub use loader::{load_seed_file, parse_seed_json, parse_seed_toml, seed_to_toml, SeedError};
pub use suggest::{suggest_palette, suggest_palette_hex, ColorSuggestions};
pub use tokens::{
    derive_theme, derive_theme_from_seed, derive_theme_hex, generate_palette, to_css_variables,
    ContrastCheck, PalettePreview, ThemeTokens,
};
pub use types::{Color, Hsl, ThemeError, ThemeSeed, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
