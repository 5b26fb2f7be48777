use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{ThemeError, ThemeSeed};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Color(#[from] ThemeError),
}

#[derive(Debug, Deserialize)]
struct TomlSeedFile {
    theme: TomlThemeSection,
}

#[derive(Debug, Deserialize)]
struct TomlThemeSection {
    primary_color: String,
    secondary_color: String,
}

// Profile JSON carries a lot more than the theme; everything else is ignored.
#[derive(Debug, Deserialize)]
struct JsonProfile {
    theme: JsonThemeSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonThemeSection {
    primary_color: String,
    secondary_color: String,
}

pub fn parse_seed_toml(content: &str) -> Result<ThemeSeed, SeedError> {
    let file: TomlSeedFile = toml::from_str(content)?;
    Ok(ThemeSeed::from_hex(
        &file.theme.primary_color,
        &file.theme.secondary_color,
    )?)
}

pub fn parse_seed_json(content: &str) -> Result<ThemeSeed, SeedError> {
    let profile: JsonProfile = serde_json::from_str(content)?;
    Ok(ThemeSeed::from_hex(
        &profile.theme.primary_color,
        &profile.theme.secondary_color,
    )?)
}

pub fn load_seed_file(path: &Path) -> Result<ThemeSeed, SeedError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if extension != "toml" && extension != "json" {
        return Err(SeedError::UnsupportedFormat(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if extension == "toml" {
        parse_seed_toml(&content)
    } else {
        parse_seed_json(&content)
    }
}

pub fn seed_to_toml(seed: &ThemeSeed) -> String {
    format!(
        r#"[theme]
primary_color = "{}"
secondary_color = "{}"
"#,
        seed.primary.to_hex(),
        seed.secondary.to_hex(),
    )
}
