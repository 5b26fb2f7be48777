use color_eyre::eyre::{Result, WrapErr};
use folio_theme::{ThemeError, ThemeSeed, DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" | "none" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub contrast_threshold: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY.to_hex(),
            secondary_color: DEFAULT_SECONDARY.to_hex(),
            contrast_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ThemeConfig {
    pub fn seed(&self) -> Result<ThemeSeed, ThemeError> {
        ThemeSeed::from_hex(&self.primary_color, &self.secondary_color)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("folio")
}

pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("~/.cache"))
        .join("folio")
}

pub fn log_dir() -> PathBuf {
    cache_dir().join("logs")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl UserConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// A missing file means defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).wrap_err_with(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("none"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("garbage"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
        assert_eq!(LogLevel::Trace.as_tracing_level(), Some(Level::TRACE));
    }

    #[test]
    fn test_defaults_seed_the_sample_theme() {
        let config = UserConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme.seed().unwrap(), ThemeSeed::default());
        assert_eq!(config.theme.contrast_threshold, 4.5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: UserConfig = toml::from_str(
            r##"
[theme]
primary_color = "#112233"
"##,
        )
        .unwrap();
        assert_eq!(config.theme.primary_color, "#112233");
        assert_eq!(config.theme.secondary_color, "#815443");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_bad_color_in_config_surfaces_on_use() {
        let config: UserConfig = toml::from_str(
            r##"
[theme]
primary_color = "wine"
"##,
        )
        .unwrap();
        assert!(config.theme.seed().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = UserConfig::default();
        config.log_level = LogLevel::Debug;
        config.theme.primary_color = "#0a0b0c".to_string();
        config.save_to(&path).unwrap();

        let loaded = UserConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_level, LogLevel::Debug);
        assert_eq!(loaded.theme.primary_color, "#0a0b0c");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = UserConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.theme.primary_color, "#5e2933");
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = [").unwrap();

        let err = UserConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"), "got: {}", err);
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
    }
}
