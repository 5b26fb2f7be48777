use std::fmt;
use std::path::Path;

use crate::contrast::{contrast_ratio, DEFAULT_THRESHOLD};
use crate::tokens::{contrast_pairs, derive_theme_from_seed};
use crate::types::{Color, ThemeSeed};

const REQUIRED_COLOR_FIELDS: &[&str] = &["primary_color", "secondary_color"];
const REQUIRED_JSON_FIELDS: &[&str] = &["primaryColor", "secondaryColor"];

#[derive(Debug, Clone)]
pub enum ValidationError {
    InvalidToml {
        message: String,
        line: Option<usize>,
        col: Option<usize>,
    },
    InvalidJson {
        message: String,
        line: Option<usize>,
        col: Option<usize>,
    },
    MissingThemeSection,
    MissingField {
        field: String,
    },
    InvalidColor {
        field: String,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToml { message, line, col } => {
                if let (Some(l), Some(c)) = (line, col) {
                    write!(f, "Invalid TOML at line {}, col {}: {}", l, c, message)
                } else {
                    write!(f, "Invalid TOML: {}", message)
                }
            }
            Self::InvalidJson { message, line, col } => {
                if let (Some(l), Some(c)) = (line, col) {
                    write!(f, "Invalid JSON at line {}, col {}: {}", l, c, message)
                } else {
                    write!(f, "Invalid JSON: {}", message)
                }
            }
            Self::MissingThemeSection => write!(f, "Missing required [theme] section"),
            Self::MissingField { field } => {
                write!(f, "[theme] Missing required field: {}", field)
            }
            Self::InvalidColor { field, value } => {
                write!(
                    f,
                    "[theme] Invalid color for '{}': \"{}\" (expected #RRGGBB hex)",
                    field, value
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ValidationWarning {
    LowContrast { pair: String, ratio: f64 },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowContrast { pair, ratio } => {
                write!(
                    f,
                    "{} contrast is {:.2}:1, below {}:1 (text may be hard to read)",
                    pair, ratio, DEFAULT_THRESHOLD
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub path: String,
    pub seed: Option<ThemeSeed>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

fn parse_toml_with_location(content: &str) -> Result<toml::Value, ValidationError> {
    toml::from_str(content).map_err(|e| {
        let message = e.message().to_string();
        let span = e.span();

        let (line, col) = if let Some(span) = span {
            let line = content[..span.start].matches('\n').count() + 1;
            let last_newline = content[..span.start]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(0);
            let col = span.start - last_newline + 1;
            (Some(line), Some(col))
        } else {
            (None, None)
        };

        ValidationError::InvalidToml { message, line, col }
    })
}

/// `lookup` yields `None` for a missing field and `Err(repr)` for a non-string one.
fn validate_theme_colors<F>(fields: &[&str], lookup: F) -> (Vec<ValidationError>, Vec<Color>)
where
    F: Fn(&str) -> Option<Result<String, String>>,
{
    let mut errors = Vec::new();
    let mut colors = Vec::new();

    for &field in fields {
        match lookup(field) {
            None => errors.push(ValidationError::MissingField {
                field: field.to_string(),
            }),
            Some(Ok(value)) => match Color::from_hex(&value) {
                Ok(color) => colors.push(color),
                Err(_) => errors.push(ValidationError::InvalidColor {
                    field: field.to_string(),
                    value,
                }),
            },
            Some(Err(value)) => errors.push(ValidationError::InvalidColor {
                field: field.to_string(),
                value,
            }),
        }
    }

    (errors, colors)
}

fn contrast_warnings(seed: &ThemeSeed) -> Vec<ValidationWarning> {
    let failures = derive_theme_from_seed(*seed).contrast_check.failures();

    contrast_pairs(seed)
        .into_iter()
        .filter(|(name, _, _)| failures.contains(name))
        .map(|(name, fg, bg)| ValidationWarning::LowContrast {
            pair: name.to_string(),
            ratio: contrast_ratio(fg, bg),
        })
        .collect()
}

/// Validate the `[theme]` section of a TOML profile, collecting every problem.
pub fn validate_seed_content(content: &str, path: &str) -> ValidationResult {
    let mut result = ValidationResult {
        path: path.to_string(),
        seed: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let toml_value = match parse_toml_with_location(content) {
        Ok(v) => v,
        Err(e) => {
            result.errors.push(e);
            return result;
        }
    };

    let Some(theme) = toml_value.get("theme") else {
        result.errors.push(ValidationError::MissingThemeSection);
        return result;
    };

    let Some(table) = theme.as_table() else {
        result.errors.push(ValidationError::InvalidToml {
            message: "[theme] must be a table".to_string(),
            line: None,
            col: None,
        });
        return result;
    };

    let (errors, colors) = validate_theme_colors(REQUIRED_COLOR_FIELDS, |field| {
        table.get(field).map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("{:?}", value))
        })
    });
    finish(result, errors, &colors)
}

/// Validate the `theme` object of a JSON profile, collecting every problem.
pub fn validate_seed_json_content(content: &str, path: &str) -> ValidationResult {
    let mut result = ValidationResult {
        path: path.to_string(),
        seed: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let json: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            result.errors.push(ValidationError::InvalidJson {
                message: e.to_string(),
                line: Some(e.line()),
                col: Some(e.column()),
            });
            return result;
        }
    };

    let Some(theme) = json.get("theme") else {
        result.errors.push(ValidationError::MissingThemeSection);
        return result;
    };

    let Some(object) = theme.as_object() else {
        result.errors.push(ValidationError::InvalidJson {
            message: "\"theme\" must be an object".to_string(),
            line: None,
            col: None,
        });
        return result;
    };

    let (errors, colors) = validate_theme_colors(REQUIRED_JSON_FIELDS, |field| {
        object.get(field).map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| value.to_string())
        })
    });
    finish(result, errors, &colors)
}

fn finish(
    mut result: ValidationResult,
    errors: Vec<ValidationError>,
    colors: &[Color],
) -> ValidationResult {
    result.errors = errors;

    if let [primary, secondary] = colors {
        let seed = ThemeSeed::new(*primary, *secondary);
        result.warnings = contrast_warnings(&seed);
        result.seed = Some(seed);
    }

    result
}

/// Validate a profile on disk; `.json` files are read as JSON, anything else as TOML.
pub fn validate_seed_file(path: &Path) -> ValidationResult {
    let path_str = path.display().to_string();
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    match std::fs::read_to_string(path) {
        Ok(content) if is_json => validate_seed_json_content(&content, &path_str),
        Ok(content) => validate_seed_content(&content, &path_str),
        Err(e) => ValidationResult {
            path: path_str,
            seed: None,
            errors: vec![ValidationError::InvalidToml {
                message: format!("Could not read file: {}", e),
                line: None,
                col: None,
            }],
            warnings: vec![],
        },
    }
}
