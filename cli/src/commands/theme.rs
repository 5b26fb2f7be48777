use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};
use folio_theme::audit::audit_tokens;
use folio_theme::contrast::check_contrast_hex;
use folio_theme::validation::validate_seed_file;
use folio_theme::{
    derive_theme_from_seed, generate_palette, load_seed_file, pick_readable_text, seed_to_toml,
    suggest_palette, Color, ThemeSeed, ThemeTokens,
};
use tracing::{debug, info, warn};

use super::Outcome;
use crate::cli::{ColorPair, OutputFormat, SuggestFormat, ThemeCommands};
use crate::config::{ThemeConfig, UserConfig};
use crate::report;

pub fn run(command: ThemeCommands, config: &UserConfig, profile: Option<&Path>) -> Result<Outcome> {
    match command {
        ThemeCommands::Derive { colors, format } => {
            let tokens = derive(&colors, &config.theme, profile)?;
            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&tokens)?,
                OutputFormat::Toml => toml::to_string_pretty(&tokens)?,
                OutputFormat::Css => tokens.to_css_variables(),
            };
            println!("{}", output);
        }
        ThemeCommands::Css { colors } => {
            let tokens = derive(&colors, &config.theme, profile)?;
            println!("{}", tokens.to_css_variables());
        }
        ThemeCommands::Suggest { seed, format } => {
            let seed = match seed {
                Some(hex) => Color::from_hex(&hex)?,
                None => base_seed(&config.theme, profile)?.primary,
            };
            let suggestions = suggest_palette(seed);

            match format {
                SuggestFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
                SuggestFormat::Text => {
                    println!("Suggestions for {}", seed);
                    println!("{}", "-".repeat(32));
                    for (name, color) in suggestions.named() {
                        println!("{:<16} {}", name, color);
                    }
                }
            }
        }
        ThemeCommands::Contrast {
            first,
            second,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(config.theme.contrast_threshold);
            let verdict = check_contrast_hex(&first, &second, threshold)?;

            println!(
                "{} ↔ {}: {:.2}:1 ({}) {} at {}:1",
                first.to_lowercase(),
                second.to_lowercase(),
                verdict.ratio,
                verdict.grade.label(),
                if verdict.passes { "passes" } else { "fails" },
                threshold
            );

            if !verdict.passes {
                return Ok(Outcome::Failed);
            }
        }
        ThemeCommands::Palette { colors, json } => {
            let tokens = derive(&colors, &config.theme, profile)?;
            let palette = generate_palette(&tokens);

            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
                return Ok(Outcome::Success);
            }

            println!(
                "{:<10} {:<9} {:<9} {:<9} Text on main",
                "Group", "Dark", "Main", "Light"
            );
            println!("{}", "-".repeat(52));
            for (group, swatch) in [
                ("primary", palette.primary),
                ("secondary", palette.secondary),
                ("neutral", palette.neutral),
            ] {
                println!(
                    "{:<10} {:<9} {:<9} {:<9} {}",
                    group,
                    swatch.dark,
                    swatch.main,
                    swatch.light,
                    pick_readable_text(swatch.main)
                );
            }
        }
        ThemeCommands::Check { file, verbose } => {
            let path = file
                .as_deref()
                .or(profile)
                .ok_or_else(|| eyre!("No profile to check. Pass a file or --profile <FILE>"))?;

            let result = validate_seed_file(path);
            report::print_validation_result(&result, verbose);

            if let Some(seed) = result.seed {
                println!();
                let tokens = derive_theme_from_seed(seed);
                report::print_contrast_reports(&audit_tokens(&tokens), verbose);
            }

            if !result.is_valid() {
                return Ok(Outcome::Failed);
            }
        }
        ThemeCommands::Init {
            file,
            primary,
            secondary,
            force,
        } => {
            if file.exists() && !force {
                eprintln!(
                    "Profile already exists at: {} (use --force to overwrite)",
                    file.display()
                );
                return Ok(Outcome::Failed);
            }

            let colors = ColorPair { primary, secondary };
            let seed = resolve_seed(&colors, &config.theme, None)?;
            std::fs::write(&file, seed_to_toml(&seed))
                .wrap_err_with(|| format!("Failed to write {}", file.display()))?;

            info!(path = %file.display(), "wrote seed profile");
            println!("Created profile at: {}", file.display());
            println!("\nDerive its theme with: folio theme css --profile {}", file.display());
        }
    }

    Ok(Outcome::Success)
}

fn derive(colors: &ColorPair, config: &ThemeConfig, profile: Option<&Path>) -> Result<ThemeTokens> {
    let seed = resolve_seed(colors, config, profile)?;
    let tokens = derive_theme_from_seed(seed);

    for check in tokens.contrast_check.failures() {
        warn!(check, "seed color fails WCAG AA contrast (advisory)");
    }

    Ok(tokens)
}

/// Seed colors from `--profile` when given, otherwise from the user config.
fn base_seed(config: &ThemeConfig, profile: Option<&Path>) -> Result<ThemeSeed> {
    match profile {
        Some(path) => load_seed_file(path)
            .wrap_err_with(|| format!("Failed to load seed colors from {}", path.display())),
        None => config
            .seed()
            .wrap_err("Invalid [theme] colors in config file"),
    }
}

/// Command-line colors win; whatever is missing falls back to [`base_seed`].
pub fn resolve_seed(
    colors: &ColorPair,
    config: &ThemeConfig,
    profile: Option<&Path>,
) -> Result<ThemeSeed> {
    if let (Some(primary), Some(secondary)) = (&colors.primary, &colors.secondary) {
        return Ok(ThemeSeed::from_hex(primary, secondary)?);
    }

    let mut seed = base_seed(config, profile)?;
    if let Some(primary) = &colors.primary {
        seed.primary = Color::from_hex(primary)?;
    }
    if let Some(secondary) = &colors.secondary {
        seed.secondary = Color::from_hex(secondary)?;
    }

    debug!(primary = %seed.primary, secondary = %seed.secondary, "resolved seed colors");
    Ok(seed)
}
