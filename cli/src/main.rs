mod cli;
mod commands;
mod config;
mod logging;
mod report;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::warn;

use cli::{Cli, Commands};
use config::{config_path, LogLevel, UserConfig};
use logging::LogMode;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, config_error) = match UserConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (UserConfig::default(), Some(e)),
    };
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);
    let log_mode = if cli.log_file {
        LogMode::File
    } else {
        LogMode::Stderr
    };
    let _guard = logging::init(config.log_level, log_mode, log_level_override);

    // Reported only now so the event reaches the subscriber.
    if let Some(error) = config_error {
        let error = format!("{:#}", error);
        warn!(path = %config_path().display(), %error, "invalid config, using defaults");
    }

    let outcome = match cli.command {
        Commands::Theme { command } => {
            commands::theme::run(command, &config, cli.profile.as_deref())?
        }
        Commands::Config { path, reset } => commands::config::run(path, reset)?,
    };

    Ok(outcome.into())
}
