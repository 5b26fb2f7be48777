use color_eyre::eyre::Result;

use super::Outcome;
use crate::config::{config_path, UserConfig};

pub fn run(path: bool, reset: bool) -> Result<Outcome> {
    let config_file = config_path();

    if path {
        println!("{}", config_file.display());
        return Ok(Outcome::Success);
    }

    if reset {
        let config = UserConfig::default();
        config.save()?;
        println!("Config reset to defaults at: {}", config_file.display());
        return Ok(Outcome::Success);
    }

    let config = UserConfig::load()?;
    println!("Config file: {}", config_file.display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(Outcome::Success)
}
