//! Interactive configuration for the OpenWeather credential and defaults.

use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode, Text};
use weatherview_core::Config;

pub fn run() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        config.set_api_key(api_key.to_string());
    }

    let default_city = Text::new("Default city:")
        .with_initial_value(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    let default_city = default_city.trim();
    if !default_city.is_empty() {
        config.default_city = default_city.to_string();
    }

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());

    Ok(())
}
