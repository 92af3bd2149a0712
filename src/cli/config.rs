//! Configuration CLI command handlers

use crate::api::client::parse_base_url;
use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, DEFAULT_API_BASE_URL};
use crate::core::theme;
use crate::error::{FolioError, Result};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    let path = Config::config_path()?;
    let mut config = Config::load_from(&path)?;

    let message = match command {
        ConfigCommand::Set { key, value } => {
            let message = apply_set(&mut config, key, &value)?;
            config.save_to(&path)?;
            message
        }
        ConfigCommand::Get { key } => describe(&config, key),
        ConfigCommand::Remove { key } => {
            let message = apply_remove(&mut config, key);
            config.save_to(&path)?;
            message
        }
    };

    println!("{}", message);
    Ok(())
}

/// Set a value, validating it first
fn apply_set(config: &mut Config, key: ConfigKey, value: &str) -> Result<String> {
    match key {
        ConfigKey::ApiUrl => {
            parse_base_url(value)?;
            config.set_api_base_url(value);
            Ok(format!("API address set to: {}", config.api_base_url))
        }
        ConfigKey::Theme => {
            let theme = theme::find_theme(value.trim())
                .ok_or_else(|| FolioError::UnknownTheme(value.trim().to_string()))?;
            config.set_theme(theme.id);
            Ok(format!("Theme set to: {} ({})", theme.name, theme.id))
        }
        ConfigKey::RememberTheme => {
            config.remember_theme = parse_bool(value)?;
            Ok(format!("Remember theme: {}", config.remember_theme))
        }
    }
}

fn apply_remove(config: &mut Config, key: ConfigKey) -> String {
    let defaults = Config::default();
    match key {
        ConfigKey::ApiUrl => {
            config.api_base_url = defaults.api_base_url;
            format!("API address reset to default: {}", DEFAULT_API_BASE_URL)
        }
        ConfigKey::Theme => {
            config.theme = defaults.theme;
            format!("Theme reset to default: {}", config.theme)
        }
        ConfigKey::RememberTheme => {
            config.remember_theme = defaults.remember_theme;
            format!("Remember theme reset to default: {}", config.remember_theme)
        }
    }
}

fn describe(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::ApiUrl => format!("API address: {}", config.api_base_url),
        ConfigKey::Theme => {
            let theme = theme::get_theme_by_id(&config.theme);
            if theme.id == config.theme {
                format!("Theme: {} ({})", theme.name, theme.id)
            } else {
                format!(
                    "Theme: {} (unknown, using {})",
                    config.theme, theme.id
                )
            }
        }
        ConfigKey::RememberTheme => format!("Remember theme: {}", config.remember_theme),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(FolioError::InvalidInput(format!(
            "Invalid value '{}'. Expected true or false.",
            other
        ))),
    }
}
