//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - API base address of the portfolio backend
//! - Selected theme and whether it is remembered between sessions

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::theme;
use crate::error::{FolioError, Result};

/// Default backend address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the portfolio REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Theme id applied at startup
    #[serde(default = "default_theme_id")]
    pub theme: String,

    /// Persist theme changes made in the TUI
    #[serde(default = "default_remember_theme")]
    pub remember_theme: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_theme_id() -> String {
    theme::default_theme().id.to_string()
}

fn default_remember_theme() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme: default_theme_id(),
            remember_theme: default_remember_theme(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory
    pub fn config_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "folio-rs", "folio")
            .ok_or_else(|| FolioError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().to_path_buf())
    }

    /// Set the startup theme
    ///
    /// Unknown ids are stored as given; the registry falls back at lookup.
    pub fn set_theme(&mut self, id: &str) {
        self.theme = id.to_string();
    }

    /// Set the API base address
    pub fn set_api_base_url(&mut self, url: &str) {
        self.api_base_url = url.trim().to_string();
    }
}
