//! CLI module for folio
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod contact;
pub mod fetch;
pub mod themes;

pub use commands::{Cli, Commands};

use crate::api::PortfolioClient;
use crate::core::config::Config;
use crate::error::Result;

/// Effective API base address: flag or environment, then configuration
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(config.api_base_url.as_str())
        .to_string()
}

/// Effective startup theme id: flag, then configuration
pub fn resolve_theme_id(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(config.theme.as_str())
        .to_string()
}

/// Portfolio client for the effective API address
pub fn client(flag: Option<&str>, config: &Config) -> Result<PortfolioClient> {
    PortfolioClient::new(&resolve_api_url(flag, config))
}
