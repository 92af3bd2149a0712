//! Core functionality for folio-rs
//!
//! This module contains shared logic including:
//! - Theme registry and the current-theme context
//! - Cancellation of in-flight requests
//! - Application configuration

pub mod cancel;
pub mod config;
pub mod theme;
pub mod theme_context;

pub use cancel::{CancellationSource, CancellationToken};
pub use config::Config;
pub use theme::{get_theme_by_id, Theme, ThemeKind};
pub use theme_context::{SharedThemeContext, ThemeContext};
