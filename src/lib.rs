//! folio-rs - A terminal portfolio viewer
//!
//! This library provides both CLI and TUI interfaces over a portfolio REST
//! backend, including the twenty-theme registry, the session theme context
//! and a cancellable data-access client.

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{FolioError, Result};
