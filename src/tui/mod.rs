//! Terminal User Interface module
//!
//! This module contains the ratatui-based portfolio viewer.

pub mod app;
pub mod event;
pub mod sections;
pub mod theme;
pub mod ui;

pub use app::App;
