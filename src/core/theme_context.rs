//! Session-scoped current-theme state
//!
//! Views read the current theme through [`ThemeContext`] instead of a global,
//! so the state can be injected and tested without a terminal.

use std::sync::{Arc, RwLock};

use crate::core::theme::{self, Theme};

/// Read/replace contract for the current theme
pub trait ThemeContext {
    /// The current theme
    fn get(&self) -> Theme;

    /// Replace the current theme; the next `get` returns `theme`
    fn set(&self, theme: Theme);
}

/// Cloneable theme context; all clones observe the same state
#[derive(Debug, Clone)]
pub struct SharedThemeContext {
    current: Arc<RwLock<Theme>>,
}

impl SharedThemeContext {
    /// Create a context holding `theme`
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Arc::new(RwLock::new(theme)),
        }
    }

    /// Create a context initialized from a theme id (registry fallback applies)
    pub fn with_default(id: &str) -> Self {
        Self::new(theme::get_theme_by_id(id))
    }

    /// Resolve `id` through the registry and make it current
    pub fn set_by_id(&self, id: &str) -> Theme {
        let theme = theme::get_theme_by_id(id);
        self.set(theme);
        theme
    }
}

impl Default for SharedThemeContext {
    fn default() -> Self {
        Self::new(theme::default_theme())
    }
}

impl ThemeContext for SharedThemeContext {
    fn get(&self) -> Theme {
        // Theme is Copy; a poisoned lock still holds a complete value.
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn set(&self, theme: Theme) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = theme;
        tracing::debug!(theme = theme.id, "theme changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializes_from_id() {
        let ctx = SharedThemeContext::with_default("sage-serenity");
        assert_eq!(ctx.get().id, "sage-serenity");
    }

    #[test]
    fn test_unknown_default_falls_back() {
        let ctx = SharedThemeContext::with_default("no-such-theme");
        assert_eq!(ctx.get(), theme::default_theme());
    }

    #[test]
    fn test_set_is_visible_to_next_read() {
        let ctx = SharedThemeContext::default();
        let ocean = theme::get_theme_by_id("ocean-depths");
        ctx.set(ocean);
        assert_eq!(ctx.get(), ocean);
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = SharedThemeContext::default();
        let reader = ctx.clone();
        let applied = ctx.set_by_id("mint-fresh");
        assert_eq!(applied.id, "mint-fresh");
        assert_eq!(reader.get().id, "mint-fresh");
    }

    #[test]
    fn test_readers_on_other_threads_see_complete_themes() {
        let ctx = SharedThemeContext::default();
        let reader = ctx.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..1000 {
                let current = reader.get();
                assert_eq!(theme::find_theme(current.id), Some(current));
            }
        });
        for theme in theme::themes().iter().cycle().take(1000) {
            ctx.set(*theme);
        }
        handle.join().unwrap();
    }
}
