//! TUI styles derived from the current portfolio theme

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

/// Parse a `#RRGGBB` token into a terminal color
///
/// Anything else maps to [`Color::Reset`].
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Reset;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

/// Terminal colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_lighter: Color,
    pub accent: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub background: Color,
    pub button_text: Color,
    pub badge_text: Color,
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        let colors = theme.colors;
        Self {
            primary: hex_to_color(colors.primary),
            primary_light: hex_to_color(colors.primary_light),
            primary_lighter: hex_to_color(colors.primary_lighter),
            accent: hex_to_color(colors.accent),
            text: hex_to_color(colors.text),
            text_secondary: hex_to_color(colors.text_secondary),
            background: hex_to_color(colors.background),
            button_text: hex_to_color(theme.button_text_color()),
            badge_text: hex_to_color(theme.badge_text_color()),
        }
    }
}

impl Palette {
    /// Page background
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Header style
    pub fn header(&self) -> Style {
        Style::default()
            .bg(self.primary)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_bar(&self) -> Style {
        Style::default().bg(self.primary_light).fg(self.text_secondary)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default().bg(self.accent).fg(self.button_text)
    }

    /// Normal text style
    pub fn normal(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Muted text style
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Border of panels and popups
    pub fn border(&self) -> Style {
        Style::default().fg(self.primary_lighter)
    }

    /// Filled accent badge (availability, "Featured")
    pub fn badge(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.badge_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled accent button
    pub fn button(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.button_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Popup surface
    pub fn popup(&self) -> Style {
        Style::default().bg(self.primary_light).fg(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::get_theme_by_id;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#FF6B6B"), Color::Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(hex_to_color("0a1628"), Color::Rgb(0x0A, 0x16, 0x28));
        assert_eq!(hex_to_color("#FFF"), Color::Reset);
        assert_eq!(hex_to_color("#GGGGGG"), Color::Reset);
        assert_eq!(hex_to_color(""), Color::Reset);
    }

    #[test]
    fn test_palette_contrast_follows_theme_kind() {
        let dark = get_theme_by_id("ocean-depths");
        let palette = Palette::from(dark);
        assert_eq!(palette.accent, Color::Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(palette.button_text, palette.primary);
        assert_eq!(palette.badge_text, palette.primary);

        let light = crate::core::theme::themes_of_kind(crate::core::ThemeKind::Light)
            .next()
            .copied()
            .unwrap();
        let palette = Palette::from(light);
        assert_eq!(palette.button_text, palette.text);
        assert_eq!(palette.badge_text, palette.background);
    }
}
