//! Theme registry
//!
//! A fixed catalogue of twenty named color palettes, built once and never
//! mutated. Lookups by id always produce a renderable theme: unknown ids fall
//! back to the first entry.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Light/dark classification of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Light => f.write_str("light"),
            ThemeKind::Dark => f.write_str("dark"),
        }
    }
}

/// The seven color tokens every theme supplies, as `#RRGGBB` strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_lighter: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub background: &'static str,
}

impl ThemeColors {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        primary: &'static str,
        primary_light: &'static str,
        primary_lighter: &'static str,
        accent: &'static str,
        text: &'static str,
        text_secondary: &'static str,
        background: &'static str,
    ) -> Self {
        Self {
            primary,
            primary_light,
            primary_lighter,
            accent,
            text,
            text_secondary,
            background,
        }
    }

    /// All seven tokens with their field names
    pub fn entries(&self) -> [(&'static str, &'static str); 7] {
        [
            ("primary", self.primary),
            ("primaryLight", self.primary_light),
            ("primaryLighter", self.primary_lighter),
            ("accent", self.accent),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("background", self.background),
        ]
    }
}

/// An immutable named bundle of color tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Stable registry key
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.kind == ThemeKind::Dark
    }

    /// Text color for filled accent buttons
    pub fn button_text_color(&self) -> &'static str {
        match self.kind {
            ThemeKind::Dark => self.colors.primary,
            ThemeKind::Light => self.colors.text,
        }
    }

    /// Text color for small badges drawn on an accent fill
    pub fn badge_text_color(&self) -> &'static str {
        match self.kind {
            ThemeKind::Dark => self.colors.primary,
            ThemeKind::Light => self.colors.background,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

// Color order: primary, primaryLight, primaryLighter, accent, text,
// textSecondary, background.
static THEMES: [Theme; 20] = [
    Theme {
        id: "midnight-sophistication",
        name: "Midnight Sophistication",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0A1128", "#1A2744", "#14213D", "#D4AF37", "#F5F1E8", "#708090", "#0A1128",
        ),
    },
    Theme {
        id: "ocean-depths",
        name: "Ocean Depths",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0B2438", "#1C3D5A", "#154360", "#FF6B6B", "#E8F4F8", "#7FB3D5", "#0B2438",
        ),
    },
    Theme {
        id: "forest-night",
        name: "Forest Night",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0D1F0D", "#1A3A1A", "#1E4620", "#FFB84D", "#F0F4E8", "#8FA88F", "#0D1F0D",
        ),
    },
    Theme {
        id: "royal-purple",
        name: "Royal Purple",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#1A0A2E", "#2D1B4E", "#3A2654", "#E8A87C", "#F4EEFC", "#A78FB5", "#1A0A2E",
        ),
    },
    Theme {
        id: "charcoal-elite",
        name: "Charcoal Elite",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#1A1A1D", "#2E2E32", "#3A3A3F", "#4ECDC4", "#F5F5F5", "#A0A0A8", "#1A1A1D",
        ),
    },
    Theme {
        id: "cream-elegance",
        name: "Cream Elegance",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F5F1E8", "#FFFFFF", "#FAF8F3", "#2C3E50", "#2C3E50", "#5D6D7E", "#F5F1E8",
        ),
    },
    Theme {
        id: "sage-serenity",
        name: "Sage Serenity",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#E8F0E8", "#F5FAF5", "#FFFFFF", "#6B4423", "#2D4A2D", "#5A7A5A", "#E8F0E8",
        ),
    },
    Theme {
        id: "blush-professional",
        name: "Blush Professional",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#FAF0F0", "#FFF8F8", "#FFFFFF", "#C7577A", "#3D2632", "#6B4D58", "#FAF0F0",
        ),
    },
    Theme {
        id: "sky-blue",
        name: "Sky Blue",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#E8F4F8", "#F5FAFB", "#FFFFFF", "#E67E22", "#1F3A4A", "#5D7A8A", "#E8F4F8",
        ),
    },
    Theme {
        id: "warm-beige",
        name: "Warm Beige",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F5EEE6", "#FAF6F0", "#FFFFFF", "#8B2635", "#3D2F2F", "#6B5858", "#F5EEE6",
        ),
    },
    Theme {
        id: "slate-noir",
        name: "Slate Noir",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0F1419", "#1C2128", "#252C35", "#F7B731", "#E6EDF3", "#8B949E", "#0F1419",
        ),
    },
    Theme {
        id: "emerald-night",
        name: "Emerald Night",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0A1810", "#152820", "#1E3A2A", "#A78BFA", "#E8F5E9", "#81C784", "#0A1810",
        ),
    },
    Theme {
        id: "mocha-luxe",
        name: "Mocha Luxe",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#1A1212", "#2A1F1F", "#3A2929", "#E8B4A0", "#F5EEE8", "#C4A69A", "#1A1212",
        ),
    },
    Theme {
        id: "indigo-depths",
        name: "Indigo Depths",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0F0F23", "#1A1A3E", "#252556", "#FFC857", "#F0F0FA", "#9999C3", "#0F0F23",
        ),
    },
    Theme {
        id: "obsidian-elegance",
        name: "Obsidian Elegance",
        kind: ThemeKind::Dark,
        colors: ThemeColors::new(
            "#0D0D0D", "#1A1A1A", "#2A2A2A", "#FF6B9D", "#FAFAFA", "#A8A8A8", "#0D0D0D",
        ),
    },
    Theme {
        id: "pearl-white",
        name: "Pearl White",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#FAFBFC", "#FFFFFF", "#F6F8FA", "#0969DA", "#1F2328", "#656D76", "#FAFBFC",
        ),
    },
    Theme {
        id: "lavender-mist",
        name: "Lavender Mist",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F3F0F8", "#FAF8FC", "#FFFFFF", "#7C3AED", "#2E1F3D", "#6B5A7A", "#F3F0F8",
        ),
    },
    Theme {
        id: "mint-fresh",
        name: "Mint Fresh",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F0F8F5", "#F7FCFA", "#FFFFFF", "#059669", "#1A3A2E", "#4A6B5E", "#F0F8F5",
        ),
    },
    Theme {
        id: "sand-stone",
        name: "Sand Stone",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F8F4EE", "#FBF9F5", "#FFFFFF", "#D97706", "#3E2723", "#6D4C41", "#F8F4EE",
        ),
    },
    Theme {
        id: "ice-crystal",
        name: "Ice Crystal",
        kind: ThemeKind::Light,
        colors: ThemeColors::new(
            "#F0F5FA", "#F7FAFC", "#FFFFFF", "#0891B2", "#0F172A", "#475569", "#F0F5FA",
        ),
    },
];

static THEME_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    THEMES
        .iter()
        .enumerate()
        .map(|(idx, theme)| (theme.id, idx))
        .collect()
});

/// All registered themes, in registry order
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// The default theme (first registry entry)
pub fn default_theme() -> Theme {
    THEMES[0]
}

/// Look up a theme by id, falling back to the default theme
pub fn get_theme_by_id(id: &str) -> Theme {
    find_theme(id).unwrap_or_else(default_theme)
}

/// Look up a theme by an optional id; `None` yields the default theme
pub fn get_theme(id: Option<&str>) -> Theme {
    id.map(get_theme_by_id).unwrap_or_else(default_theme)
}

/// Strict lookup: `None` if the id is not registered
pub fn find_theme(id: &str) -> Option<Theme> {
    THEME_INDEX.get(id).map(|&idx| THEMES[idx])
}

/// All themes of one kind, in registry order
pub fn themes_of_kind(kind: ThemeKind) -> impl Iterator<Item = &'static Theme> {
    THEMES.iter().filter(move |theme| theme.kind == kind)
}

/// The theme after `id` in registry order, wrapping around
///
/// Unknown ids are treated as the default theme.
pub fn next_theme(id: &str) -> Theme {
    let idx = THEME_INDEX.get(id).copied().unwrap_or(0);
    THEMES[(idx + 1) % THEMES.len()]
}
