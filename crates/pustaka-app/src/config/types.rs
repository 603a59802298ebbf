//! Configuration types for Pustaka

use serde::{Deserialize, Serialize};

/// Color scheme for the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Icon rendering mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Rich Nerd Font glyphs (requires Nerd Font installed)
    NerdFonts,
}

/// Application settings (`<config-dir>/pustaka/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI-related settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Persisted color scheme. Absent until the user toggles once;
    /// resolution then falls back to the system preference probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    #[serde(default)]
    pub icons: IconMode,
}

impl Settings {
    /// The effective theme: the persisted choice if one exists,
    /// otherwise the system color-scheme preference.
    pub fn resolve_theme(&self) -> Theme {
        self.ui
            .theme
            .unwrap_or_else(super::settings::detect_system_theme)
    }
}
