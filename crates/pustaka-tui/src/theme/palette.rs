//! Color palettes for the storefront theme toggle.
//!
//! Two fixed palettes, selected by the persisted theme preference.
//! Named ANSI colors keep the page legible on terminals without
//! truecolor support.

use pustaka_app::Theme;
use ratatui::style::Color;

/// Semantic color slots used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Terminal/page background
    pub page_bg: Color,
    /// Panel and card backgrounds
    pub card_bg: Color,
    /// Inactive borders
    pub border: Color,
    /// Focused/selected borders
    pub border_active: Color,
    /// Primary accent (the shop's pink)
    pub accent: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// Muted text
    pub text_muted: Color,
    /// Success/feature checkmarks
    pub success: Color,
    /// Star ratings
    pub rating: Color,
    /// Badge text over the accent color
    pub on_accent: Color,
}

pub const DARK: Palette = Palette {
    page_bg: Color::Black,
    card_bg: Color::Black,
    border: Color::DarkGray,
    border_active: Color::Magenta,
    accent: Color::Magenta,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    success: Color::Green,
    rating: Color::Yellow,
    on_accent: Color::White,
};

pub const LIGHT: Palette = Palette {
    page_bg: Color::White,
    card_bg: Color::White,
    border: Color::Gray,
    border_active: Color::Magenta,
    accent: Color::Magenta,
    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,
    success: Color::Green,
    rating: Color::Yellow,
    on_accent: Color::White,
};

/// The palette for the active theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_where_it_matters() {
        assert_ne!(DARK.page_bg, LIGHT.page_bg);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }

    #[test]
    fn test_palette_selection_follows_theme() {
        assert_eq!(palette(Theme::Dark), &DARK);
        assert_eq!(palette(Theme::Light), &LIGHT);
    }
}
