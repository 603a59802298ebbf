//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use pustaka_app::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn book(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f02d}", // nf-fa-book
            IconMode::Unicode => "\u{1f4d6}",  // 📖
        }
    }

    pub fn cart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f07a}", // nf-fa-shopping_cart
            IconMode::Unicode => "\u{1f6d2}",  // 🛒
        }
    }

    pub fn heart_filled(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f004}", // nf-fa-heart
            IconMode::Unicode => "\u{2665}",   // ♥
        }
    }

    pub fn heart_outline(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08a}", // nf-fa-heart_o
            IconMode::Unicode => "\u{2661}",   // ♡
        }
    }

    pub fn star_filled(&self) -> &'static str {
        "\u{2605}" // ★
    }

    pub fn star_empty(&self) -> &'static str {
        "\u{2606}" // ☆
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263d}",   // ☽
        }
    }

    pub fn chat(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f075}", // nf-fa-comment
            IconMode::Unicode => "\u{1f4ac}",  // 💬
        }
    }

    pub fn truck(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d1}", // nf-fa-truck
            IconMode::Unicode => "\u{1f69a}",  // 🚚
        }
    }

    pub fn chevron_up(&self) -> &'static str {
        "\u{25b4}" // ▴
    }

    pub fn chevron_down(&self) -> &'static str {
        "\u{25be}" // ▾
    }

    pub fn arrow_right(&self) -> &'static str {
        "\u{2192}" // →
    }

    pub fn dot_active(&self) -> &'static str {
        "\u{25cf}" // ●
    }

    pub fn dot_inactive(&self) -> &'static str {
        "\u{25cb}" // ○
    }
}
