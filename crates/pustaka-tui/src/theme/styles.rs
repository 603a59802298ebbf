//! Semantic style builders over the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---

pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Badge style: accent background, e.g. the cart count pill.
pub fn badge(p: &Palette) -> Style {
    Style::default().fg(p.on_accent).bg(p.accent)
}

pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn rating(p: &Palette) -> Style {
    Style::default().fg(p.rating)
}

// --- Containers ---

/// Rounded card container used by every page section.
pub fn card_block(p: &Palette, active: bool) -> Block<'static> {
    let border_style = if active {
        Style::default().fg(p.border_active)
    } else {
        Style::default().fg(p.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(p.card_bg))
}
