//! Centralized theme system for the storefront TUI.
//!
//! This module provides:
//! - `palette` — Light and dark color palettes, switched at runtime
//! - `styles` — Semantic style builder functions
//! - `icons` — Glyph constants with Nerd Font and plain-Unicode modes

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
pub use palette::{palette, Palette};
