//! pustaka-tui - Terminal UI for Pustaka
//!
//! This crate provides the ratatui-based storefront interface: terminal
//! event polling, the section layout, the theme system, one widget per
//! page section, and the main event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
