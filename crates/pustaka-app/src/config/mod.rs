//! Configuration for Pustaka
//!
//! Supports:
//! - `<config-dir>/pustaka/config.toml` - persisted settings (theme, icons)
//! - `COLORFGBG` probe - system color-scheme fallback

pub mod settings;
pub mod store;
pub mod types;

pub use settings::{default_config_dir, detect_system_theme, load_settings, save_settings};
pub use store::{FileThemeStore, MemoryThemeStore, ThemeStore};
pub use types::{IconMode, Settings, Theme, UiSettings};
