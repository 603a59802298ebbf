//! Pustaka - a keyboard-driven storefront TUI for a book publisher
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pustaka_app::config::{default_config_dir, load_settings, FileThemeStore};
use pustaka_app::Theme;

/// Pustaka - a keyboard-driven storefront TUI for a book publisher
#[derive(Parser, Debug)]
#[command(name = "pustaka")]
#[command(about = "A keyboard-driven storefront TUI for the Pustaka book shop", long_about = None)]
struct Args {
    /// Directory holding config.toml (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Start with this theme instead of the saved/system preference
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    pustaka_core::logging::init()?;

    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);
    tracing::info!("Config directory: {}", config_dir.display());
    let mut settings = load_settings(&config_dir);
    if let Some(theme) = args.theme {
        settings.ui.theme = Some(theme.into());
    }

    let theme_store = Box::new(FileThemeStore::new(&config_dir));
    pustaka_tui::run(settings, theme_store).await?;

    Ok(())
}
