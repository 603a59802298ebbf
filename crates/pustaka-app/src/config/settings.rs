//! Settings parser for the pustaka config.toml

use super::types::{Settings, Theme};
use pustaka_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "pustaka";

/// Directory holding the config file (`<config-dir>/pustaka`).
pub fn default_config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

// ─────────────────────────────────────────────────────────────────────────────
// System Preference Probe
// ─────────────────────────────────────────────────────────────────────────────

/// Guess the terminal's color scheme.
///
/// Terminals have no `prefers-color-scheme`; the closest convention is
/// the `COLORFGBG` variable ("<fg>;<bg>", ANSI color numbers). A light
/// background (7 or 15) maps to the light theme; anything else, or an
/// absent/unparseable value, maps to dark.
pub fn detect_system_theme() -> Theme {
    match std::env::var("COLORFGBG") {
        Ok(value) => theme_from_colorfgbg(&value),
        Err(_) => Theme::Dark,
    }
}

fn theme_from_colorfgbg(value: &str) -> Theme {
    let background = value.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok());
    match background {
        Some(7) | Some(15) => Theme::Light,
        _ => Theme::Dark,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `<dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Save settings to `<dir>/config.toml`
///
/// Uses atomic write (temp file + rename) for safety.
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    let temp_path = dir.join(".config.toml.tmp");

    let header = "# Pustaka configuration\n# theme = \"dark\" | \"light\"  (absent = follow terminal)\n\n";
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    let full_content = format!("{}{}", header, content);

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::IconMode;
    use serial_test::serial;

    #[test]
    fn test_load_settings_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.ui.theme, None);
    }

    #[test]
    fn test_load_settings_bad_toml_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "ui = not toml").unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.ui.theme, None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.ui.theme = Some(Theme::Dark);
        settings.ui.icons = IconMode::NerdFonts;

        save_settings(dir.path(), &settings).unwrap();
        let loaded = load_settings(dir.path());

        assert_eq!(loaded.ui.theme, Some(Theme::Dark));
        assert_eq!(loaded.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper").join("still");
        save_settings(&nested, &Settings::default()).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn test_theme_from_colorfgbg_values() {
        assert_eq!(theme_from_colorfgbg("0;15"), Theme::Light);
        assert_eq!(theme_from_colorfgbg("15;7"), Theme::Light);
        assert_eq!(theme_from_colorfgbg("15;0"), Theme::Dark);
        assert_eq!(theme_from_colorfgbg("garbage"), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(""), Theme::Dark);
    }

    #[test]
    #[serial]
    fn test_detect_system_theme_reads_env() {
        std::env::set_var("COLORFGBG", "0;15");
        assert_eq!(detect_system_theme(), Theme::Light);

        std::env::set_var("COLORFGBG", "15;0");
        assert_eq!(detect_system_theme(), Theme::Dark);

        std::env::remove_var("COLORFGBG");
        assert_eq!(detect_system_theme(), Theme::Dark);
    }
}
