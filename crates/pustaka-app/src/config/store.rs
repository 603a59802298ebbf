//! Narrow persistence boundary for the theme preference.
//!
//! The theme is the only value that survives a restart. Core logic
//! depends on this trait, not on where the value lives; the file-backed
//! implementation keeps it as one key in the settings file.

use std::path::PathBuf;

use pustaka_core::prelude::*;

use super::settings::{default_config_dir, load_settings, save_settings};
use super::types::Theme;

/// External collaborator holding the persisted theme preference.
pub trait ThemeStore {
    /// The stored preference, if the user ever chose one.
    fn load_theme(&self) -> Option<Theme>;

    /// Persist a choice, overwriting any previous one.
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}

/// Theme store backed by the settings file.
#[derive(Debug)]
pub struct FileThemeStore {
    dir: PathBuf,
}

impl FileThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at the standard config location.
    pub fn default_location() -> Self {
        Self::new(default_config_dir())
    }
}

impl ThemeStore for FileThemeStore {
    fn load_theme(&self) -> Option<Theme> {
        load_settings(&self.dir).ui.theme
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        // Re-read before writing so an edited icons setting is not lost.
        let mut settings = load_settings(&self.dir);
        settings.ui.theme = Some(theme);
        save_settings(&self.dir, &settings)
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl ThemeStore for MemoryThemeStore {
    fn load_theme(&self) -> Option<Theme> {
        self.theme
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{IconMode, Settings};

    #[test]
    fn test_file_store_empty_dir_has_no_theme() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path());
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn test_file_store_round_trips_theme() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::new(dir.path());

        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Light));

        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_file_store_preserves_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.ui.icons = IconMode::NerdFonts;
        save_settings(dir.path(), &settings).unwrap();

        let mut store = FileThemeStore::new(dir.path());
        store.save_theme(Theme::Light).unwrap();

        let reloaded = load_settings(dir.path());
        assert_eq!(reloaded.ui.icons, IconMode::NerdFonts);
        assert_eq!(reloaded.ui.theme, Some(Theme::Light));
    }

    #[test]
    fn test_memory_store_round_trips() {
        let mut store = MemoryThemeStore::default();
        assert_eq!(store.load_theme(), None);
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Dark));
    }
}
