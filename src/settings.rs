//! User settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The two-valued visual mode flag persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,

    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

/// Read/write access to the persisted theme flag. Reading an absent value
/// yields the default; writes take effect immediately.
pub trait PreferenceStore {
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
}

/// Store backed by settings.json on disk.
pub struct DiskPreferences {
    data_dir: PathBuf,
    settings: Settings,
}

impl DiskPreferences {
    pub fn new(data_dir: PathBuf, settings: Settings) -> Self {
        Self { data_dir, settings }
    }

    pub fn set_window_geometry(
        &mut self,
        pos: Option<(f32, f32)>,
        size: Option<(f32, f32)>,
    ) {
        self.settings.window_x = pos.map(|p| p.0);
        self.settings.window_y = pos.map(|p| p.1);
        self.settings.window_w = size.map(|s| s.0);
        self.settings.window_h = size.map(|s| s.1);
    }

    pub fn save(&self) {
        self.settings.save(&self.data_dir);
    }
}

impl PreferenceStore for DiskPreferences {
    fn theme(&self) -> Theme {
        self.settings.theme
    }

    fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.settings.save(&self.data_dir);
    }
}

/// Flip the stored theme and return the newly applied value.
pub fn toggle_theme(store: &mut dyn PreferenceStore) -> Theme {
    let next = store.theme().flipped();
    store.set_theme(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemoryPreferences {
        theme: Option<Theme>,
        writes: usize,
    }

    impl MemoryPreferences {
        fn new(theme: Option<Theme>) -> Self {
            Self { theme, writes: 0 }
        }
    }

    impl PreferenceStore for MemoryPreferences {
        fn theme(&self) -> Theme {
            self.theme.unwrap_or_default()
        }

        fn set_theme(&mut self, theme: Theme) {
            self.theme = Some(theme);
            self.writes += 1;
        }
    }

    #[test]
    fn absent_theme_defaults_to_light() {
        let store = MemoryPreferences::new(None);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryPreferences::new(None);
        assert_eq!(toggle_theme(&mut store), Theme::Dark);
        assert_eq!(store.theme, Some(Theme::Dark));
        assert_eq!(toggle_theme(&mut store), Theme::Light);
        assert_eq!(store.theme, Some(Theme::Light));
        assert_eq!(store.writes, 2);
    }

    #[test]
    fn toggle_parity_over_many_clicks() {
        for start in [Theme::Light, Theme::Dark] {
            for clicks in 0..7 {
                let mut store = MemoryPreferences::new(Some(start));
                let mut current = store.theme();
                for _ in 0..clicks {
                    current = toggle_theme(&mut store);
                }
                let expected = if clicks % 2 == 0 { start } else { start.flipped() };
                assert_eq!(current, expected);
                assert_eq!(store.theme(), expected);
            }
        }
    }

    #[test]
    fn theme_serializes_as_lowercase_label() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }

    #[test]
    fn settings_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.window_w = Some(900.0);
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.window_w, Some(900.0));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.window_x, None);
    }

    #[test]
    fn unrecognized_label_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"theme": "sepia"}"#,
        )
        .unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn disk_store_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let mut store =
            DiskPreferences::new(dir.path().to_path_buf(), Settings::default());
        store.set_theme(Theme::Dark);

        // A fresh load sees the new value without an explicit save.
        let reloaded = Settings::load(dir.path());
        assert_eq!(reloaded.theme, Theme::Dark);
    }
}
