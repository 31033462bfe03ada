//! Persisted player settings
//!
//! Settings live in a JSON file under the platform config directory.
//! Command-line flags override whatever is stored.

use crate::core::{Mode, WORD_LENGTHS};
use crate::game::DEFAULT_MAX_ATTEMPTS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub hard_mode: bool,
    pub max_attempts: usize,
    pub word_length: usize,
    /// Puzzle file to use instead of the embedded rotation
    pub puzzles: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hard_mode: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: WORD_LENGTHS[0],
            puzzles: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_hard(self.hard_mode)
    }

    /// Replace out-of-range values with defaults
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !WORD_LENGTHS.contains(&self.word_length) {
            log::warn!(
                "ignoring stored word length {}, using {}",
                self.word_length,
                defaults.word_length
            );
            self.word_length = defaults.word_length;
        }
        if self.max_attempts == 0 {
            self.max_attempts = defaults.max_attempts;
        }
        self
    }
}

pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "seqword") {
            pd.config_dir().join("settings.json")
        } else {
            PathBuf::from("seqword_settings.json")
        };
        Self { path }
    }

    #[must_use]
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Settings>(&bytes) {
                Ok(settings) => return settings.sanitized(),
                Err(e) => log::warn!("ignoring unreadable settings {}: {e}", self.path.display()),
            },
            Err(e) => log::debug!("no settings at {}: {e}", self.path.display()),
        }
        Settings::default()
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_settings() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("settings.json"));
        let settings = Settings::default();
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn save_and_load_custom_settings() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("nested/settings.json"));
        let settings = Settings {
            hard_mode: true,
            max_attempts: 4,
            word_length: 8,
            puzzles: Some(PathBuf::from("/tmp/puzzles.txt")),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "hard_mode": true }"#).unwrap();

        let loaded = FileSettingsStore::with_path(&path).load();
        assert!(loaded.hard_mode);
        assert_eq!(loaded.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(loaded.mode(), Mode::Hard);
    }

    #[test]
    fn invalid_values_are_sanitized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "word_length": 5, "max_attempts": 0 }"#).unwrap();

        let loaded = FileSettingsStore::with_path(&path).load();
        assert_eq!(loaded.word_length, 6);
        assert_eq!(loaded.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileSettingsStore::with_path(&path).load(), Settings::default());
    }
}
