//! User settings for libris
//!
//! A small JSON settings file alongside the data directory. All fields carry
//! serde defaults so older config files keep loading as fields are added.

use serde::{Deserialize, Serialize};

use super::paths::LibrisPaths;
use crate::error::LibrisError;
use crate::storage::{read_json, write_json_atomic};

/// User settings for libris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Save the snapshot automatically when the process exits
    #[serde(default = "default_true")]
    pub autosave_on_exit: bool,

    /// Record circulation events to the append-only log
    #[serde(default = "default_true")]
    pub circulation_log_enabled: bool,

    /// Default number of entries shown by `libris history`
    #[serde(default = "default_history_limit")]
    pub history_default_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_history_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            autosave_on_exit: true,
            circulation_log_enabled: true,
            history_default_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &LibrisPaths) -> Result<Self, LibrisError> {
        let path = paths.settings_file();

        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibrisPaths) -> Result<(), LibrisError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.autosave_on_exit);
        assert!(settings.circulation_log_enabled);
        assert_eq!(settings.history_default_limit, 20);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.settings_file().exists());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert!(settings.autosave_on_exit);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.autosave_on_exit = false;
        settings.history_default_limit = 5;
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert!(!reloaded.autosave_on_exit);
        assert_eq!(reloaded.history_default_limit, 5);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), r#"{"schema_version": 1}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.autosave_on_exit);
        assert_eq!(settings.history_default_limit, 20);
    }
}
