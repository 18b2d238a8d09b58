//! Path management for libris
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `LIBRIS_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/libris-cli` or `~/.config/libris-cli`
//! 3. Windows: `%APPDATA%\libris-cli`

use std::path::PathBuf;

use crate::error::LibrisError;

/// Manages all paths used by libris
#[derive(Debug, Clone)]
pub struct LibrisPaths {
    /// Base directory for all libris data
    base_dir: PathBuf,
}

impl LibrisPaths {
    /// Create a new LibrisPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LibrisError> {
        let base_dir = if let Ok(custom) = std::env::var("LIBRIS_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LibrisPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/libris-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/libris-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the snapshot file holding the full library state
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_dir().join("library.json")
    }

    /// Get the path to the circulation log
    pub fn circulation_log(&self) -> PathBuf {
        self.base_dir.join("circulation.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), LibrisError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LibrisError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LibrisError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LibrisError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| LibrisError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("libris-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LibrisError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LibrisError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("libris-cli"))
}
