//! Path management for PES Buddy
//!
//! Provides XDG-compliant path resolution for the credential store, menus,
//! settings and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `PESBUDDY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pesbuddy` or `~/.config/pesbuddy`
//! 3. Windows: `%APPDATA%\pesbuddy`

use std::path::PathBuf;

use crate::error::PesBuddyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PESBUDDY_DATA_DIR";

/// Manages all paths used by PES Buddy
#[derive(Debug, Clone)]
pub struct PesBuddyPaths {
    /// Base directory for all PES Buddy data
    base_dir: PathBuf,
}

impl PesBuddyPaths {
    /// Create a new PesBuddyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PesBuddyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PesBuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the credential store
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.txt")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the default directory holding canteen menu files
    pub fn menu_dir(&self) -> PathBuf {
        self.base_dir.join("menus")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PesBuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PesBuddyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.menu_dir())
            .map_err(|e| PesBuddyError::Io(format!("Failed to create menu directory: {}", e)))?;

        Ok(())
    }

    /// Check if PES Buddy has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PesBuddyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PesBuddyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pesbuddy"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PesBuddyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PesBuddyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pesbuddy"))
}
