//! User settings for PES Buddy
//!
//! Manages preferences such as the login retry budget, where canteen menus
//! are read from, and whether the audit log is written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PesBuddyPaths;
use crate::error::PesBuddyError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for PES Buddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Login attempts allowed per session before the process exits
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,

    /// Currency symbol used when printing canteen prices
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Directory holding the canteen menu files (defaults to `<base>/menus`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_dir: Option<PathBuf>,

    /// Whether state changes are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_login_attempts() -> u32 {
    3
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_login_attempts: default_max_login_attempts(),
            currency_symbol: default_currency(),
            menu_dir: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PesBuddyPaths) -> Result<Self, PesBuddyError> {
        read_json(paths.settings_file()).map_err(|e| {
            PesBuddyError::Config(format!("Failed to load settings file: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PesBuddyPaths) -> Result<(), PesBuddyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the directory menus are read from
    pub fn resolve_menu_dir(&self, paths: &PesBuddyPaths) -> PathBuf {
        match &self.menu_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => paths.base_dir().join(dir),
            None => paths.menu_dir(),
        }
    }
}
