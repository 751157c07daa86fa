//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and the starter
//! canteen menus.

use crate::config::{paths::PesBuddyPaths, settings::Settings};
use crate::error::PesBuddyError;
use crate::models::Canteen;

use super::menus::MenuRepository;

/// Initialize storage for a fresh installation
///
/// Writes settings only when none exist yet, and seeds any missing menu
/// file. Returns the canteens whose menus were created.
pub fn initialize_storage(
    paths: &PesBuddyPaths,
    settings: &Settings,
) -> Result<Vec<Canteen>, PesBuddyError> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    MenuRepository::new(settings.resolve_menu_dir(paths)).seed_defaults()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &PesBuddyPaths) -> bool {
    !paths.is_initialized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PesBuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(needs_initialization(&paths));

        let seeded = initialize_storage(&paths, &Settings::default()).unwrap();

        assert_eq!(seeded.len(), 4);
        assert!(!needs_initialization(&paths));
        assert!(paths.menu_dir().join("skm_menu.txt").exists());
    }

    #[test]
    fn test_initialize_twice_is_harmless() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PesBuddyPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, &Settings::default()).unwrap();
        let seeded = initialize_storage(&paths, &Settings::default()).unwrap();
        assert!(seeded.is_empty());
    }
}
