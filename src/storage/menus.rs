//! Canteen menu files
//!
//! Each canteen's menu lives in its own text file under the menu directory.
//! Menus are read fresh on every view.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{PesBuddyError, PesBuddyResult};
use crate::models::{Canteen, MenuItem, MAX_MENU_ITEMS};

use super::file_io::read_lines;

/// Repository for canteen menus
pub struct MenuRepository {
    dir: PathBuf,
}

impl MenuRepository {
    /// Create a repository reading from `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the menu directory
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of a canteen's menu file
    pub fn menu_path(&self, canteen: Canteen) -> PathBuf {
        self.dir.join(canteen.menu_file())
    }

    /// Load a canteen's menu
    ///
    /// Returns `NotFound` when the file is missing. Lines without a space are
    /// skipped and reading stops after `MAX_MENU_ITEMS` items.
    pub fn load(&self, canteen: Canteen) -> PesBuddyResult<Vec<MenuItem>> {
        let path = self.menu_path(canteen);
        let lines = read_lines(&path)?
            .ok_or_else(|| PesBuddyError::menu_not_found(canteen.menu_file()))?;

        let mut items = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            match MenuItem::parse_line(line) {
                Some(item) => items.push(item),
                None => debug!(canteen = %canteen, line = index + 1, "skipping menu line without price"),
            }
            if items.len() >= MAX_MENU_ITEMS {
                if index + 1 < lines.len() {
                    warn!(canteen = %canteen, "menu truncated at {} items", MAX_MENU_ITEMS);
                }
                break;
            }
        }
        Ok(items)
    }

    /// Write the starter menu for every canteen whose file is missing
    ///
    /// Existing files are never overwritten. Returns the canteens seeded.
    pub fn seed_defaults(&self) -> PesBuddyResult<Vec<Canteen>> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            PesBuddyError::Storage(format!(
                "Failed to create menu directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut seeded = Vec::new();
        for canteen in Canteen::all() {
            let path = self.menu_path(canteen);
            if path.exists() {
                continue;
            }

            let mut contents = String::new();
            for item in default_menu(canteen) {
                contents.push_str(&item.to_line());
                contents.push('\n');
            }
            fs::write(&path, contents).map_err(|e| {
                PesBuddyError::Storage(format!("Failed to write {}: {}", path.display(), e))
            })?;
            seeded.push(canteen);
        }
        Ok(seeded)
    }
}

/// Starter catalogue written by `init`
fn default_menu(canteen: Canteen) -> Vec<MenuItem> {
    let items: &[(&str, i64)] = match canteen {
        Canteen::Skm => &[
            ("Veg Puff", 25),
            ("Chicken Puffs", 30),
            ("Samosa", 20),
            ("Momos", 35),
            ("Peri Peri Maggi", 40),
            ("Paneer Roll", 30),
        ],
        Canteen::Gjbc => &[
            ("Masala Dosa", 70),
            ("Idli Vada", 60),
            ("Poori Sagu", 65),
            ("Roti with Brinjal Curry", 80),
            ("Khara Bath + Kesari Bath", 55),
        ],
        Canteen::BeBloc => &[
            ("Soups", 80),
            ("Manchurians", 120),
            ("Butter Rotis", 50),
            ("Biryanis", 140),
            ("PESU Special Meals", 160),
        ],
        Canteen::Hornbill => &[
            ("Cheesecakes", 100),
            ("Noodles", 120),
            ("Ice Creams", 100),
            ("Milkshakes", 90),
            ("PESU Chinese Combo", 160),
        ],
    };

    items
        .iter()
        .map(|(name, price)| MenuItem::new(*name, *price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_repo() -> (MenuRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = MenuRepository::new(temp_dir.path().join("menus"));
        (repo, temp_dir)
    }

    #[test]
    fn test_missing_menu_is_not_found() {
        let (repo, _temp) = create_repo();
        let err = repo.load(Canteen::Skm).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_parses_and_skips() {
        let (repo, _temp) = create_repo();
        fs::create_dir_all(repo.dir()).unwrap();
        fs::write(
            repo.menu_path(Canteen::Gjbc),
            "Veg Puff 25\nNoPrice\r\nChai free\nMasala Dosa 70",
        )
        .unwrap();

        let items = repo.load(Canteen::Gjbc).unwrap();
        assert_eq!(
            items,
            vec![
                MenuItem::new("Veg Puff", 25),
                MenuItem::new("Chai", 0),
                MenuItem::new("Masala Dosa", 70),
            ]
        );
    }

    #[test]
    fn test_load_caps_item_count() {
        let (repo, _temp) = create_repo();
        fs::create_dir_all(repo.dir()).unwrap();
        let contents: String = (0..150).map(|i| format!("Item{} {}\n", i, i)).collect();
        fs::write(repo.menu_path(Canteen::Hornbill), contents).unwrap();

        let items = repo.load(Canteen::Hornbill).unwrap();
        assert_eq!(items.len(), MAX_MENU_ITEMS);
        assert_eq!(items.last().unwrap().name, "Item99");
    }

    #[test]
    fn test_seed_defaults_does_not_overwrite() {
        let (repo, _temp) = create_repo();
        fs::create_dir_all(repo.dir()).unwrap();
        fs::write(repo.menu_path(Canteen::Skm), "House Special 99\n").unwrap();

        let seeded = repo.seed_defaults().unwrap();
        assert_eq!(seeded.len(), 3);
        assert!(!seeded.contains(&Canteen::Skm));

        let skm = repo.load(Canteen::Skm).unwrap();
        assert_eq!(skm, vec![MenuItem::new("House Special", 99)]);
        assert_eq!(repo.load(Canteen::Gjbc).unwrap()[0].name, "Masala Dosa");
    }
}
