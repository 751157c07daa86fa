//! Interactive session and first-run setup

use tracing::info;

use crate::config::{paths::PesBuddyPaths, settings::Settings};
use crate::error::PesBuddyResult;
use crate::prompt::ConsoleIo;
use crate::storage::{init::needs_initialization, initialize_storage, Storage};
use crate::workflows::{self, SessionEnd};

/// Create settings and seed any missing menus, reporting what was done
pub fn handle_init_command(paths: &PesBuddyPaths, settings: &Settings) -> PesBuddyResult<()> {
    println!("Initializing PES Buddy at: {}", paths.base_dir().display());
    let seeded = initialize_storage(paths, settings)?;
    println!("Initialization complete!");

    if seeded.is_empty() {
        println!("All canteen menus already present; nothing was overwritten.");
    } else {
        println!();
        println!("Starter menus created for:");
        for canteen in seeded {
            println!("  - {}", canteen);
        }
    }
    println!();
    println!("Menus live in: {}", settings.resolve_menu_dir(paths).display());
    Ok(())
}

/// Run the interactive session on the terminal
///
/// A fresh installation is initialized first so the canteen menus exist.
pub fn handle_session(paths: &PesBuddyPaths, settings: &Settings) -> PesBuddyResult<SessionEnd> {
    if needs_initialization(paths) {
        let seeded = initialize_storage(paths, settings)?;
        info!(menus = seeded.len(), "first run, storage initialized");
    }

    let storage = Storage::new(paths.clone(), settings)?;
    let mut io = ConsoleIo::stdio();
    let end = workflows::run(&mut io, &storage, settings)?;
    info!(?end, "session ended");
    Ok(end)
}
