//! Storage layer for PES Buddy
//!
//! Flat line-oriented files: the credential store, the canteen menus and
//! the audit log, plus atomic JSON writes for settings.

pub mod file_io;
pub mod init;
pub mod menus;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use menus::MenuRepository;
pub use users::CredentialStore;

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::PesBuddyPaths, settings::Settings};
use crate::error::PesBuddyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PesBuddyPaths,
    pub users: CredentialStore,
    pub menus: MenuRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PesBuddyPaths, settings: &Settings) -> Result<Self, PesBuddyError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            users: CredentialStore::new(paths.users_file()),
            menus: MenuRepository::new(settings.resolve_menu_dir(&paths)),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PesBuddyPaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an audit entry
    ///
    /// A failed audit write is reported as a warning and never interrupts
    /// the workflow that triggered it.
    pub fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(event = %entry.event, "failed to write audit entry: {}", e);
            }
        }
    }
}
