//! Credential store backed by `users.txt`
//!
//! Records are `name, identifier` lines. The file is only ever appended to;
//! a missing file is an empty store.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{PesBuddyError, PesBuddyResult};
use crate::models::UserRecord;

use super::file_io::{append_line, read_lines};

/// Repository for registered users
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store over the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path to the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read every record, in file order
    pub fn load_all(&self) -> PesBuddyResult<Vec<UserRecord>> {
        let Some(lines) = read_lines(&self.path)? else {
            debug!(path = %self.path.display(), "credential store missing, treating as empty");
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match UserRecord::from_line(line) {
                Some(record) => records.push(record),
                None => warn!(line = index + 1, "skipping malformed credential record"),
            }
        }
        Ok(records)
    }

    /// Find the first record whose identifier matches exactly
    pub fn find_by_identifier(&self, identifier: &str) -> PesBuddyResult<Option<UserRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|record| record.identifier.as_str() == identifier))
    }

    /// Check whether an identifier is already registered
    pub fn exists(&self, identifier: &str) -> PesBuddyResult<bool> {
        Ok(self.find_by_identifier(identifier)?.is_some())
    }

    /// Append a new record
    ///
    /// Fails with `Duplicate` if the identifier is already present; the file
    /// is left untouched in that case.
    pub fn append(&self, record: &UserRecord) -> PesBuddyResult<()> {
        if self.exists(record.identifier.as_str())? {
            return Err(PesBuddyError::user_exists(record.name.clone()));
        }
        append_line(&self.path, &record.to_line())
    }
}
