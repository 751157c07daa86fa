//! Session gate
//!
//! Registration and bounded-retry login on top of the credential store.
//!
//! Known quirk: login checks the identifier alone. Any registered identifier
//! is accepted with whatever name is typed alongside it, and that name is
//! the one the session greets.

use serde_json::json;

use crate::audit::{AuditEntry, AuditEvent};
use crate::error::{PesBuddyError, PesBuddyResult};
use crate::models::{Identifier, UserRecord};
use crate::storage::Storage;

/// Result of a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created(UserRecord),
    AlreadyExists,
}

/// Result of one login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The identifier is registered; `name` is the name that was entered
    Authenticated { name: String },
    /// Wrong identifier, with attempts still remaining
    Rejected { attempts_left: u32 },
    /// No attempts remain
    LockedOut,
}

/// Registration and login against the credential store
pub struct SessionGate<'a> {
    storage: &'a Storage,
    attempts_left: u32,
}

impl<'a> SessionGate<'a> {
    /// Create a gate allowing `max_attempts` logins for this session
    pub fn new(storage: &'a Storage, max_attempts: u32) -> Self {
        Self {
            storage,
            attempts_left: max_attempts,
        }
    }

    /// Login attempts still available
    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Register a new user
    ///
    /// Uniqueness is by identifier only. On success exactly one record is
    /// appended to the store.
    pub fn register(&self, name: &str, identifier: &Identifier) -> PesBuddyResult<RegisterOutcome> {
        UserRecord::validate_name(name).map_err(PesBuddyError::Validation)?;

        if self.storage.users.exists(identifier.as_str())? {
            self.storage
                .record(AuditEntry::new(AuditEvent::RegistrationRejected, Some(name)));
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let record = UserRecord::new(name, identifier.clone());
        self.storage.users.append(&record)?;
        self.storage
            .record(AuditEntry::new(AuditEvent::UserRegistered, Some(name)));

        Ok(RegisterOutcome::Created(record))
    }

    /// Attempt a login, consuming one attempt
    ///
    /// Never writes to the credential store.
    pub fn login(&mut self, name: &str, identifier: &str) -> PesBuddyResult<LoginOutcome> {
        if self.attempts_left == 0 {
            return Ok(LoginOutcome::LockedOut);
        }
        self.attempts_left -= 1;

        if self.storage.users.exists(identifier)? {
            self.storage
                .record(AuditEntry::new(AuditEvent::LoginSucceeded, Some(name)));
            return Ok(LoginOutcome::Authenticated {
                name: name.to_string(),
            });
        }

        self.storage.record(
            AuditEntry::new(AuditEvent::LoginFailed, Some(name))
                .with_detail(&json!({ "attempts_left": self.attempts_left })),
        );

        if self.attempts_left == 0 {
            self.storage
                .record(AuditEntry::new(AuditEvent::LoginLockedOut, Some(name)));
            Ok(LoginOutcome::LockedOut)
        } else {
            Ok(LoginOutcome::Rejected {
                attempts_left: self.attempts_left,
            })
        }
    }
}
