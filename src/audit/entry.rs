//! Audit entry data structures
//!
//! Defines the events worth recording and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State-changing events recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new user record was appended to the credential store
    UserRegistered,
    /// Registration was refused because the identifier is taken
    RegistrationRejected,
    LoginSucceeded,
    LoginFailed,
    /// All login attempts were used up
    LoginLockedOut,
    ScooterBooked,
    OrderPlaced,
    /// An ordering session finished and its summary was shown
    OrderSessionClosed,
    ExpenseSummarized,
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AuditEvent::UserRegistered => "USER_REGISTERED",
            AuditEvent::RegistrationRejected => "REGISTRATION_REJECTED",
            AuditEvent::LoginSucceeded => "LOGIN_SUCCEEDED",
            AuditEvent::LoginFailed => "LOGIN_FAILED",
            AuditEvent::LoginLockedOut => "LOGIN_LOCKED_OUT",
            AuditEvent::ScooterBooked => "SCOOTER_BOOKED",
            AuditEvent::OrderPlaced => "ORDER_PLACED",
            AuditEvent::OrderSessionClosed => "ORDER_SESSION_CLOSED",
            AuditEvent::ExpenseSummarized => "EXPENSE_SUMMARIZED",
        };
        write!(f, "{}", label)
    }
}

/// A single audit log entry
///
/// Identifiers are password-equivalent and are never written here; entries
/// name the user by display name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: AuditEvent,

    /// Display name of the user involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Event-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(event: AuditEvent, user: Option<&str>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            user: user.map(str::to_string),
            detail: None,
        }
    }

    /// Attach a serializable payload
    pub fn with_detail<T: Serialize>(mut self, detail: &T) -> Self {
        self.detail = serde_json::to_value(detail).ok();
        self
    }

    /// Format as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event
        );
        if let Some(user) = &self.user {
            line.push_str(&format!(" user={}", user));
        }
        if let Some(detail) = &self.detail {
            line.push_str(&format!(" {}", detail));
        }
        line
    }
}
