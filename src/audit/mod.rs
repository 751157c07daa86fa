//! Audit logging for PES Buddy
//!
//! Records registrations, login outcomes, bookings and orders in an
//! append-only JSON-lines file.
//!
//! - `AuditEntry`: one event with timestamp, user name and an optional
//!   JSON payload.
//! - `AuditLogger`: appends entries and reads them back for the `audit`
//!   command.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
