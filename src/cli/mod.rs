//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the storage and
//! workflow layers.

pub mod audit;
pub mod session;

pub use audit::{format_audit_report, handle_audit_command, handle_stats_command};
pub use session::{handle_init_command, handle_session};
