//! Audit log and activity CLI commands

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::display::format_activity_stats;
use crate::error::PesBuddyResult;
use crate::services::ActivityStats;
use crate::storage::Storage;

/// Render audit entries, oldest first, one per line
pub fn format_audit_report(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

/// Print the most recent `limit` audit entries, optionally for one user
pub fn handle_audit_command(storage: &Storage, limit: usize, user: Option<&str>) -> PesBuddyResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent_where(limit, |entry| {
        user.map_or(true, |name| entry.user.as_deref() == Some(name))
    })?;
    print!("{}", format_audit_report(&entries));
    Ok(())
}

/// Print booking and ordering totals, optionally for one user
pub fn handle_stats_command(storage: &Storage, settings: &Settings, user: Option<&str>) -> PesBuddyResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled in settings; no activity recorded.");
        return Ok(());
    };

    let stats = ActivityStats::from_entries(&logger.read_all()?, user);
    print!("{}", format_activity_stats(&stats, user, &settings.currency_symbol));
    Ok(())
}
