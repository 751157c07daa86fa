//! Append-only audit log
//!
//! One JSON object per line, appended through the shared line helpers so
//! a torn final line never merges with the next entry.

use std::path::PathBuf;

use tracing::warn;

use crate::error::PesBuddyResult;
use crate::storage::file_io::{append_line, read_lines};

use super::entry::AuditEntry;

/// JSONL audit log at a fixed path
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &AuditEntry) -> PesBuddyResult<()> {
        let json = serde_json::to_string(entry)?;
        append_line(&self.log_path, &json)
    }

    /// Every readable entry, oldest first
    ///
    /// Lines that do not decode are skipped with a warning.
    pub fn read_all(&self) -> PesBuddyResult<Vec<AuditEntry>> {
        let Some(lines) = read_lines(&self.log_path)? else {
            return Ok(Vec::new());
        };

        Ok(lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(line = index + 1, "skipping unreadable audit entry: {}", e);
                    None
                }
            })
            .collect())
    }

    /// The last `count` entries matching `filter`, oldest first
    pub fn read_recent_where<F>(&self, count: usize, filter: F) -> PesBuddyResult<Vec<AuditEntry>>
    where
        F: Fn(&AuditEntry) -> bool,
    {
        let mut entries: Vec<AuditEntry> =
            self.read_all()?.into_iter().filter(|e| filter(e)).collect();
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> PesBuddyResult<Vec<AuditEntry>> {
        self.read_recent_where(count, |_| true)
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::AuditEvent;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::new(AuditEvent::UserRegistered, Some("Asha"));

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, AuditEvent::UserRegistered);
        assert_eq!(entries[0].user.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::new(AuditEvent::OrderPlaced, None)
                .with_detail(&json!({ "index": i }));
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].detail, Some(json!({ "index": 7 })));
        assert_eq!(recent[2].detail, Some(json!({ "index": 9 })));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_torn_line_is_skipped() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::new(AuditEvent::UserRegistered, Some("Asha")))
            .unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| std::io::Write::write_all(&mut f, b"{\"timestamp\":"))
            .unwrap();
        logger
            .log(&AuditEntry::new(AuditEvent::LoginSucceeded, Some("Asha")))
            .unwrap();

        let events: Vec<_> = logger.read_all().unwrap().into_iter().map(|e| e.event).collect();
        assert_eq!(events, vec![AuditEvent::UserRegistered, AuditEvent::LoginSucceeded]);
    }

    #[test]
    fn test_read_recent_where_filters_before_limiting() {
        let (logger, _temp) = create_test_logger();
        for user in ["Asha", "Ravi", "Asha", "Ravi", "Ravi"] {
            logger
                .log(&AuditEntry::new(AuditEvent::OrderPlaced, Some(user)))
                .unwrap();
        }

        let asha = logger
            .read_recent_where(10, |e| e.user.as_deref() == Some("Asha"))
            .unwrap();
        assert_eq!(asha.len(), 2);

        let last_ravi = logger
            .read_recent_where(1, |e| e.user.as_deref() == Some("Ravi"))
            .unwrap();
        assert_eq!(last_ravi.len(), 1);
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::new(AuditEvent::LoginSucceeded, Some("Ravi")))
            .unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
