//! File I/O utilities
//!
//! JSON documents are written atomically. Line-oriented record files are
//! read whole and appended one record at a time.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PesBuddyError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, PesBuddyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PesBuddyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PesBuddyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must sit in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| PesBuddyError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PesBuddyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PesBuddyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Read a text file as lines, returning `None` if the file doesn't exist
///
/// Accepts `\n` and `\r\n` terminators and a final line without one.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, PesBuddyError> {
    let path = path.as_ref();

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PesBuddyError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(Some(
        text.lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect(),
    ))
}

/// Append one line to a text file, creating it if needed
///
/// If the existing file does not end with a newline one is inserted first,
/// so a truncated last record never merges with the new one.
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), PesBuddyError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PesBuddyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let needs_separator = match fs::read(path) {
        Ok(existing) => existing.last().is_some_and(|&b| b != b'\n'),
        Err(_) => false,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    if needs_separator {
        writeln!(file)
            .map_err(|e| PesBuddyError::Storage(format!("Failed to write record: {}", e)))?;
    }

    writeln!(file, "{}", line)
        .map_err(|e| PesBuddyError::Storage(format!("Failed to write record: {}", e)))?;

    file.flush()
        .map_err(|e| PesBuddyError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_lines(temp_dir.path().join("absent.txt"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_read_lines_tolerates_crlf_and_unterminated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");
        fs::write(&path, "first\r\nsecond\nthird").unwrap();

        let lines = read_lines(&path).unwrap().unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_append_line_repairs_missing_terminator() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.txt");
        fs::write(&path, "one").unwrap();

        append_line(&path, "two").unwrap();
        append_line(&path, "three").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_append_line_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("records.txt");

        append_line(&path, "only").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "only\n");
    }
}
