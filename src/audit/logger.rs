//! Append-only circulation log
//!
//! Writes each circulation entry as a single JSON line, flushed immediately.
//! Log failures are reported by the caller but never fail the operation that
//! triggered them.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{LibrisError, LibrisResult};

use super::entry::LogEntry;

/// Handles writing circulation entries to the log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one entry.
pub struct CirculationLog {
    log_path: PathBuf,
}

impl CirculationLog {
    /// Create a log that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry, flushing immediately for durability
    pub fn record(&self, entry: &LogEntry) -> LibrisResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LibrisError::Io(format!("Failed to open circulation log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| LibrisError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LibrisError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| LibrisError::Io(format!("Failed to flush circulation log: {}", e)))?;

        Ok(())
    }

    /// Read all entries in chronological order (oldest first)
    pub fn read_all(&self) -> LibrisResult<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LibrisError::Io(format!("Failed to open circulation log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                LibrisError::Io(format!("Failed to read log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line).map_err(|e| {
                LibrisError::Json(format!(
                    "Failed to parse log entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> LibrisResult<Vec<LogEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> LibrisResult<usize> {
        Ok(self.read_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::entry::Operation;
    use super::*;
    use crate::models::{Book, BookId, MemberId};
    use tempfile::TempDir;

    fn log_in(temp_dir: &TempDir) -> CirculationLog {
        CirculationLog::new(temp_dir.path().join("circulation.log"))
    }

    #[test]
    fn test_empty_log_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let log = log_in(&temp_dir);

        assert!(log.read_all().unwrap().is_empty());
        assert_eq!(log.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_record_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let log = log_in(&temp_dir);

        let book = Book::new(BookId::from_raw(1), "Dune", "Herbert");
        log.record(&LogEntry::add_book(&book)).unwrap();
        log.record(&LogEntry::borrow(MemberId::from_raw(1), &book))
            .unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::AddBook);
        assert_eq!(entries[1].operation, Operation::Borrow);
    }

    #[test]
    fn test_read_recent_takes_tail() {
        let temp_dir = TempDir::new().unwrap();
        let log = log_in(&temp_dir);

        for i in 1..=5 {
            let book = Book::new(BookId::from_raw(i), format!("Book {i}"), "Author");
            log.record(&LogEntry::add_book(&book)).unwrap();
        }

        let recent = log.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].book_id, Some(BookId::from_raw(4)));
        assert_eq!(recent[1].book_id, Some(BookId::from_raw(5)));
    }

    #[test]
    fn test_read_recent_more_than_available() {
        let temp_dir = TempDir::new().unwrap();
        let log = log_in(&temp_dir);

        let book = Book::new(BookId::from_raw(1), "Dune", "Herbert");
        log.record(&LogEntry::add_book(&book)).unwrap();

        assert_eq!(log.read_recent(100).unwrap().len(), 1);
    }
}
