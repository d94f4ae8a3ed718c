//! Append-only CSV audit log.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use parking_lot::Mutex;

use super::record::TIMESTAMP_FORMAT;
use crate::{AuditRecord, AuditSink, ReasonCode, SinkError, SinkErrorKind};

/// Header row written before the first record.
pub const HEADER: [&str; 3] = ["Timestamp", "Type", "Input"];

/// Default file name of the audit log.
pub const DEFAULT_LOG_FILE: &str = "security_log.csv";

/// Durable audit sink backed by a CSV file.
///
/// The file has the columns `Timestamp,Type,Input`. It is created, with its
/// header row, on the first rejected input; after that rows are only ever
/// appended. Fields containing commas, quotes or line breaks are quoted the
/// standard CSV way, so the raw input survives intact.
///
/// All file access goes through one lock, so concurrent sessions sharing a
/// `CsvAuditLog` never interleave partial rows.
///
/// # Example
///
/// ```no_run
/// use hero_shield::{AuditSink, CsvAuditLog, ReasonCode};
///
/// let log = CsvAuditLog::new("security_log.csv");
/// log.record(ReasonCode::Pii, "call me at 555-123-4567").unwrap();
///
/// for record in log.tail(5).unwrap() {
///     println!("{record}");
/// }
/// ```
#[derive(Debug)]
pub struct CsvAuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvAuditLog {
    /// Creates a log at `path`. Nothing touches the disk until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the last `n` records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the file exists but cannot be read or parsed.
    pub fn tail(&self, n: usize) -> Result<Vec<AuditRecord>, SinkError> {
        let mut records = self.records()?;
        let skip = records.len().saturating_sub(n);
        Ok(records.split_off(skip))
    }

    fn append(&self, record: &AuditRecord) -> Result<(), SinkError> {
        let _guard = self.lock.lock();

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        if needs_header {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        if needs_header {
            writer.write_record(HEADER)?;
        }
        writer.write_record([
            record.formatted_timestamp().as_str(),
            record.reason().log_label(),
            record.input(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}

impl AuditSink for CsvAuditLog {
    fn record(&self, reason: ReasonCode, raw_input: &str) -> Result<(), SinkError> {
        self.append(&AuditRecord::now(reason, raw_input))
    }

    fn records(&self) -> Result<Vec<AuditRecord>, SinkError> {
        let _guard = self.lock.lock();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        reader
            .records()
            .map(|row| {
                let row = row?;
                parse_row(&row)
            })
            .collect()
    }
}

fn parse_row(row: &csv::StringRecord) -> Result<AuditRecord, SinkError> {
    let (Some(timestamp), Some(label), Some(input)) = (row.get(0), row.get(1), row.get(2)) else {
        return Err(SinkError::with_message(
            SinkErrorKind::Encoding,
            format!("expected 3 fields, found {}", row.len()),
        ));
    };

    let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|e| {
        SinkError::with_message(SinkErrorKind::Encoding, format!("bad timestamp: {e}"))
    })?;
    let reason: ReasonCode = label
        .parse()
        .map_err(|e| SinkError::with_message(SinkErrorKind::Encoding, format!("{e}")))?;

    Ok(AuditRecord::new(timestamp, reason, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log_in(dir: &TempDir) -> CsvAuditLog {
        CsvAuditLog::new(dir.path().join("security_log.csv"))
    }

    #[test]
    fn no_file_until_first_violation() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        assert!(!log.path().exists());
        assert!(log.records().unwrap().is_empty());
        assert!(!log.path().exists());
    }

    #[test]
    fn first_append_writes_header() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        log.record(ReasonCode::Pii, "555-123-4567").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Timestamp,Type,Input"));
        let row = lines.next().unwrap();
        assert!(row.ends_with(",PII_ATTEMPT,555-123-4567"), "{row}");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn header_is_written_once() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);

        log.record(ReasonCode::Pii, "a@b.com").unwrap();
        log.record(ReasonCode::Profanity, "idiot").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches("Timestamp,Type,Input").count(), 1);
        assert_eq!(log.records().unwrap().len(), 2);
    }

    #[test]
    fn embedded_commas_quotes_and_newlines_round_trip() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        let nasty = "Batman, \"the\" hero\nsecond line";

        log.record(ReasonCode::Copyright, nasty).unwrap();

        let records = log.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].input(), nasty);
        assert_eq!(records[0].reason(), ReasonCode::Copyright);
    }

    #[test]
    fn empty_existing_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        File::create(log.path()).unwrap();

        log.record(ReasonCode::Profanity, "damn").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.starts_with("Timestamp,Type,Input"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let log = CsvAuditLog::new(dir.path().join("logs/admin/security_log.csv"));

        log.record(ReasonCode::Pii, "x@y.io").unwrap();
        assert_eq!(log.records().unwrap().len(), 1);
    }

    #[test]
    fn reads_rows_written_by_older_versions() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        fs::write(
            log.path(),
            "Timestamp,Type,Input\r\n\
             2025-11-02 16:04:11,PROFANITY_VIOLENCE,shut up\r\n\
             2025-11-02 16:05:40,COPYRIGHT_ATTEMPT,\"Iron Man, but cooler\"\r\n",
        )
        .unwrap();

        let records = log.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].formatted_timestamp(), "2025-11-02 16:04:11");
        assert_eq!(records[0].reason(), ReasonCode::Profanity);
        assert_eq!(records[1].input(), "Iron Man, but cooler");
    }

    #[test]
    fn malformed_rows_are_encoding_errors() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        fs::write(log.path(), "Timestamp,Type,Input\nyesterday,PII_ATTEMPT,x\n").unwrap();

        let err = log.records().unwrap_err();
        assert_eq!(err.kind(), SinkErrorKind::Encoding);
    }

    #[test]
    fn tail_returns_most_recent_records() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        for i in 0..7 {
            log.record(ReasonCode::Profanity, &format!("hate #{i}")).unwrap();
        }

        let tail = log.tail(5).unwrap();
        let inputs: Vec<_> = tail.iter().map(|r| r.input()).collect();
        assert_eq!(inputs, vec!["hate #2", "hate #3", "hate #4", "hate #5", "hate #6"]);

        assert_eq!(log.tail(100).unwrap().len(), 7);
        assert!(log.tail(0).unwrap().is_empty());
    }

    #[test]
    fn unwritable_location_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let log = CsvAuditLog::new(blocker.join("security_log.csv"));

        let err = log.record(ReasonCode::Pii, "555-123-4567").unwrap_err();
        assert_eq!(err.kind(), SinkErrorKind::Io);
    }
}
