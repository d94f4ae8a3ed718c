use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{AuditRecord, ReasonCode};

/// Error returned when an audit sink cannot record or list entries.
///
/// # Examples
///
/// ```
/// use hero_shield::{SinkError, SinkErrorKind};
///
/// let error = SinkError::with_message(SinkErrorKind::Io, "disk full");
/// assert_eq!(error.kind(), SinkErrorKind::Io);
/// assert_eq!(error.message(), Some("disk full"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    kind: SinkErrorKind,
    message: Option<String>,
}

impl SinkError {
    /// Creates a new sink error with the specified kind.
    pub fn new(kind: SinkErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new sink error with a custom message.
    pub fn with_message(kind: SinkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SinkErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "audit sink error ({}): {}", self.kind, msg),
            None => write!(f, "audit sink error ({})", self.kind),
        }
    }
}

impl std::error::Error for SinkError {}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(SinkErrorKind::Io, err.to_string())
    }
}

impl From<csv::Error> for SinkError {
    fn from(err: csv::Error) -> Self {
        let kind = match err.kind() {
            csv::ErrorKind::Io(_) => SinkErrorKind::Io,
            _ => SinkErrorKind::Encoding,
        };
        Self::with_message(kind, err.to_string())
    }
}

/// Kind of sink error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkErrorKind {
    /// Storage could not be opened, written or read.
    Io,
    /// Stored data could not be encoded or decoded.
    Encoding,
}

impl fmt::Display for SinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Encoding => write!(f, "malformed record"),
        }
    }
}

/// Destination for audit records of rejected inputs.
///
/// The classifier holds one of these and calls [`record`](Self::record) once
/// per rejection, before returning the outcome. Implementations must append
/// only: existing records are never rewritten or removed.
///
/// Errors returned from `record` are reported by the classifier as warnings
/// and never reach the user-facing flow.
pub trait AuditSink {
    /// Appends one record for a rejected input, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the record could not be stored.
    fn record(&self, reason: ReasonCode, raw_input: &str) -> Result<(), SinkError>;

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if stored records cannot be read back.
    fn records(&self) -> Result<Vec<AuditRecord>, SinkError>;
}

impl<S: AuditSink + ?Sized> AuditSink for &S {
    fn record(&self, reason: ReasonCode, raw_input: &str) -> Result<(), SinkError> {
        (**self).record(reason, raw_input)
    }

    fn records(&self) -> Result<Vec<AuditRecord>, SinkError> {
        (**self).records()
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Arc<S> {
    fn record(&self, reason: ReasonCode, raw_input: &str) -> Result<(), SinkError> {
        (**self).record(reason, raw_input)
    }

    fn records(&self) -> Result<Vec<AuditRecord>, SinkError> {
        (**self).records()
    }
}

/// An audit sink that keeps records in memory.
///
/// Useful for tests and for embedding the classifier where durable storage is
/// handled elsewhere. Appends are serialized by an internal lock, so the sink
/// can be shared between threads.
///
/// # Examples
///
/// ```
/// use hero_shield::{AuditSink, MemoryAuditSink, ReasonCode};
///
/// let sink = MemoryAuditSink::new();
/// sink.record(ReasonCode::Pii, "555-123-4567").unwrap();
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.records().unwrap()[0].input(), "555-123-4567");
/// ```
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Provides borrowed access to the records via callback.
    pub fn with_records<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[AuditRecord]) -> R,
    {
        f(&self.records.lock())
    }

    /// Consumes the sink and returns the records.
    pub fn into_vec(self) -> Vec<AuditRecord> {
        self.records.into_inner()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, reason: ReasonCode, raw_input: &str) -> Result<(), SinkError> {
        self.records.lock().push(AuditRecord::now(reason, raw_input));
        Ok(())
    }

    fn records(&self) -> Result<Vec<AuditRecord>, SinkError> {
        Ok(self.records.lock().clone())
    }
}
