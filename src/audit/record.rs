//! Audit record schema.

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::ReasonCode;

/// Timestamp layout used in the `Timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One rejected input, as stored in the audit log.
///
/// Unlike tracing output, an audit record keeps the raw input text: the
/// point of the log is for an administrator to see exactly what was typed.
///
/// # Example
///
/// ```
/// use hero_shield::{AuditRecord, ReasonCode};
///
/// let record = AuditRecord::now(ReasonCode::Profanity, "shut up");
/// assert_eq!(record.reason(), ReasonCode::Profanity);
/// assert_eq!(record.input(), "shut up");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    timestamp: NaiveDateTime,
    reason: ReasonCode,
    input: String,
}

impl AuditRecord {
    /// Creates a record with an explicit timestamp, truncated to whole seconds.
    pub fn new(timestamp: NaiveDateTime, reason: ReasonCode, input: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            reason,
            input: input.into(),
        }
    }

    /// Creates a record stamped with the current local wall-clock time.
    pub fn now(reason: ReasonCode, input: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), reason, input)
    }

    /// Returns when the violation happened.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the timestamp in log format.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Returns the policy that was violated.
    pub fn reason(&self) -> ReasonCode {
        self.reason
    }

    /// Returns the raw, unredacted input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:?}",
            self.formatted_timestamp(),
            self.reason.log_label(),
            self.input
        )
    }
}
