//! Password-gated review of the audit log.

use crate::error::{Error, Result};
use crate::{AuditRecord, AuditSink, Secret};

/// Number of records shown by the review screen when no count is given.
pub const DEFAULT_REVIEW_COUNT: usize = 5;

/// Read-only view of the audit log for the account holder.
///
/// # Examples
///
/// ```
/// use hero_shield::{AdminReview, AuditSink, MemoryAuditSink, ReasonCode};
///
/// let sink = MemoryAuditSink::new();
/// sink.record(ReasonCode::Profanity, "shut up").unwrap();
///
/// let review = AdminReview::new(&sink, "cape-and-cowl");
/// assert!(review.recent("wrong", 5).is_err());
/// assert_eq!(review.recent("cape-and-cowl", 5).unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct AdminReview<S> {
    sink: S,
    password: Secret<String>,
}

impl<S: AuditSink> AdminReview<S> {
    /// Creates a review over `sink`, unlocked by `password`.
    pub fn new(sink: S, password: impl Into<String>) -> Self {
        Self {
            sink,
            password: Secret::new(password.into()),
        }
    }

    /// Returns the last `count` records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if `password` is wrong, or
    /// [`Error::Sink`] if the log cannot be read.
    pub fn recent(&self, password: &str, count: usize) -> Result<Vec<AuditRecord>> {
        let mut records = self.all(password)?;
        let skip = records.len().saturating_sub(count);
        Ok(records.split_off(skip))
    }

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Same as [`recent`](Self::recent).
    pub fn all(&self, password: &str) -> Result<Vec<AuditRecord>> {
        if !self.password.matches(password) {
            tracing::warn!("audit review denied");
            return Err(Error::AccessDenied);
        }
        let records = self.sink.records()?;
        tracing::info!(records = records.len(), "audit review opened");
        Ok(records)
    }
}
