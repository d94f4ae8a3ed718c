//! Audit log of rejected inputs.
//!
//! This module provides:
//! - `AuditRecord`: one rejected input with its timestamp and reason
//! - `CsvAuditLog`: the durable, append-only `security_log.csv` sink
//!
//! The sink contract itself lives in [`AuditSink`](crate::AuditSink).

mod csv_log;
mod record;

pub use csv_log::{CsvAuditLog, DEFAULT_LOG_FILE, HEADER};
pub use record::{AuditRecord, TIMESTAMP_FORMAT};
