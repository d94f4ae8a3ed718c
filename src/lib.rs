//! Content safety filter for a character-creation studio.
//!
//! Free text typed by the user is checked before it is stored or sent to a
//! generation API. This crate provides:
//! - **Classification**: PII, copyrighted names and flagged words, checked in
//!   that order, first match wins
//! - **Auditing**: every rejected input is appended to an audit sink, by
//!   default the `security_log.csv` file
//! - **Review**: a password-gated view of the most recent rejections
//!
//! # Core Types
//!
//! - [`SafetyClassifier`]: runs the policies and records rejections
//! - [`Outcome`] / [`Rejection`]: the verdict and its user-facing message
//! - [`PolicyConfig`]: pattern and word lists, loadable from TOML
//! - [`AuditSink`]: where rejections go; [`CsvAuditLog`] and [`MemoryAuditSink`]
//! - [`Cleared`]: text that has passed the classifier
//!
//! # Examples
//!
//! ```
//! use hero_shield::{AuditSink, MemoryAuditSink, ReasonCode, SafetyClassifier};
//!
//! let shield = SafetyClassifier::with_defaults(MemoryAuditSink::new()).unwrap();
//!
//! let outcome = shield.check("shut up you idiot");
//! assert_eq!(outcome.reason(), Some(ReasonCode::Profanity));
//! assert!(outcome.message().unwrap().contains("Code of Honor"));
//!
//! // The attempt was recorded with the raw input
//! let records = shield.sink().records().unwrap();
//! assert_eq!(records[0].input(), "shut up you idiot");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod classifier;
mod cleared;
mod error;
mod outcome;
pub mod policy;
mod reason;
mod review;
mod secret;
mod session;
mod sink;

pub use audit::{AuditRecord, CsvAuditLog};
pub use classifier::SafetyClassifier;
pub use cleared::Cleared;
pub use error::{Error, Result};
pub use outcome::{Outcome, Rejection};
pub use policy::{CompiledPolicy, PolicyConfig};
pub use reason::{ReasonCode, UnknownReason};
pub use review::{AdminReview, DEFAULT_REVIEW_COUNT};
pub use secret::Secret;
pub use session::{SessionBudget, DEFAULT_SESSION_LIMIT};
pub use sink::{AuditSink, MemoryAuditSink, SinkError, SinkErrorKind};
