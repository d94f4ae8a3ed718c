use std::path::PathBuf;

use thiserror::Error;

use crate::SinkError;

/// Errors that can occur while building or operating the safety filter.
///
/// Classification itself never fails: a rejected input is an
/// [`Outcome`](crate::Outcome), not an error. These variants cover startup
/// configuration and the administrative surfaces around the audit log.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured PII pattern is not a valid regular expression.
    #[error("invalid PII pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// The policy configuration file could not be parsed.
    #[error("invalid policy configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration or log file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The admin password did not match.
    #[error("access denied")]
    AccessDenied,

    /// The audit sink failed outside the classification path.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
