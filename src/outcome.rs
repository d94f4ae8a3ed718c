use std::fmt;

use crate::ReasonCode;

/// Why an input was rejected, and what to tell the user.
///
/// The message is the fixed, policy-specific text configured for
/// [`reason`](Self::reason); it never quotes the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: ReasonCode,
    message: String,
}

impl Rejection {
    pub(crate) fn new(reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    /// Returns the policy that matched.
    pub fn reason(&self) -> ReasonCode {
        self.reason
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Rejection {}

/// Result of classifying one input.
///
/// # Examples
///
/// ```
/// use hero_shield::{MemoryAuditSink, Outcome, ReasonCode, SafetyClassifier};
///
/// let shield = SafetyClassifier::with_defaults(MemoryAuditSink::new()).unwrap();
///
/// match shield.check("I want to use Batman") {
///     Outcome::Allowed => unreachable!(),
///     Outcome::Rejected(rejection) => {
///         assert_eq!(rejection.reason(), ReasonCode::Copyright);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input matched no policy.
    Allowed,
    /// The input matched a policy and was recorded in the audit log.
    Rejected(Rejection),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Allowed`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the reason code of a rejection.
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Self::Allowed => None,
            Self::Rejected(r) => Some(r.reason()),
        }
    }

    /// Returns the user-facing message of a rejection.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Rejected(r) => Some(r.message()),
        }
    }

    /// Converts into a `Result`, with the rejection as the error.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Allowed => Ok(()),
            Self::Rejected(r) => Err(r),
        }
    }
}
