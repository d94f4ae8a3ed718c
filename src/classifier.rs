//! The safety classifier.
//!
//! Every piece of free text a user submits (chat messages, character names,
//! tutorial drills) goes through [`SafetyClassifier::check`] before it is used.
//! A rejection is written to the audit sink before the outcome is returned.

use serde_json::Value;

use crate::error::Result;
use crate::policy::{CompiledPolicy, PolicyConfig};
use crate::{AuditSink, Cleared, Outcome, ReasonCode, Rejection};

/// Classifies text against the PII, copyright and profanity policies.
///
/// Policies are evaluated in a fixed order and the first match wins:
///
/// 1. PII (phone number or email address)
/// 2. Copyrighted character or brand name
/// 3. Profanity or violence word
///
/// The return value depends only on the input and the policy, but `check` is
/// not side-effect-free: each rejection appends exactly one record to the
/// audit sink. Allowed input never touches the sink.
///
/// # Examples
///
/// ```
/// use hero_shield::{MemoryAuditSink, ReasonCode, SafetyClassifier};
///
/// let shield = SafetyClassifier::with_defaults(MemoryAuditSink::new()).unwrap();
///
/// let outcome = shield.check("Call me at 555-123-4567");
/// assert_eq!(outcome.reason(), Some(ReasonCode::Pii));
/// assert!(outcome.message().unwrap().contains("Secret Identity detected"));
/// assert_eq!(shield.sink().len(), 1);
///
/// assert!(shield.check("A hero who flies and saves cats").is_allowed());
/// assert_eq!(shield.sink().len(), 1);
/// ```
#[derive(Debug)]
pub struct SafetyClassifier<S> {
    policy: CompiledPolicy,
    sink: S,
}

impl<S: AuditSink> SafetyClassifier<S> {
    /// Builds a classifier from policy configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if a
    /// PII pattern does not compile.
    pub fn new(config: PolicyConfig, sink: S) -> Result<Self> {
        Ok(Self::from_policy(config.compile()?, sink))
    }

    /// Builds a classifier with the built-in studio policy.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in patterns do not compile.
    pub fn with_defaults(sink: S) -> Result<Self> {
        Self::new(PolicyConfig::default(), sink)
    }

    /// Builds a classifier from an already compiled policy.
    pub fn from_policy(policy: CompiledPolicy, sink: S) -> Self {
        Self { policy, sink }
    }

    /// Classifies `input`, recording the attempt if it is rejected.
    ///
    /// Audit failures are reported through `tracing` and otherwise ignored;
    /// the caller always gets the verdict.
    pub fn check(&self, input: &str) -> Outcome {
        let Some(reason) = self.policy.first_violation(input) else {
            tracing::debug!(len = input.len(), "input allowed");
            return Outcome::Allowed;
        };

        tracing::info!(reason = %reason, len = input.len(), "input rejected");
        if let Err(err) = self.sink.record(reason, input) {
            tracing::warn!(reason = %reason, error = %err, "failed to write audit record");
        }

        Outcome::Rejected(Rejection::new(reason, self.policy.message(reason)))
    }

    /// Classifies a loosely typed value, such as a form field decoded from JSON.
    ///
    /// Only strings are checked. Any other value (number, bool, null, array,
    /// object) is allowed without an audit entry.
    pub fn check_value(&self, value: &Value) -> Outcome {
        match value {
            Value::String(text) => self.check(text),
            other => {
                tracing::debug!(kind = value_kind(other), "non-text input allowed");
                Outcome::Allowed
            }
        }
    }

    /// Classifies raw bytes, decoding invalid UTF-8 lossily.
    ///
    /// The audit record holds the decoded text.
    pub fn check_bytes(&self, bytes: &[u8]) -> Outcome {
        self.check(&String::from_utf8_lossy(bytes))
    }

    /// Classifies `text` and wraps it as [`Cleared`] when allowed.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when a policy matches. The attempt has
    /// already been recorded at that point.
    pub fn clear(&self, text: impl Into<String>) -> std::result::Result<Cleared, Rejection> {
        let text = text.into();
        self.check(&text).into_result()?;
        Ok(Cleared::new(text))
    }

    /// Returns the policy `input` would violate, without recording anything.
    pub fn detect(&self, input: &str) -> Option<ReasonCode> {
        self.policy.first_violation(input)
    }

    /// Returns the audit sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the compiled policy.
    pub fn policy(&self) -> &CompiledPolicy {
        &self.policy
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
