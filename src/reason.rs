use std::fmt;
use std::str::FromStr;

/// Policy category that caused a rejection.
///
/// The variants are listed in evaluation order: when an input violates more
/// than one policy, the earliest variant is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// Phone number or email address in the input
    Pii,
    /// A known copyrighted character or brand name
    Copyright,
    /// A flagged profanity or violence word
    Profanity,
}

impl ReasonCode {
    /// All reason codes in priority order.
    pub const ALL: [ReasonCode; 3] = [Self::Pii, Self::Copyright, Self::Profanity];

    /// Short code used in messages and tracing fields.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pii => "PII",
            Self::Copyright => "COPYRIGHT",
            Self::Profanity => "PROFANITY",
        }
    }

    /// Label written to the `Type` column of the audit log.
    ///
    /// These match the labels already present in existing `security_log.csv`
    /// files, so old and new rows read back the same way.
    pub fn log_label(self) -> &'static str {
        match self {
            Self::Pii => "PII_ATTEMPT",
            Self::Copyright => "COPYRIGHT_ATTEMPT",
            Self::Profanity => "PROFANITY_VIOLENCE",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is neither a reason code nor a log label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReason(
    /// The unrecognized text
    pub String,
);

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reason code '{}'", self.0)
    }
}

impl std::error::Error for UnknownReason {}

impl FromStr for ReasonCode {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ReasonCode::ALL
            .into_iter()
            .find(|r| {
                trimmed.eq_ignore_ascii_case(r.code()) || trimmed.eq_ignore_ascii_case(r.log_label())
            })
            .ok_or_else(|| UnknownReason(trimmed.to_string()))
    }
}
