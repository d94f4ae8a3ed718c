//! Policy configuration: the pattern and word lists the classifier matches.
//!
//! The defaults reproduce the built-in studio policy. A TOML file can replace
//! any subset of the lists; keys it leaves out keep their defaults.
//!
//! ```toml
//! flagged_words = ["kill", "doom"]
//!
//! [messages]
//! profanity = "Keep it heroic."
//! ```

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ReasonCode;

/// Phone number: three digits, optional separator, three digits, optional separator, four digits.
pub const PHONE_PATTERN: &str = r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b";

/// Email address with a top-level segment of two or more letters.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

/// Rejection message for [`ReasonCode::Pii`].
pub const PII_MESSAGE: &str =
    "⚠️ **SECURITY ALERT:** Secret Identity detected! That data has been redacted.";

/// Rejection message for [`ReasonCode::Copyright`].
pub const COPYRIGHT_MESSAGE: &str =
    "🛑 **CREATIVE OVERRIDE:** That hero already exists! Invent someone new.";

/// Rejection message for [`ReasonCode::Profanity`].
pub const PROFANITY_MESSAGE: &str =
    "🛡️ **HERO'S CODE VIOLATION:** That language violates the Code of Honor.";

const COPYRIGHT_NAMES: &[&str] = &[
    "batman",
    "superman",
    "spiderman",
    "spider-man",
    "iron man",
    "hulk",
    "wonder woman",
    "captain america",
    "marvel",
    "dc comics",
];

const FLAGGED_WORDS: &[&str] = &[
    "kill", "murder", "blood", "death", "stupid", "idiot", "hate", "shut up", "damn", "hell", "die",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// User-facing rejection messages, one per reason code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when PII is detected
    pub pii: String,
    /// Shown when a copyrighted name is detected
    pub copyright: String,
    /// Shown when a flagged word is detected
    pub profanity: String,
}

impl Messages {
    /// Returns the message for a reason code.
    pub fn for_reason(&self, reason: ReasonCode) -> &str {
        match reason {
            ReasonCode::Pii => &self.pii,
            ReasonCode::Copyright => &self.copyright,
            ReasonCode::Profanity => &self.profanity,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            pii: PII_MESSAGE.to_string(),
            copyright: COPYRIGHT_MESSAGE.to_string(),
            profanity: PROFANITY_MESSAGE.to_string(),
        }
    }
}

/// The three ordered matcher lists plus their messages.
///
/// This is plain data. Call [`compile`](Self::compile) to validate it and get
/// a [`CompiledPolicy`] the classifier can use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Regular expressions; any match is PII.
    pub pii_patterns: Vec<String>,
    /// Case-insensitive substrings naming copyrighted characters or brands.
    pub copyright_names: Vec<String>,
    /// Case-insensitive profanity/violence substrings.
    pub flagged_words: Vec<String>,
    /// Rejection messages.
    pub messages: Messages,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            pii_patterns: vec![PHONE_PATTERN.to_string(), EMAIL_PATTERN.to_string()],
            copyright_names: owned(COPYRIGHT_NAMES),
            flagged_words: owned(FLAGGED_WORDS),
            messages: Messages::default(),
        }
    }
}

impl PolicyConfig {
    /// Parses a TOML policy document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML policy file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            pii_patterns = config.pii_patterns.len(),
            copyright_names = config.copyright_names.len(),
            flagged_words = config.flagged_words.len(),
            "loaded policy configuration"
        );
        Ok(config)
    }

    /// Validates the configuration and prepares it for matching.
    ///
    /// Regexes are compiled here so that a bad pattern fails at startup.
    /// Word lists are lower-cased and blank entries are dropped, since an
    /// empty needle would match every input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for the first pattern that does not
    /// compile.
    pub fn compile(self) -> Result<CompiledPolicy> {
        let pii = self
            .pii_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledPolicy {
            pii,
            copyright: normalize(&self.copyright_names),
            profanity: normalize(&self.flagged_words),
            messages: self.messages,
        })
    }
}

fn normalize(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// A validated policy ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    pii: Vec<Regex>,
    copyright: Vec<String>,
    profanity: Vec<String>,
    messages: Messages,
}

impl CompiledPolicy {
    /// Returns the first policy the input violates, in priority order.
    ///
    /// Later policies are not evaluated once one matches.
    pub fn first_violation(&self, input: &str) -> Option<ReasonCode> {
        if self.pii.iter().any(|re| re.is_match(input)) {
            return Some(ReasonCode::Pii);
        }

        let lowered = input.to_lowercase();
        if self.copyright.iter().any(|name| lowered.contains(name.as_str())) {
            return Some(ReasonCode::Copyright);
        }
        if self.profanity.iter().any(|word| lowered.contains(word.as_str())) {
            return Some(ReasonCode::Profanity);
        }

        None
    }

    /// Returns the configured message for a reason code.
    pub fn message(&self, reason: ReasonCode) -> &str {
        self.messages.for_reason(reason)
    }
}
