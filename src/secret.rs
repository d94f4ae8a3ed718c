use std::fmt;

/// A value that must not show up in logs or terminal output.
///
/// Used for the admin password that guards the audit review. `Debug` and
/// `Display` always print `[REDACTED]`; the only way to use the value is to
/// compare against it with [`matches`](Secret::matches).
///
/// # Examples
///
/// ```
/// use hero_shield::Secret;
///
/// let password = Secret::new("admin".to_string());
/// assert_eq!(format!("{password:?}"), "[REDACTED]");
/// assert!(password.matches("admin"));
/// ```
// No Clone/Default: copies of the password should be deliberate.
pub struct Secret<T> {
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: AsRef<[u8]>> Secret<T> {
    /// Compares `candidate` with the secret without short-circuiting on the
    /// first differing byte.
    pub fn matches(&self, candidate: impl AsRef<[u8]>) -> bool {
        let expected = self.inner.as_ref();
        let candidate = candidate.as_ref();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_never_shows_the_value() {
        let password = Secret::new("hunter2".to_string());
        assert_eq!(format!("{password:?}"), "[REDACTED]");
        assert_eq!(format!("{password}"), "[REDACTED]");
        assert!(!format!("{password:#?}").contains("String"));
    }

    #[test]
    fn matches_exact_value_only() {
        let password = Secret::new("admin".to_string());
        assert!(password.matches("admin"));
        assert!(!password.matches("Admin"));
        assert!(!password.matches("admin "));
        assert!(!password.matches(""));
    }

    #[test]
    fn byte_slices_compare_like_strings() {
        let password = Secret::new("cape");
        assert!(password.matches(b"cape"));
        assert!(!password.matches(b"capes"));
    }
}
