/// Text that has passed the safety classifier.
///
/// `Cleared` can only be produced by
/// [`SafetyClassifier::clear`](crate::SafetyClassifier::clear), so a function
/// that takes `Cleared` instead of `String` cannot be handed unchecked input.
/// Use it at the boundary where text leaves the app, such as the prompt sent
/// to a generation API or a field written into the character vault.
///
/// There is no public constructor and no `From<String>`:
///
/// ```compile_fail
/// use hero_shield::Cleared;
///
/// let cleared = Cleared::new("anything".to_string());
/// ```
///
/// # Examples
///
/// ```
/// use hero_shield::{MemoryAuditSink, SafetyClassifier};
///
/// let shield = SafetyClassifier::with_defaults(MemoryAuditSink::new()).unwrap();
/// let prompt = shield.clear("A hero who flies and saves cats").unwrap();
///
/// assert_eq!(prompt.as_str(), "A hero who flies and saves cats");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleared {
    text: String,
}

impl Cleared {
    /// Wraps text the classifier has already allowed.
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    /// Borrows the cleared text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the wrapper and returns the text.
    pub fn into_inner(self) -> String {
        self.text
    }
}

impl AsRef<str> for Cleared {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
