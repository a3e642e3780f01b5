//! Regular expression predicate

use regex::Regex;

use super::combinators::Predicate;
use crate::error::PatternError;

/// A compiled, fully anchored regular expression.
///
/// The pattern body is wrapped as `^(?:pattern)$`, so it must match the whole
/// value, not just a part of it. Bodies that already carry their own anchors
/// work unchanged.
///
/// Compile once and reuse when checking many values.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the expression is malformed.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{})$", pattern);
        match Regex::new(&anchored) {
            Ok(regex) => Ok(Self {
                source: pattern.to_string(),
                regex,
            }),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("rejected malformed pattern {:?}: {}", pattern, err);
                Err(PatternError::new(pattern, err))
            }
        }
    }

    /// The pattern as given, without the added anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the entire `value` matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Predicate<str> for Pattern {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.is_match(value)
    }
}

text_inputs!(Pattern);

/// Create a predicate that checks the whole value matches `pattern`.
///
/// # Errors
///
/// Returns [`PatternError`] if the expression is malformed.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// let p = matches("[a-z0-9]+").unwrap();
/// assert!(p.check("abc123"));
/// assert!(!p.check("abc-123"));
///
/// assert!(matches("[a-z").is_err());
/// ```
pub fn matches(pattern: &str) -> Result<Pattern, PatternError> {
    Pattern::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_full_match_with_explicit_anchors() {
        let p = matches("^[a-z0-9]+$").unwrap();
        assert!(p.check("abc123"));
        assert!(!p.check("abc-123"));
    }

    #[test]
    fn test_unanchored_body_is_anchored() {
        let p = matches(r"\d{3}").unwrap();
        assert!(p.check("123"));
        assert!(!p.check("a123"));
        assert!(!p.check("1234"));
    }

    #[test]
    fn test_alternation_is_grouped() {
        let p = matches("cat|dog").unwrap();
        assert!(p.check("cat"));
        assert!(p.check("dog"));
        assert!(!p.check("catdog"));
        assert!(!p.check("cats"));
    }

    #[test]
    fn test_inline_flags() {
        let p = matches("(?i)hello").unwrap();
        assert!(p.check("HeLLo"));
    }

    #[test]
    fn test_malformed_pattern_is_an_error() {
        let err = matches("(unclosed").unwrap_err();
        assert_eq!(err.pattern(), "(unclosed");
    }

    #[test]
    fn test_as_str_returns_original() {
        assert_eq!(matches("a+").unwrap().as_str(), "a+");
    }

    #[test]
    fn test_value_input() {
        let p = matches(r"\d+").unwrap();
        assert!(p.check(&Value::from(42)));
        assert!(p.check(&Value::from("42")));
        assert!(!p.check(&Value::Null));
        assert!(p.check(&String::from("7")));
    }
}
