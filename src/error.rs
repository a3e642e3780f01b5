//! Error types.
//!
//! A failed check is not an error: predicates answer `false`. The only
//! condition surfaced as an error is a malformed rule, where the caller
//! handed over a regular expression that does not compile.

use std::fmt;

/// Error returned when a regular expression cannot be compiled.
///
/// Distinguishes "the value does not match" (`Ok(false)`) from "the rule
/// itself is broken".
///
/// # Examples
///
/// ```rust
/// use formcheck::Validator;
///
/// let validator = Validator::new();
/// let err = validator.is_match("abc", "[a-z").unwrap_err();
/// assert_eq!(err.pattern(), "[a-z");
/// ```
#[derive(Debug, Clone)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    /// Create a new PatternError.
    pub fn new(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern as supplied by the caller.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The regex engine's error.
    pub fn regex_error(&self) -> &regex::Error {
        &self.source
    }
}

impl PartialEq for PatternError {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern `{}`: {}", self.pattern, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
