//! The validator facade
//!
//! [`Validator`] offers every check as a plain method that returns `bool`.
//! It holds only configuration, so one instance can be shared freely across
//! threads. Methods that take a pattern, allow-list or format as a string
//! compile it on every call; build the matching predicate from
//! [`crate::predicate`] once when checking in a loop.

use crate::config::Config;
use crate::date::DateFormat;
use crate::error::PatternError;
use crate::predicate::{
    allowed_html_with, at_least, at_most, date, email, equal_to, greater_than, identical_to,
    in_range, less_than, not_equal_to, not_identical_to, plain_text, required, strictly_between,
    url, AllowedHtml, Date, Pattern, Predicate,
};
use crate::Value;

/// Stateless set of input checks.
///
/// # Example
///
/// ```rust
/// use formcheck::Validator;
///
/// let v = Validator::new();
///
/// assert!(v.is_required("Test"));
/// assert!(!v.is_required("   "));
/// assert!(v.is_equal(5, "5"));
/// assert!(v.is_match("abc123", "^[a-z0-9]+$").unwrap());
/// assert!(v.is_allowed_html("<p>Hello <b>World</b></p>", None));
/// assert!(v.is_email("test@example.com"));
/// assert!(v.is_date("2025-01-17", None));
/// assert!(v.is_at_least("hello", 3, None));
/// assert!(v.is_in_range(7, 5, 10, None));
/// assert!(!v.is_strictly_between(10, 5, 10, None));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    html: AllowedHtml,
    date: Date,
    compare_format: Option<DateFormat>,
}

impl Validator {
    /// Create a validator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a validator with the given defaults.
    pub fn with_config(config: Config) -> Self {
        Self {
            html: allowed_html_with(config.allowed_tags),
            date: date().with_format(config.date_format),
            compare_format: config.compare_format,
        }
    }

    /// The configuration this validator was built from.
    pub fn config(&self) -> Config {
        Config {
            allowed_tags: self.html.allowed().clone(),
            date_format: self.date.format().clone(),
            compare_format: self.compare_format.clone(),
        }
    }

    /// Whether the value is present: not empty, not whitespace-only, not
    /// null, not `false`, not an empty collection.
    pub fn is_required(&self, value: impl Into<Value>) -> bool {
        let value: Value = value.into();
        required().check(&value)
    }

    /// Loose equality: `5` equals `"5"`.
    ///
    /// See [`Value::loose_eq`] for the complete rules.
    pub fn is_equal(&self, value: impl Into<Value>, compare: impl Into<Value>) -> bool {
        let value: Value = value.into();
        equal_to(compare).check(&value)
    }

    /// Negation of [`Validator::is_equal`].
    pub fn is_not_equal(&self, value: impl Into<Value>, compare: impl Into<Value>) -> bool {
        let value: Value = value.into();
        not_equal_to(compare).check(&value)
    }

    /// Strict equality: same kind and same content.
    pub fn is_identical(&self, value: impl Into<Value>, compare: impl Into<Value>) -> bool {
        let value: Value = value.into();
        identical_to(compare).check(&value)
    }

    /// Negation of [`Validator::is_identical`].
    pub fn is_not_identical(&self, value: impl Into<Value>, compare: impl Into<Value>) -> bool {
        let value: Value = value.into();
        not_identical_to(compare).check(&value)
    }

    /// Whether the whole of `value` matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if `pattern` is not a valid regular expression.
    pub fn is_match(&self, value: &str, pattern: &str) -> Result<bool, PatternError> {
        Ok(Pattern::new(pattern)?.is_match(value))
    }

    /// Whether `value` contains no markup.
    pub fn is_plain_text(&self, value: &str) -> bool {
        plain_text().check(value)
    }

    /// Whether `value` uses only allowed tags.
    ///
    /// `allowed_tags` is written `<a><b>`; `None` uses the configured list.
    pub fn is_allowed_html(&self, value: &str, allowed_tags: Option<&str>) -> bool {
        match allowed_tags {
            Some(tags) => allowed_html_with(tags).check(value),
            None => self.html.check(value),
        }
    }

    /// Whether `value` is a well-formed email address.
    pub fn is_email(&self, value: &str) -> bool {
        email().check(value)
    }

    /// Whether `value` is an absolute URL with a host.
    pub fn is_url(&self, value: &str) -> bool {
        url().check(value)
    }

    /// Whether `value` is a real date written exactly in `format`.
    ///
    /// `None` uses the configured format (`YYYY-MM-DD` by default).
    pub fn is_date(&self, value: &str, format: Option<&str>) -> bool {
        match format {
            Some(format) => date().with_format(format).check(value),
            None => self.date.check(value),
        }
    }

    /// `value >= bound`, as dates when a format applies, otherwise as
    /// numbers or by length.
    pub fn is_at_least(
        &self,
        value: impl Into<Value>,
        bound: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let mut predicate = at_least(bound);
        if let Some(format) = self.compare_format(format) {
            predicate = predicate.with_format(format);
        }
        let value: Value = value.into();
        predicate.check(&value)
    }

    /// `value <= bound`.
    pub fn is_at_most(
        &self,
        value: impl Into<Value>,
        bound: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let mut predicate = at_most(bound);
        if let Some(format) = self.compare_format(format) {
            predicate = predicate.with_format(format);
        }
        let value: Value = value.into();
        predicate.check(&value)
    }

    /// `value < bound`.
    pub fn is_less_than(
        &self,
        value: impl Into<Value>,
        bound: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let mut predicate = less_than(bound);
        if let Some(format) = self.compare_format(format) {
            predicate = predicate.with_format(format);
        }
        let value: Value = value.into();
        predicate.check(&value)
    }

    /// `value > bound`.
    pub fn is_greater_than(
        &self,
        value: impl Into<Value>,
        bound: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let mut predicate = greater_than(bound);
        if let Some(format) = self.compare_format(format) {
            predicate = predicate.with_format(format);
        }
        let value: Value = value.into();
        predicate.check(&value)
    }

    /// `min <= value <= max`.
    pub fn is_in_range(
        &self,
        value: impl Into<Value>,
        min: impl Into<Value>,
        max: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let resolved = self.compare_format(format);
        let format = resolved.as_ref().map(DateFormat::pattern);
        let value: Value = value.into();
        in_range(min, max, format).check(&value)
    }

    /// `min < value < max`.
    pub fn is_strictly_between(
        &self,
        value: impl Into<Value>,
        min: impl Into<Value>,
        max: impl Into<Value>,
        format: Option<&str>,
    ) -> bool {
        let resolved = self.compare_format(format);
        let format = resolved.as_ref().map(DateFormat::pattern);
        let value: Value = value.into();
        strictly_between(min, max, format).check(&value)
    }

    fn compare_format(&self, format: Option<&str>) -> Option<DateFormat> {
        format
            .map(DateFormat::new)
            .or_else(|| self.compare_format.clone())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
