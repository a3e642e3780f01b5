//! Date predicate

use super::combinators::Predicate;
use crate::date::DateFormat;

/// Predicate that checks a string is a real date written in a given format.
///
/// The value must parse, and formatting the parsed date again must give back
/// the exact input. This rejects impossible days (`2025-04-31`) as well as
/// sloppy spelling (`2025-1-7` for `YYYY-MM-DD`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Date {
    format: DateFormat,
}

impl Date {
    /// Check against `format` instead of `YYYY-MM-DD`.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// The format values must be written in.
    pub fn format(&self) -> &DateFormat {
        &self.format
    }
}

impl Predicate<str> for Date {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.format.is_valid(value)
    }
}

text_inputs!(Date);

/// Create a predicate that checks for a `YYYY-MM-DD` date.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(date().check("2025-01-17"));
/// assert!(!date().check("17-01-2025"));
/// assert!(date().with_format("DD-MM-YYYY").check("17-01-2025"));
/// ```
pub fn date() -> Date {
    Date::default()
}
