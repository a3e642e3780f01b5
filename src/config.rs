//! Validator configuration
//!
//! The optional parameters of the checks, with their defaults spelled out:
//!
//! | Field            | Default                                      |
//! |------------------|----------------------------------------------|
//! | `allowed_tags`   | [`DEFAULT_ALLOWED_TAGS`](crate::markup::DEFAULT_ALLOWED_TAGS) |
//! | `date_format`    | `YYYY-MM-DD`                                 |
//! | `compare_format` | none: comparisons are numeric or by length   |
//!
//! With the `serde` feature the configuration can be loaded from any serde
//! format. Tag lists and formats are written as strings:
//!
//! ```json
//! { "allowed_tags": "<p><br>", "date_format": "DD.MM.YYYY", "compare_format": null }
//! ```

use crate::date::DateFormat;
use crate::markup::AllowList;

/// Defaults for the optional parameters of a [`Validator`](crate::Validator).
///
/// # Example
///
/// ```rust
/// use formcheck::{Config, Validator};
///
/// let config = Config::default()
///     .with_allowed_tags("<p><br>")
///     .with_date_format("DD.MM.YYYY");
/// let validator = Validator::with_config(config);
///
/// assert!(validator.is_allowed_html("<p>a<br>b</p>", None));
/// assert!(!validator.is_allowed_html("<b>bold</b>", None));
/// assert!(validator.is_date("17.01.2025", None));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Tags `is_allowed_html` permits when no list is passed.
    pub allowed_tags: AllowList,
    /// Format `is_date` checks when no format is passed.
    pub date_format: DateFormat,
    /// Format the comparison checks use when none is passed. `None` keeps
    /// them numeric / length based.
    pub compare_format: Option<DateFormat>,
}

impl Config {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default allow-list.
    pub fn with_allowed_tags(mut self, tags: impl Into<AllowList>) -> Self {
        self.allowed_tags = tags.into();
        self
    }

    /// Set the default date format.
    pub fn with_date_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Make comparisons date based by default.
    pub fn with_compare_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.compare_format = Some(format.into());
        self
    }
}
