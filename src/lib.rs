//! # Formcheck
//!
//! Pure predicates for validating user-supplied input.
//!
//! Every check answers `true` or `false` and nothing else: no state, no I/O,
//! no side effects. Deciding what a failed check means (an error message, a
//! rejected request, a log line) stays with the calling code.
//!
//! ## Checks
//!
//! - **presence**: `is_required` rejects empty, whitespace-only, null, `false`
//!   and empty collections
//! - **equality**: loose (`5` equals `"5"`) and strict, under different names
//! - **patterns**: whole-value regular expression matches
//! - **content**: plain text, or HTML restricted to an allow-list of tags
//! - **formats**: email addresses, URLs, dates in a given format
//! - **ordering**: min / max / range checks that compare numbers as numbers,
//!   strings by length, and dates as dates when a format is given
//!
//! ## Quick Example
//!
//! ```rust
//! use formcheck::Validator;
//!
//! let v = Validator::new();
//!
//! assert!(v.is_required("Alice"));
//! assert!(v.is_email("alice@example.com"));
//! assert!(v.is_in_range("alice", 3, 20, None));
//! assert!(v.is_at_least("2025-01-17", "2025-01-01", Some("YYYY-MM-DD")));
//! assert!(!v.is_allowed_html("<script>alert(1)</script>", None));
//! ```
//!
//! The same checks are available as composable [`predicate`]s:
//!
//! ```rust
//! use formcheck::predicate::*;
//! use formcheck::Value;
//!
//! let username = PredicateExt::<Value>::and(required(), in_range(3, 20, None));
//! assert!(username.check(&Value::from("alice")));
//! assert!(!username.check(&Value::from("al")));
//! ```
//!
//! ## Features
//!
//! - `tracing`: log checks that fail closed because their operands could not
//!   be classified (unparseable dates, non-numeric bounds, malformed patterns)
//! - `serde`: (de)serialize [`Config`], [`Value`], [`AllowList`] and [`DateFormat`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod date;
pub mod error;
pub mod markup;
pub mod number;
pub mod predicate;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use config::Config;
pub use date::{DateFormat, DEFAULT_DATE_FORMAT};
pub use error::PatternError;
pub use markup::{strip_tags, AllowList, DEFAULT_ALLOWED_TAGS};
pub use number::{is_numeric, parse_number, Number};
pub use validator::Validator;
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::date::DateFormat;
    pub use crate::error::PatternError;
    pub use crate::markup::AllowList;
    pub use crate::predicate::prelude::*;
    pub use crate::validator::Validator;
    pub use crate::value::Value;
}
