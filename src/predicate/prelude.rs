//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use formcheck::predicate::prelude::*;
//! use formcheck::Value;
//!
//! let valid_age = at_least(0).and(at_most(150));
//! assert!(valid_age.check(&Value::from(25)));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{And, Not, Or};

// Presence and equality
pub use super::equality::{equal_to, identical_to, not_equal_to, not_identical_to};
pub use super::presence::required;

// String content and format
pub use super::content::{allowed_html, allowed_html_with, plain_text};
pub use super::format::{email, url};
pub use super::pattern::matches;
pub use super::temporal::date;

// Ordering
pub use super::ordering::{at_least, at_most, greater_than, in_range, less_than, strictly_between};
