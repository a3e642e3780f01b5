//! Composable input predicates
//!
//! Every check in this crate is a [`Predicate`]: a value that answers `true`
//! or `false` for an input, holds no state between calls, and combines with
//! others through `and`, `or` and `not`.
//!
//! # Example
//!
//! ```rust
//! use formcheck::predicate::*;
//! use formcheck::Value;
//!
//! let age = at_least(18).and(at_most(130));
//! assert!(age.check(&Value::from("42")));
//! assert!(!age.check(&Value::from(12)));
//!
//! let comment = PredicateExt::<str>::and(required(), allowed_html());
//! assert!(comment.check("<p>Nice <em>post</em></p>"));
//! assert!(!comment.check("<p onclick=x>hi</p><script></script>"));
//! ```
//!
//! # Input types
//!
//! String predicates accept `str`, `String` and [`Value`](crate::Value). A
//! `Value` is read through its textual form (strings as-is, numbers in
//! decimal); `Null`, booleans and collections never satisfy them.
//! Presence, equality and ordering predicates take a `Value`.

/// Lets a `Predicate<str>` also check `String` and `Value` inputs.
macro_rules! text_inputs {
    ($ty:ty) => {
        impl $crate::predicate::Predicate<String> for $ty {
            #[inline]
            fn check(&self, value: &String) -> bool {
                $crate::predicate::Predicate::<str>::check(self, value.as_str())
            }
        }

        impl $crate::predicate::Predicate<$crate::Value> for $ty {
            #[inline]
            fn check(&self, value: &$crate::Value) -> bool {
                value
                    .to_text()
                    .is_some_and(|text| $crate::predicate::Predicate::<str>::check(self, &text))
            }
        }
    };
}

mod combinators;
mod content;
mod equality;
mod format;
mod ordering;
mod pattern;
mod presence;
mod temporal;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

pub use presence::{required, Required};

pub use equality::{
    equal_to, identical_to, not_equal_to, not_identical_to, Equal, Identical, NotEqual,
    NotIdentical,
};

pub use pattern::{matches, Pattern};

pub use content::{allowed_html, allowed_html_with, plain_text, AllowedHtml, PlainText};

pub use format::{email, url, Email, Url};

pub use temporal::{date, Date};

pub use ordering::{
    at_least, at_most, greater_than, in_range, less_than, strictly_between, AtLeast, AtMost,
    GreaterThan, InRange, LessThan, StrictlyBetween,
};
