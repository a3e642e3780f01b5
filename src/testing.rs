//! Testing utilities
//!
//! Assertion macros that report the offending input when a predicate gives
//! the wrong answer, and (with the `proptest` feature) an [`Arbitrary`]
//! implementation for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use formcheck::predicate::*;
//! use formcheck::{assert_accepts, assert_rejects};
//!
//! assert_accepts!(email(), "user@example.com");
//! assert_rejects!(email(), "user@");
//! ```
//!
//! [`Arbitrary`]: https://docs.rs/proptest/latest/proptest/arbitrary/trait.Arbitrary.html

/// Assert that a predicate accepts every given input.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::assert_accepts;
///
/// assert_accepts!(plain_text(), "hello", "1 < 2");
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $($input:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let input = $input;
            if !$crate::predicate::Predicate::check(predicate, input) {
                panic!("Expected {:?} to be accepted", input);
            }
        )+
    }};
}

/// Assert that a predicate rejects every given input.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::assert_rejects;
///
/// assert_rejects!(plain_text(), "<b>x</b>", "a<br>b");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $($input:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let input = $input;
            if $crate::predicate::Predicate::check(predicate, input) {
                panic!("Expected {:?} to be rejected", input);
            }
        )+
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            ".*".prop_map(Value::Str),
            "[+-]?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(Value::Str),
        ];
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Map),
            ]
        })
        .boxed()
    }
}
