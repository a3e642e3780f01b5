//! Equality predicates
//!
//! Two policies, under two names:
//!
//! - *equal* is loose: values that both read as numbers compare as numbers,
//!   so `5` equals `"5"`. See [`Value::loose_eq`] for the full rules.
//! - *identical* is strict: same variant, same payload.

use super::combinators::Predicate;
use crate::Value;

/// Predicate for loose equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Equal(pub Value);

impl Predicate<Value> for Equal {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.loose_eq(&self.0)
    }
}

/// Create a predicate that checks for loose equality.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(equal_to(5).check(&Value::from(5)));
/// assert!(equal_to(5).check(&Value::from("5")));
/// assert!(!equal_to(5).check(&Value::from(6)));
/// ```
pub fn equal_to(value: impl Into<Value>) -> Equal {
    Equal(value.into())
}

/// Predicate for loose inequality.
#[derive(Clone, Debug, PartialEq)]
pub struct NotEqual(pub Value);

impl Predicate<Value> for NotEqual {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !value.loose_eq(&self.0)
    }
}

/// Create a predicate that checks for loose inequality.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(not_equal_to(5).check(&Value::from(6)));
/// assert!(not_equal_to(5).check(&Value::from("6")));
/// assert!(!not_equal_to(5).check(&Value::from("5")));
/// ```
pub fn not_equal_to(value: impl Into<Value>) -> NotEqual {
    NotEqual(value.into())
}

/// Predicate for strict equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Identical(pub Value);

impl Predicate<Value> for Identical {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for strict equality.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(identical_to(5).check(&Value::from(5)));
/// assert!(!identical_to(5).check(&Value::from("5")));
/// assert!(!identical_to(5).check(&Value::from(5.0)));
/// ```
pub fn identical_to(value: impl Into<Value>) -> Identical {
    Identical(value.into())
}

/// Predicate for strict inequality.
#[derive(Clone, Debug, PartialEq)]
pub struct NotIdentical(pub Value);

impl Predicate<Value> for NotIdentical {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        *value != self.0
    }
}

/// Create a predicate that checks for strict inequality.
pub fn not_identical_to(value: impl Into<Value>) -> NotIdentical {
    NotIdentical(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_is_loose() {
        assert!(equal_to(5).check(&Value::from("5")));
        assert!(equal_to("5").check(&Value::from(5.0)));
        assert!(equal_to("abc").check(&Value::from("abc")));
        assert!(!equal_to("abc").check(&Value::from("abd")));
    }

    #[test]
    fn test_not_equal_negates_equal() {
        for (a, b) in [
            (Value::from(5), Value::from("5")),
            (Value::from(5), Value::from(6)),
            (Value::Null, Value::from("")),
            (Value::from("x"), Value::from("y")),
        ] {
            assert_eq!(
                not_equal_to(b.clone()).check(&a),
                !equal_to(b).check(&a),
                "{:?}",
                a
            );
        }
    }

    #[test]
    fn test_identical_is_strict() {
        assert!(identical_to("5").check(&Value::from("5")));
        assert!(!identical_to("5").check(&Value::from(5)));
        assert!(!identical_to(Value::Null).check(&Value::from("")));
        assert!(not_identical_to("5").check(&Value::from(5)));
        assert!(!not_identical_to(5).check(&Value::from(5)));
    }
}
