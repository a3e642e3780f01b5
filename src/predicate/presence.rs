//! Presence predicates

use super::combinators::Predicate;
use crate::Value;

/// Predicate that checks a field was actually filled in.
///
/// Blank means any of: the empty string, a whitespace-only string, `Null`,
/// `false`, or an empty collection. Zero, `"0"` and `"false"` are present.
#[derive(Clone, Copy, Default, Debug)]
pub struct Required;

impl Predicate<str> for Required {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

impl Predicate<String> for Required {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.trim().is_empty()
    }
}

impl Predicate<Value> for Required {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !value.is_blank()
    }
}

/// Create a predicate that checks a value is present.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(required().check("Test"));
/// assert!(!required().check("   "));
/// assert!(required().check(&Value::from(0)));
/// assert!(!required().check(&Value::Null));
/// ```
pub fn required() -> Required {
    Required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_str() {
        assert!(required().check("Test"));
        assert!(required().check("0"));
        assert!(required().check("false"));
        assert!(required().check(" x "));
        assert!(!required().check(""));
        assert!(!required().check("   "));
        assert!(!required().check("\t\r\n"));
    }

    #[test]
    fn test_required_string() {
        assert!(required().check(&String::from("x")));
        assert!(!required().check(&String::new()));
    }

    #[test]
    fn test_required_value() {
        assert!(!required().check(&Value::Null));
        assert!(!required().check(&Value::Bool(false)));
        assert!(!required().check(&Value::from(Vec::<i32>::new())));
        assert!(required().check(&Value::Bool(true)));
        assert!(required().check(&Value::from(0)));
        assert!(required().check(&Value::from(0.0)));
        assert!(required().check(&Value::from(vec![""])));
    }
}
