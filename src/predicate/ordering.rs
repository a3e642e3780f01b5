//! Type-adaptive ordering predicates
//!
//! Each comparison first decides what it is comparing:
//!
//! 1. With a [`DateFormat`], both the value and the bound are parsed as dates
//!    under that format. If either does not parse, the check fails; it never
//!    falls back to another mode.
//! 2. Otherwise a numeric value (or numeric string) is compared as a number.
//! 3. Otherwise the value is measured by its length: characters for strings,
//!    elements for collections.
//!
//! In modes 2 and 3 the bound must be a number or a numeric string.

use std::cmp::Ordering;

use super::combinators::{And, Predicate};
use crate::date::DateFormat;
use crate::Value;

/// Compare `value` against `bound`, classifying both first.
///
/// `None` means the operands could not be brought into the same mode.
pub(crate) fn compare(
    value: &Value,
    bound: &Value,
    format: Option<&DateFormat>,
) -> Option<Ordering> {
    match format {
        Some(format) => {
            let lhs = value.to_text().and_then(|text| format.parse(&text));
            let rhs = bound.to_text().and_then(|text| format.parse(&text));
            match (lhs, rhs) {
                (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "date comparison failed closed: {:?} vs {:?} under format {:?}",
                        value,
                        bound,
                        format.pattern()
                    );
                    None
                }
            }
        }
        None => {
            let (Some(lhs), Some(rhs)) = (value.magnitude(), bound.as_number()) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "comparison failed closed: {:?} vs non-numeric or unmeasurable {:?}",
                    value,
                    bound
                );
                return None;
            };
            lhs.partial_cmp(&rhs)
        }
    }
}

/// Value must be greater than or equal to the bound.
#[derive(Clone, Debug, PartialEq)]
pub struct AtLeast {
    bound: Value,
    format: Option<DateFormat>,
}

impl AtLeast {
    /// Compare as dates under `format`.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Predicate<Value> for AtLeast {
    fn check(&self, value: &Value) -> bool {
        matches!(
            compare(value, &self.bound, self.format.as_ref()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

/// Create a predicate that checks `value >= bound` (inclusive).
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(at_least(5).check(&Value::from(10)));
/// assert!(at_least(5).check(&Value::from(5)));
/// assert!(!at_least(10).check(&Value::from(5)));
///
/// // strings without a numeric reading are measured by length
/// assert!(at_least(3).check(&Value::from("hello")));
///
/// let p = at_least("2025-01-01").with_format("YYYY-MM-DD");
/// assert!(p.check(&Value::from("2025-01-17")));
/// ```
pub fn at_least(bound: impl Into<Value>) -> AtLeast {
    AtLeast {
        bound: bound.into(),
        format: None,
    }
}

/// Value must be less than or equal to the bound.
#[derive(Clone, Debug, PartialEq)]
pub struct AtMost {
    bound: Value,
    format: Option<DateFormat>,
}

impl AtMost {
    /// Compare as dates under `format`.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Predicate<Value> for AtMost {
    fn check(&self, value: &Value) -> bool {
        matches!(
            compare(value, &self.bound, self.format.as_ref()),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

/// Create a predicate that checks `value <= bound` (inclusive).
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(at_most(10).check(&Value::from(5)));
/// assert!(!at_most(10).check(&Value::from(15)));
/// assert!(at_most(8).check(&Value::from("password")));
/// ```
pub fn at_most(bound: impl Into<Value>) -> AtMost {
    AtMost {
        bound: bound.into(),
        format: None,
    }
}

/// Value must be strictly less than the bound.
#[derive(Clone, Debug, PartialEq)]
pub struct LessThan {
    bound: Value,
    format: Option<DateFormat>,
}

impl LessThan {
    /// Compare as dates under `format`.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Predicate<Value> for LessThan {
    fn check(&self, value: &Value) -> bool {
        compare(value, &self.bound, self.format.as_ref()) == Some(Ordering::Less)
    }
}

/// Create a predicate that checks `value < bound` (exclusive).
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(less_than(10).check(&Value::from(5)));
/// assert!(!less_than(10).check(&Value::from(10)));
/// ```
pub fn less_than(bound: impl Into<Value>) -> LessThan {
    LessThan {
        bound: bound.into(),
        format: None,
    }
}

/// Value must be strictly greater than the bound.
#[derive(Clone, Debug, PartialEq)]
pub struct GreaterThan {
    bound: Value,
    format: Option<DateFormat>,
}

impl GreaterThan {
    /// Compare as dates under `format`.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Predicate<Value> for GreaterThan {
    fn check(&self, value: &Value) -> bool {
        compare(value, &self.bound, self.format.as_ref()) == Some(Ordering::Greater)
    }
}

/// Create a predicate that checks `value > bound` (exclusive).
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// assert!(greater_than(5).check(&Value::from(10)));
/// assert!(!greater_than(5).check(&Value::from(5)));
/// ```
pub fn greater_than(bound: impl Into<Value>) -> GreaterThan {
    GreaterThan {
        bound: bound.into(),
        format: None,
    }
}

/// Inclusive range: `min <= value <= max`.
pub type InRange = And<AtLeast, AtMost>;

/// Exclusive range: `min < value < max`.
pub type StrictlyBetween = And<GreaterThan, LessThan>;

/// Create a predicate that checks `min <= value <= max`.
///
/// Pass a format to compare dates; both bounds use it.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// let p = in_range(5, 10, None);
/// assert!(p.check(&Value::from(5)));
/// assert!(p.check(&Value::from(7)));
/// assert!(!p.check(&Value::from(4)));
///
/// let p = in_range("2025-01-01", "2025-01-03", Some("YYYY-MM-DD"));
/// assert!(p.check(&Value::from("2025-01-02")));
/// ```
pub fn in_range(min: impl Into<Value>, max: impl Into<Value>, format: Option<&str>) -> InRange {
    let format = format.map(DateFormat::new);
    And(
        AtLeast {
            bound: min.into(),
            format: format.clone(),
        },
        AtMost {
            bound: max.into(),
            format,
        },
    )
}

/// Create a predicate that checks `min < value < max`.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// let p = strictly_between(5, 10, None);
/// assert!(p.check(&Value::from(7)));
/// assert!(!p.check(&Value::from(5)));
/// assert!(!p.check(&Value::from(10)));
/// ```
pub fn strictly_between(
    min: impl Into<Value>,
    max: impl Into<Value>,
    format: Option<&str>,
) -> StrictlyBetween {
    let format = format.map(DateFormat::new);
    And(
        GreaterThan {
            bound: min.into(),
            format: format.clone(),
        },
        LessThan {
            bound: max.into(),
            format,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: impl Into<Value>) -> Value {
        value.into()
    }

    #[test]
    fn test_numeric_mode() {
        assert!(at_least(5).check(&v(10)));
        assert!(!at_least(10).check(&v(5)));
        assert!(at_least(5.5).check(&v("6")));
        assert!(at_most("10").check(&v(10)));
        assert!(less_than(0).check(&v("-0.5")));
        assert!(greater_than(1e2).check(&v("1e3")));
    }

    #[test]
    fn test_length_mode() {
        assert!(at_least(3).check(&v("hello")));
        assert!(!at_least(6).check(&v("hello")));
        assert!(at_most(5).check(&v("héllo")));
        assert!(greater_than(1).check(&v(vec!["a", "b"])));
        assert!(at_most(0).check(&Value::Null));
    }

    #[test]
    fn test_numeric_string_is_not_measured_by_length() {
        // "100" reads as one hundred, not as three characters
        assert!(!at_most(5).check(&v("100")));
        assert!(at_least(50).check(&v("100")));
    }

    #[test]
    fn test_non_numeric_bound_fails_closed() {
        assert!(!at_least("abc").check(&v(10)));
        assert!(!at_most("abc").check(&v("hello")));
        assert!(!less_than(Value::Null).check(&v(1)));
    }

    #[test]
    fn test_boolean_value_fails_closed() {
        assert!(!at_least(0).check(&Value::Bool(true)));
        assert!(!at_most(10).check(&Value::Bool(false)));
    }

    #[test]
    fn test_date_mode() {
        let p = at_least("2025-01-01").with_format("YYYY-MM-DD");
        assert!(p.check(&v("2025-01-17")));
        assert!(p.check(&v("2025-01-01")));
        assert!(!p.check(&v("2024-12-31")));

        let p = at_most("2025-01-01").with_format("YYYY-MM-DD");
        assert!(p.check(&v("2024-12-31")));

        let p = less_than("2025-01-01").with_format("YYYY-MM-DD");
        assert!(p.check(&v("2024-12-31")));
        assert!(!p.check(&v("2025-01-01")));

        let p = greater_than("2025-01-01").with_format("YYYY-MM-DD");
        assert!(p.check(&v("2025-01-02")));
    }

    #[test]
    fn test_date_mode_never_falls_back() {
        let p = at_least("2025-01-01").with_format("YYYY-MM-DD");
        assert!(!p.check(&v("not a date")));
        assert!(!p.check(&v(99999)));

        let p = at_least("garbage").with_format("YYYY-MM-DD");
        assert!(!p.check(&v("2025-01-17")));
    }

    #[test]
    fn test_incomplete_time_formats_fail_closed() {
        let early = v("2025-01-17 08");
        let late = "2025-01-17 20";
        assert!(!less_than(late).with_format("YYYY-MM-DD HH").check(&early));
        assert!(!at_least(late).with_format("YYYY-MM-DD HH").check(&early));
        assert!(!at_most(late).with_format("YYYY-MM-DD HH").check(&early));

        let later = v("17.01.2025 11:00");
        let p = greater_than("17.01.2025 09:00").with_format("DD.MM.YYYY hh:mm");
        assert!(!p.check(&later));
        let p = less_than("17.01.2025 09:00").with_format("DD.MM.YYYY hh:mm");
        assert!(!p.check(&later));
    }

    #[test]
    fn test_date_time_mode_keeps_the_time() {
        let p = greater_than("17.01.2025 09:00 AM").with_format("DD.MM.YYYY hh:mm A");
        assert!(p.check(&v("17.01.2025 11:00 AM")));
        assert!(!p.check(&v("17.01.2025 08:59 AM")));

        let p = less_than("2025-01-17 20:00").with_format("YYYY-MM-DD HH:mm");
        assert!(p.check(&v("2025-01-17 08:00")));
    }

    #[test]
    fn test_date_mode_orders_by_calendar_not_text() {
        let p = less_than("02.01.2025").with_format("DD.MM.YYYY");
        assert!(p.check(&v("31.12.2024")));
    }

    #[test]
    fn test_in_range() {
        let p = in_range(5, 10, None);
        assert!(p.check(&v(7)));
        assert!(p.check(&v(5)));
        assert!(p.check(&v(10)));
        assert!(!p.check(&v(4)));
        assert!(!p.check(&v(11)));

        let p = in_range("2025-01-01", "2025-01-03", Some("YYYY-MM-DD"));
        assert!(p.check(&v("2025-01-02")));
        assert!(!p.check(&v("2025-01-04")));
    }

    #[test]
    fn test_strictly_between() {
        let p = strictly_between(5, 10, None);
        assert!(p.check(&v(7)));
        assert!(!p.check(&v(5)));
        assert!(!p.check(&v(10)));

        let p = strictly_between("2025-01-01", "2025-01-03", Some("YYYY-MM-DD"));
        assert!(p.check(&v("2025-01-02")));
        assert!(!p.check(&v("2025-01-03")));
    }

    #[test]
    fn test_overflowing_numeric_string_fails_closed() {
        assert!(!at_least(5).check(&v("1e400")));
        assert!(!at_most(10).check(&v("1e400")));
        assert!(!greater_than(0).check(&v("-1e400")));
    }

    #[test]
    fn test_nan_never_compares() {
        assert!(!at_least(0).check(&v(f64::NAN)));
        assert!(!at_most(0).check(&v(f64::NAN)));
    }
}
