//! Input values
//!
//! Raw field values arrive in a handful of shapes: nothing at all, a boolean,
//! a number, a string, or a collection. [`Value`] captures those shapes so
//! that the predicates can classify input without knowing where it came from.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::number::{is_numeric, parse_number, Number};

/// A raw input value.
///
/// # Example
///
/// ```rust
/// use formcheck::Value;
///
/// assert_eq!(Value::from("abc"), Value::Str("abc".to_string()));
/// assert_eq!(Value::from(None::<i32>), Value::Null);
/// assert_eq!(Value::from(vec![1, 2]), Value::List(vec![Value::Int(1), Value::Int(2)]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered collection.
    List(Vec<Value>),
    /// A keyed collection.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The value as a number.
    ///
    /// Numeric variants convert directly; strings go through [`parse_number`].
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Str(s) => parse_number(s),
            _ => None,
        }
    }

    /// Textual form of scalars: strings as-is, numbers in decimal.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s)),
            Value::Int(i) => Some(Cow::Owned(i.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            _ => None,
        }
    }

    /// The quantity this value is measured by in ordered comparisons.
    ///
    /// Numbers and numeric strings measure as themselves, other strings by
    /// their character count, collections by their element count and `Null`
    /// as zero. Booleans have no magnitude, and neither do numeric strings too
    /// large for an `f64`: they are numbers, so they are never measured by
    /// length.
    pub fn magnitude(&self) -> Option<Number> {
        match self {
            Value::Null => Some(Number::Int(0)),
            Value::Bool(_) => None,
            Value::Int(_) | Value::Float(_) => self.as_number(),
            Value::Str(s) if is_numeric(s) => parse_number(s),
            Value::Str(s) => Some(Number::Int(count(s.chars().count()))),
            Value::List(items) => Some(Number::Int(count(items.len()))),
            Value::Map(entries) => Some(Number::Int(count(entries.len()))),
        }
    }

    /// Whether this value is blank: `Null`, `false`, a whitespace-only string
    /// or an empty collection.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null | Value::Bool(false) => true,
            Value::Str(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Bool(true) | Value::Int(_) | Value::Float(_) => false,
        }
    }

    /// Boolean reading of the value used by loose equality.
    ///
    /// Falsy: `Null`, `false`, `0`, `0.0`, `""`, `"0"` and empty collections.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::List(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
        }
    }

    /// Loose equality.
    ///
    /// Values that both read as numbers compare numerically, so `5` equals
    /// `"5"`. Booleans compare against the other side's truthiness. `Null`
    /// equals `Null`, `""` and empty collections. Collections compare
    /// element-wise, strings byte-wise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::Value;
    ///
    /// assert!(Value::from(5).loose_eq(&Value::from("5")));
    /// assert!(Value::from("1e1").loose_eq(&Value::from(10)));
    /// assert!(!Value::from("abc").loose_eq(&Value::from(0)));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(b), other) | (other, Value::Bool(b)) => other.is_truthy() == *b,
            (Value::Null, other) | (other, Value::Null) => match other {
                Value::Str(s) => s.is_empty(),
                Value::List(items) => items.is_empty(),
                Value::Map(entries) => entries.is_empty(),
                _ => false,
            },
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.loose_eq(y)))
            }
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                (None, None) => matches!((a, b), (Value::Str(x), Value::Str(y)) if x == y),
                _ => false,
            },
        }
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
