//! Numeric literals
//!
//! Deciding whether a piece of user input "is a number" is done by one explicit
//! grammar instead of ad-hoc coercion:
//!
//! ```text
//! [+-]? ( digits [ "." digits? ] | "." digits ) ( [eE] [+-]? digits )?
//! ```
//!
//! Surrounding whitespace, `inf`, `NaN`, hex and digit separators are rejected.
//! Literals without a fraction or exponent that fit in an `i64` stay integers;
//! everything else becomes an `f64`.

use std::cmp::Ordering;

/// A parsed numeric value.
///
/// Integers compare exactly against integers; any comparison that involves a
/// float is carried out in `f64`.
///
/// # Example
///
/// ```rust
/// use formcheck::Number;
///
/// assert_eq!(Number::Int(5), Number::Float(5.0));
/// assert!(Number::Int(10) > Number::Float(9.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An integer literal that fits in `i64`.
    Int(i64),
    /// Any other finite literal.
    Float(f64),
}

impl Number {
    /// The value as an `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// Parse a numeric literal.
///
/// Returns `None` when `input` does not match the literal grammar, or when
/// it does but the value is too large for an `f64` (`1e400`).
///
/// # Example
///
/// ```rust
/// use formcheck::{parse_number, Number};
///
/// assert_eq!(parse_number("42"), Some(Number::Int(42)));
/// assert_eq!(parse_number("-1.5e3"), Some(Number::Float(-1500.0)));
/// assert_eq!(parse_number(".5"), Some(Number::Float(0.5)));
/// assert_eq!(parse_number("12abc"), None);
/// assert_eq!(parse_number(" 1"), None);
/// ```
pub fn parse_number(input: &str) -> Option<Number> {
    let shape = scan(input.as_bytes())?;
    if shape.integral {
        if let Ok(i) = input.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }
    let f = input.parse::<f64>().ok()?;
    f.is_finite().then_some(Number::Float(f))
}

/// Whether `input` is written as a numeric literal.
///
/// This is the grammar alone: `1e400` is numeric even though
/// [`parse_number`] cannot represent it.
pub fn is_numeric(input: &str) -> bool {
    scan(input.as_bytes()).is_some()
}

struct Shape {
    integral: bool,
}

fn scan(bytes: &[u8]) -> Option<Shape> {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    let mut has_point = false;
    if bytes.get(pos) == Some(&b'.') {
        has_point = true;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mut has_exponent = false;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        has_exponent = true;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }

    (pos == bytes.len()).then_some(Shape {
        integral: !has_point && !has_exponent,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
