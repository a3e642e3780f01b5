//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
/// use formcheck::Value;
///
/// let is_percentage = at_least(0).and(at_most(100));
/// assert!(is_percentage.check(&Value::from(25)));
/// assert!(!is_percentage.check(&Value::from(-5)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
///
/// Predicates that accept several input types (most string predicates check
/// both `str` and [`Value`](crate::Value)) need the input type spelled out
/// when chained: `PredicateExt::<str>::and(email(), not_equal_to(""))`.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::predicate::*;
    /// use formcheck::Value;
    ///
    /// let p = greater_than(0).and(less_than(100));
    /// assert!(p.check(&Value::from(50)));
    /// assert!(!p.check(&Value::from(0)));
    /// assert!(!p.check(&Value::from(100)));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::predicate::*;
    /// use formcheck::Value;
    ///
    /// let p = less_than(0).or(greater_than(100));
    /// assert!(p.check(&Value::from(-5)));
    /// assert!(p.check(&Value::from(150)));
    /// assert!(!p.check(&Value::from(50)));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::predicate::*;
    /// use formcheck::Value;
    ///
    /// let p = PredicateExt::<Value>::not(equal_to("admin"));
    /// assert!(p.check(&Value::from("guest")));
    /// assert!(!p.check(&Value::from("admin")));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

// Send + Sync are auto-derived when P1 and P2 are Send + Sync

/// OR combinator - either predicate must be true.
#[derive(Clone, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
