//! Outcome of a validation run, reported as a value
//!
//! [`Validation`] is what [`validation`](crate::validation()) returns instead of
//! raising: either `Success` holding the finished validator, or `Failure`
//! holding the [`ValidationError`] with every recorded failure. Callers branch
//! on it, typically to repair the failed fields by name.
//!
//! # Examples
//!
//! ## Branching on the outcome
//!
//! ```
//! use accrue::{validation, Validation};
//!
//! let mut a = -1;
//! let b = 9;
//!
//! let outcome = validation(|v| {
//!     v.check("a", "a must be positive", || a > 0);
//!     v.check("b", "b must be a positive multiple of 3", || b > 0 && b % 3 == 0);
//! });
//!
//! match &outcome {
//!     Validation::Success(_) => {}
//!     Validation::Failure(err) => {
//!         if err.failures().contains("a") {
//!             a = 0;
//!         }
//!     }
//! }
//!
//! assert_eq!(a, 0);
//! assert!(outcome.failed_on("a"));
//! assert!(!outcome.failed_on("b"));
//! ```
//!
//! ## Combining outcomes
//!
//! ```
//! use accrue::validation;
//!
//! let left = validation(|v| {
//!     v.check("id", "Id must be positive", || false);
//! });
//! let right = validation(|v| {
//!     v.check("weight", "Weight out of range", || false);
//! });
//!
//! let both = left.and(right);
//! assert_eq!(both.failures().map(|f| f.len()), Some(2));
//! ```

use crate::{Semigroup, ValidationError};

/// Either a success value or the accumulated failures
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value (a [`Semigroup`] when outcomes are combined)
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T, E> {
    /// Every check passed
    Success(T),
    /// At least one check failed
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful outcome
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed outcome
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create an outcome from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this outcome to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this outcome is a success
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this outcome is a failure
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, if any
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// The failure value, if any
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Collapse both branches into a single value
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::validation;
    ///
    /// let summary = validation(|v| {
    ///     v.check("id", "Id must be positive", || false);
    /// })
    /// .fold(|_| "ok".to_string(), |err| err.to_string());
    ///
    /// assert!(summary.contains("id: Id must be positive"));
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two outcomes, accumulating failures using the Semigroup instance
    ///
    /// Both successful gives a success with both values. If either or both
    /// failed, the failures are combined with `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

impl<T> Validation<T, ValidationError> {
    /// The recorded failures, or `None` on success
    pub fn failures(&self) -> Option<&crate::Failures> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error.failures()),
        }
    }

    /// Whether the check named `name` failed
    pub fn failed_on(&self, name: &str) -> bool {
        self.failures().is_some_and(|failures| failures.contains(name))
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Failure, Failures};

    fn error(names: &[&str]) -> ValidationError {
        ValidationError::new(
            names
                .iter()
                .map(|name| (*name, Failure::new(format!("{} failed", name))))
                .collect::<Failures>(),
        )
    }

    #[test]
    fn test_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
    }

    #[test]
    fn test_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert!(v.is_failure());
        assert!(!v.is_success());
    }

    #[test]
    fn test_result_round_trip() {
        assert_eq!(Validation::from(Ok::<_, String>(1)).into_result(), Ok(1));
        assert_eq!(
            Validation::from(Err::<i32, _>("e".to_string())).into_result(),
            Err("e".to_string())
        );
    }

    #[test]
    fn test_ok_and_err() {
        assert_eq!(Validation::<_, String>::success(1).ok(), Some(1));
        assert_eq!(Validation::<i32, _>::failure("e").err(), Some("e"));
        assert_eq!(Validation::<i32, _>::failure("e").ok(), None);
    }

    #[test]
    fn test_fold_both_branches() {
        let failed = Validation::<i32, &str>::failure("bad");
        assert_eq!(failed.fold(|n| n.to_string(), |e| e.to_uppercase()), "BAD");

        let passed = Validation::<i32, &str>::success(7);
        assert_eq!(passed.fold(|n| n.to_string(), |e| e.to_uppercase()), "7");
    }

    #[test]
    fn test_and_accumulates_failures() {
        let left = Validation::<(), _>::failure(error(&["a"]));
        let right = Validation::<(), _>::failure(error(&["b"]));

        let both = left.and(right);
        let names: Vec<_> = both.failures().unwrap().names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_and_one_side_fails() {
        let left = Validation::<_, ValidationError>::success(1);
        let right = Validation::<i32, _>::failure(error(&["b"]));
        let both = left.and(right);
        assert!(both.failed_on("b"));
        assert!(!both.failed_on("a"));
    }

    #[test]
    fn test_failures_on_success() {
        let v = Validation::<_, ValidationError>::success(());
        assert!(v.failures().is_none());
        assert!(!v.failed_on("anything"));
    }
}
