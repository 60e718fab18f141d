//! Assertion macros for tests of validation code
//!
//! # Examples
//!
//! ```rust
//! use accrue::{assert_failed_on, assert_failure, assert_success, validation};
//!
//! let ok = validation(|v| {
//!     v.check("id", "Id must be positive", || 1 > 0);
//! });
//! assert_success!(ok);
//!
//! let bad = validation(|v| {
//!     v.check("id", "Id must be positive", || -1 > 0);
//!     v.check("type", "Unknown apple type", || false);
//! });
//! assert_failure!(bad);
//! assert_failed_on!(bad, "id", "type");
//! ```

/// Assert that an outcome is a success.
///
/// This macro will panic if the outcome is a `Failure`. The outcome is only
/// borrowed.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(ref e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a failure.
///
/// This macro will panic if the outcome is a `Success`. The outcome is only
/// borrowed.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(ref v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome failed on every listed name.
///
/// Panics if the outcome is a `Success`, or if any listed name has no
/// recorded failure. Other failed names are allowed.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_failed_on, validation};
///
/// let outcome = validation(|v| {
///     v.check("a", "a must be positive", || -1 > 0);
///     v.check("b", "b must be even", || 3 % 2 == 0);
/// });
/// assert_failed_on!(outcome, "a");
/// assert_failed_on!(outcome, "a", "b");
/// ```
#[macro_export]
macro_rules! assert_failed_on {
    ($validation:expr, $($name:expr),+ $(,)?) => {
        match $validation {
            $crate::Validation::Failure(ref error) => {
                $(
                    if !error.failures().contains($name) {
                        panic!(
                            "Expected failure on `{}`, recorded failures: {:?}",
                            $name,
                            error.failures().names().collect::<::std::vec::Vec<_>>()
                        );
                    }
                )+
            }
            $crate::Validation::Success(ref v) => {
                panic!(
                    "Expected Failure on {:?}, got Success: {:?}",
                    [$($name),+],
                    v
                );
            }
        }
    };
}
