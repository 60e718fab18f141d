//! Semigroup trait for combining failures
//!
//! A Semigroup is a type with an associative binary operation. It is what
//! [`Validation::and`](crate::Validation::and) uses to merge the failures of
//! two independent runs into one report.
//!
//! # Examples
//!
//! ```
//! use accrue::{Failure, Failures, Semigroup};
//!
//! let address: Failures = vec![("zip", Failure::new("Zip code is required"))]
//!     .into_iter()
//!     .collect();
//! let contact: Failures = vec![("email", Failure::new("Email must contain @"))]
//!     .into_iter()
//!     .collect();
//!
//! let all = address.combine(contact);
//! assert_eq!(all.names().collect::<Vec<_>>(), vec!["zip", "email"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
