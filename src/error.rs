//! The error raised when a run ends with recorded failures

use std::error::Error as StdError;
use std::fmt;

use crate::{Failures, Semigroup};

/// Overall message used when a run fails
pub const DEFAULT_MESSAGE: &str = "Validation failed";

/// One or more named checks failed
///
/// Carries every failure of the run, not just the first one, so a caller can
/// report all rejected fields at once.
///
/// # Examples
///
/// ```
/// use accrue::validate;
///
/// let err = validate(|v| {
///     v.check_value("id", "Id must be positive", -1, || -1 > 0);
///     v.check("name", "Name is required", || !"".is_empty());
/// })
/// .unwrap_err();
///
/// assert_eq!(err.message(), "Validation failed");
/// assert_eq!(err.failures().len(), 2);
/// assert_eq!(
///     err.to_string(),
///     "Validation failed (2 failures)\n  - id: Id must be positive [value: -1]\n  - name: Name is required"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    message: String,
    failures: Failures,
}

impl ValidationError {
    /// Create an error with the default overall message
    pub fn new(failures: Failures) -> Self {
        Self::with_message(DEFAULT_MESSAGE, failures)
    }

    /// Create an error with a custom overall message
    pub fn with_message(message: impl Into<String>, failures: Failures) -> Self {
        ValidationError {
            message: message.into(),
            failures,
        }
    }

    /// The overall message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every failure recorded during the run
    pub fn failures(&self) -> &Failures {
        &self.failures
    }

    /// Consume the error, keeping only the failures
    pub fn into_failures(self) -> Failures {
        self.failures
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.failures.len();
        let noun = if count == 1 { "failure" } else { "failures" };
        write!(f, "{} ({} {})", self.message, count, noun)?;

        for (name, failure) in &self.failures {
            write!(f, "\n  - {}: {}", name, failure)?;
        }

        Ok(())
    }
}

impl StdError for ValidationError {}

// Keeps the left message.
impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError {
            message: self.message,
            failures: self.failures.combine(other.failures),
        }
    }
}
