//! The accumulator that registers named checks
//!
//! A [`Validator`] lives for exactly one run. Checks are evaluated as soon as
//! they are registered, in registration order, and every check that returns
//! `false` leaves a [`Failure`] behind under its name. Nothing stops the run
//! early except a predicate that itself errors (see [`Validator::try_check`])
//! or panics.
//!
//! Most callers never build one directly; [`validate`](crate::validate()) and
//! [`validation`](crate::validation()) hand a fresh validator to the
//! registration block and turn it into a result afterwards.
//!
//! # Examples
//!
//! ```
//! use accrue::Validator;
//!
//! let (a, b) = (-1, 9);
//!
//! let mut v = Validator::new();
//! v.check("a", "a must be positive", || a > 0)
//!     .check("b", "b must be a positive multiple of 3", || b > 0 && b % 3 == 0);
//!
//! assert!(!v.is_valid());
//! assert_eq!(v.checks_run(), 2);
//! assert!(v.failures().contains("a"));
//! assert!(!v.failures().contains("b"));
//! ```

use crate::{Failure, FailureValue, Failures, ValidationError};

/// Collects the failures of one validation run
#[derive(Debug, Default)]
pub struct Validator {
    failures: Failures,
    checks_run: usize,
}

impl Validator {
    /// Create a validator with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `predicate` and record a failure under `name` if it returns `false`
    ///
    /// A passing check never removes a failure recorded earlier under the
    /// same name. A failing one replaces it.
    #[inline]
    pub fn check<F>(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        let passed = predicate();
        self.record(name.into(), passed, || Failure::from_parts(message.into(), None))
    }

    /// Like [`check`](Self::check), attaching `value` to the failure for diagnostics
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validator;
    ///
    /// let kind = "Granny Green";
    /// let mut v = Validator::new();
    /// v.check_value("type", "Unknown apple type", kind, || {
    ///     ["Cortland", "Granny Smith", "Fuji"].contains(&kind)
    /// });
    ///
    /// assert_eq!(v.failures()["type"].value().unwrap(), &"Granny Green");
    /// ```
    #[inline]
    pub fn check_value<V, F>(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        value: V,
        predicate: F,
    ) -> &mut Self
    where
        V: Into<FailureValue>,
        F: FnOnce() -> bool,
    {
        let passed = predicate();
        self.record(name.into(), passed, || {
            Failure::from_parts(message.into(), Some(value.into()))
        })
    }

    /// Evaluate a fallible predicate
    ///
    /// `Ok(false)` records a failure exactly like [`check`](Self::check).
    /// `Err(e)` is handed back untouched and nothing is recorded; using `?`
    /// on it inside a registration block abandons the remaining checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validator;
    ///
    /// let mut v = Validator::new();
    /// let parsed = v.try_check("port", "Port must be non-zero", || {
    ///     "eighty".parse::<u16>().map(|p| p != 0)
    /// });
    ///
    /// assert!(parsed.is_err());
    /// assert!(v.is_valid());
    /// ```
    pub fn try_check<F, E>(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> Result<&mut Self, E>
    where
        F: FnOnce() -> Result<bool, E>,
    {
        let passed = predicate()?;
        Ok(self.record(name.into(), passed, || {
            Failure::from_parts(message.into(), None)
        }))
    }

    /// Like [`try_check`](Self::try_check), attaching `value` to the failure
    pub fn try_check_value<V, F, E>(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        value: V,
        predicate: F,
    ) -> Result<&mut Self, E>
    where
        V: Into<FailureValue>,
        F: FnOnce() -> Result<bool, E>,
    {
        let passed = predicate()?;
        Ok(self.record(name.into(), passed, || {
            Failure::from_parts(message.into(), Some(value.into()))
        }))
    }

    /// Copy the failures of another run in, qualifying each name as `prefix.name`
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{validate, Validator};
    ///
    /// let stem = validate(|v| {
    ///     v.check_value("length", "Stem too long", 12, || 12 < 5);
    /// });
    ///
    /// let mut v = Validator::new();
    /// if let Err(err) = stem {
    ///     v.nest("stem", err.into_failures());
    /// }
    /// assert!(v.failures().contains("stem.length"));
    /// ```
    pub fn nest(&mut self, prefix: &str, failures: Failures) -> &mut Self {
        for (name, failure) in failures {
            let qualified = format!("{}.{}", prefix, name);

            #[cfg(feature = "tracing")]
            tracing::debug!(check = %qualified, reason = failure.message(), "nested failure recorded");

            self.failures.insert(qualified, failure);
        }
        self
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &Failures {
        &self.failures
    }

    /// `true` while no check has failed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of predicates that produced a verdict, passing or failing
    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    /// Consume the validator, keeping only its failures
    pub fn into_failures(self) -> Failures {
        self.failures
    }

    /// End the run
    ///
    /// Returns the validator when nothing failed, otherwise a
    /// [`ValidationError`] carrying every recorded failure.
    pub fn finish(self) -> Result<Self, ValidationError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            checks = self.checks_run,
            failures = self.failures.len(),
            "validation run finished"
        );

        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError::new(self.failures))
        }
    }

    fn record<F>(&mut self, name: String, passed: bool, failure: F) -> &mut Self
    where
        F: FnOnce() -> Failure,
    {
        self.checks_run += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(check = %name, passed, "check evaluated");

        if !passed {
            let failure = failure();

            #[cfg(feature = "tracing")]
            tracing::debug!(check = %name, reason = failure.message(), "check failed");

            self.failures.insert(name, failure);
        }
        self
    }
}
