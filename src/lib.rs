//! # Accrue
//!
//! Run a batch of named checks and collect every failure, not just the first.
//!
//! A registration block receives a fresh [`Validator`] and calls
//! [`check`](Validator::check) as many times as it likes. Each predicate runs
//! immediately, in order, and each one that returns `false` leaves a
//! [`Failure`] under its name. When the block is done the run ends in one of
//! two ways, depending on the entry point:
//!
//! - [`validate`] returns `Err(ValidationError)` with every failure, for
//!   constructors that must refuse invalid input.
//! - [`validation`] returns a [`Validation`] value, for callers that branch
//!   on the failed names, for instance to repair them.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{validate, ValidationError};
//!
//! const APPLE_TYPES: [&str; 3] = ["Cortland", "Granny Smith", "Fuji"];
//!
//! #[derive(Debug)]
//! struct Apple {
//!     id: i64,
//!     weight: f64,
//!     kind: String,
//! }
//!
//! impl Apple {
//!     fn new(id: i64, weight: f64, kind: &str) -> Result<Self, ValidationError> {
//!         validate(|v| {
//!             v.check_value("id", "Id must be positive", id, || id > 0);
//!             v.check_value("weight", "Weight must be between 1 and 25", weight, || {
//!                 (1.0..=25.0).contains(&weight)
//!             });
//!             v.check_value("type", "Unknown apple type", kind, || {
//!                 APPLE_TYPES.contains(&kind)
//!             });
//!         })?;
//!         Ok(Apple { id, weight, kind: kind.to_string() })
//!     }
//! }
//!
//! let err = Apple::new(-1, 50.0, "Granny Green").unwrap_err();
//! assert_eq!(err.failures().len(), 3);
//! assert_eq!(err.failures()["id"].message(), "Id must be positive");
//! assert_eq!(err.failures()["type"].value().unwrap(), &"Granny Green");
//!
//! assert!(Apple::new(1, 10.3, "Cortland").is_ok());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for evaluated checks, recorded failures
//!   and finished runs.
//! - `serde`: `Serialize`/`Deserialize` for failure reports. Failures keep
//!   their first-failure order as a JSON object keyed by name.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use accrue::{validate, ValidationError};
//!
//! let err = validate(|v| {
//!     v.check_value("id", "Id must be positive", -1, || false);
//! })
//! .unwrap_err();
//!
//! let json = serde_json::to_string(&err).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"message":"Validation failed","failures":{"id":{"message":"Id must be positive","value":{"int":-1}}}}"#
//! );
//!
//! let back: ValidationError = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, err);
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod failure;
pub mod run;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::{ValidationError, DEFAULT_MESSAGE};
pub use failure::{Failure, FailureValue, Failures};
pub use run::{try_validate, try_validation, validate, validation};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::failure::{Failure, FailureValue, Failures};
    pub use crate::run::{try_validate, try_validation, validate, validation};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::Validator;
}
