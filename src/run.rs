//! Entry points that run a registration block against a fresh validator
//!
//! Two modes are offered, and each has a fallible variant for blocks whose
//! predicates can error:
//!
//! | | infallible block | block returning `Result<(), E>` |
//! |---|---|---|
//! | raise on failure | [`validate`] | [`try_validate`] |
//! | failure as a value | [`validation`] | [`try_validation`] |
//!
//! Every call builds its own [`Validator`], runs the block to completion and
//! then decides once: no failures means success, anything recorded means a
//! [`ValidationError`]. A predicate error returned through `?` ends the block
//! early and reaches the caller unchanged. A panicking predicate unwinds
//! through all four functions untouched.

use crate::{Validation, ValidationError, Validator};

/// Run the checks in `block`, failing with every recorded failure
///
/// Meant for constructors and other places where invalid input must abort
/// the operation.
///
/// # Examples
///
/// ```
/// use accrue::{validate, ValidationError};
///
/// struct Temperature(f64);
///
/// impl Temperature {
///     fn new(celsius: f64) -> Result<Self, ValidationError> {
///         validate(|v| {
///             v.check_value("celsius", "Below absolute zero", celsius, || celsius >= -273.15);
///             v.check_value("celsius", "Not a number", celsius, || !celsius.is_nan());
///         })?;
///         Ok(Temperature(celsius))
///     }
/// }
///
/// assert!(Temperature::new(21.5).is_ok());
/// let err = Temperature::new(-300.0).err().unwrap();
/// assert_eq!(err.failures()["celsius"].message(), "Below absolute zero");
/// ```
pub fn validate<F>(block: F) -> Result<Validator, ValidationError>
where
    F: FnOnce(&mut Validator),
{
    let mut validator = Validator::new();
    block(&mut validator);
    validator.finish()
}

/// Run fallible checks, failing with either the predicate error or the validation error
///
/// The validation error is converted into `E`, so a constructor can return
/// its own error type. Predicate errors are passed through as they are.
///
/// # Examples
///
/// ```
/// use accrue::{try_validate, ValidationError};
/// use std::num::ParseIntError;
///
/// #[derive(Debug)]
/// enum FormError {
///     Parse(ParseIntError),
///     Invalid(ValidationError),
/// }
///
/// impl From<ParseIntError> for FormError {
///     fn from(e: ParseIntError) -> Self {
///         FormError::Parse(e)
///     }
/// }
///
/// impl From<ValidationError> for FormError {
///     fn from(e: ValidationError) -> Self {
///         FormError::Invalid(e)
///     }
/// }
///
/// fn check_age(input: &str) -> Result<(), FormError> {
///     try_validate(|v| {
///         v.try_check("age", "Must be 18 or older", || {
///             input.parse::<u32>().map(|age| age >= 18)
///         })?;
///         Ok::<_, FormError>(())
///     })?;
///     Ok(())
/// }
///
/// assert!(check_age("30").is_ok());
/// assert!(matches!(check_age("12"), Err(FormError::Invalid(_))));
/// assert!(matches!(check_age("twelve"), Err(FormError::Parse(_))));
/// ```
pub fn try_validate<F, E>(block: F) -> Result<Validator, E>
where
    F: FnOnce(&mut Validator) -> Result<(), E>,
    E: From<ValidationError>,
{
    let mut validator = Validator::new();
    block(&mut validator)?;
    Ok(validator.finish()?)
}

/// Run the checks in `block`, reporting failure as a value
///
/// # Examples
///
/// ```
/// use accrue::validation;
///
/// let weight = 50.0;
/// let outcome = validation(|v| {
///     v.check_value("weight", "Weight must be between 1 and 25", weight, || {
///         (1.0..=25.0).contains(&weight)
///     });
/// });
///
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.failures().unwrap()["weight"].value().unwrap(), &50.0);
/// ```
pub fn validation<F>(block: F) -> Validation<Validator, ValidationError>
where
    F: FnOnce(&mut Validator),
{
    Validation::from_result(validate(block))
}

/// Run fallible checks, reporting validation failure as a value
///
/// The outer `Err` only ever carries a predicate error; validation failures
/// always arrive as `Ok(Validation::Failure(_))`.
///
/// # Examples
///
/// ```
/// use accrue::try_validation;
/// use std::num::ParseIntError;
///
/// let outcome = try_validation(|v| {
///     v.try_check("port", "Port must be non-zero", || "0".parse::<u16>().map(|p| p != 0))?;
///     Ok::<_, ParseIntError>(())
/// });
/// assert!(outcome.unwrap().failed_on("port"));
///
/// let outcome = try_validation(|v| {
///     v.try_check("port", "Port must be non-zero", || "zero".parse::<u16>().map(|p| p != 0))?;
///     Ok::<_, ParseIntError>(())
/// });
/// assert!(outcome.is_err());
/// ```
pub fn try_validation<F, E>(block: F) -> Result<Validation<Validator, ValidationError>, E>
where
    F: FnOnce(&mut Validator) -> Result<(), E>,
{
    let mut validator = Validator::new();
    block(&mut validator)?;
    Ok(Validation::from_result(validator.finish()))
}
