//! Failure records collected during a validation run
//!
//! A run produces at most one [`Failure`] per property name. The failures are
//! kept in a [`Failures`] set, which remembers the order in which names first
//! failed and lets a later failure under the same name replace the earlier one.
//!
//! # Examples
//!
//! ```
//! use accrue::{Failure, Failures};
//!
//! let mut failures = Failures::new();
//! failures.insert("id", Failure::with_value("Id must be positive", -1));
//! failures.insert("type", Failure::new("Unknown apple type"));
//!
//! assert_eq!(failures.len(), 2);
//! assert_eq!(failures["id"].message(), "Id must be positive");
//! assert_eq!(failures.names().collect::<Vec<_>>(), vec!["id", "type"]);
//! ```

use std::fmt;
use std::ops::Index;

use crate::Semigroup;

/// The offending value attached to a failure, kept for diagnostics only
///
/// Values are never inspected by the validator. They exist so that a report
/// can show what was rejected next to why it was rejected.
///
/// With the `serde` feature a value serializes externally tagged, e.g.
/// `{"int":-1}` or `{"text":"Granny Green"}`, so the variant survives a round
/// trip.
///
/// # Examples
///
/// ```
/// use accrue::FailureValue;
///
/// assert_eq!(FailureValue::from(-1), FailureValue::Int(-1));
/// assert_eq!(FailureValue::from("Granny Green"), "Granny Green");
/// assert_eq!(FailureValue::from(50.0), 50.0);
///
/// #[derive(Debug)]
/// struct Point(i32, i32);
/// assert_eq!(FailureValue::debug(&Point(1, 2)).to_string(), "Point(1, 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureValue {
    /// A boolean value
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    UInt(u64),
    /// A floating point number
    Float(f64),
    /// A string value
    Text(String),
    /// Any other value, captured through its `Debug` output
    Debug(String),
}

impl FailureValue {
    /// Capture an arbitrary value through its `Debug` representation
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        FailureValue::Debug(format!("{:?}", value))
    }
}

impl fmt::Display for FailureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureValue::Bool(b) => write!(f, "{}", b),
            FailureValue::Int(n) => write!(f, "{}", n),
            FailureValue::UInt(n) => write!(f, "{}", n),
            FailureValue::Float(x) => write!(f, "{}", x),
            FailureValue::Text(s) | FailureValue::Debug(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_value {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FailureValue {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn from(value: $source) -> Self {
                    FailureValue::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_value!(Int as i64: i8, i16, i32, i64, isize);
impl_from_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_value!(Float as f64: f32, f64);

impl From<bool> for FailureValue {
    fn from(value: bool) -> Self {
        FailureValue::Bool(value)
    }
}

impl From<char> for FailureValue {
    fn from(value: char) -> Self {
        FailureValue::Text(value.to_string())
    }
}

impl From<&str> for FailureValue {
    fn from(value: &str) -> Self {
        FailureValue::Text(value.to_string())
    }
}

impl From<&String> for FailureValue {
    fn from(value: &String) -> Self {
        FailureValue::Text(value.clone())
    }
}

impl From<String> for FailureValue {
    fn from(value: String) -> Self {
        FailureValue::Text(value)
    }
}

impl PartialEq<str> for FailureValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, FailureValue::Text(s) if s == other)
    }
}

impl PartialEq<&str> for FailureValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for FailureValue {
    fn eq(&self, other: &i64) -> bool {
        match self {
            FailureValue::Int(n) => n == other,
            FailureValue::UInt(n) => i64::try_from(*n).is_ok_and(|n| n == *other),
            _ => false,
        }
    }
}

impl PartialEq<f64> for FailureValue {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, FailureValue::Float(x) if x == other)
    }
}

impl PartialEq<bool> for FailureValue {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, FailureValue::Bool(b) if b == other)
    }
}

/// Why a single named check failed, and optionally the value it rejected
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Failure {
    message: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    value: Option<FailureValue>,
}

impl Failure {
    /// Create a failure with a message and no diagnostic value
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
            value: None,
        }
    }

    /// Create a failure carrying the rejected value
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Failure;
    ///
    /// let failure = Failure::with_value("Weight out of range", 50.0);
    /// assert_eq!(failure.message(), "Weight out of range");
    /// assert_eq!(failure.value().map(ToString::to_string), Some("50".to_string()));
    /// ```
    pub fn with_value(message: impl Into<String>, value: impl Into<FailureValue>) -> Self {
        Failure {
            message: message.into(),
            value: Some(value.into()),
        }
    }

    pub(crate) fn from_parts(message: String, value: Option<FailureValue>) -> Self {
        Failure { message, value }
    }

    /// The explanation shown to whoever reads the report
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rejected value, if one was attached
    pub fn value(&self) -> Option<&FailureValue> {
        self.value.as_ref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(value) = &self.value {
            write!(f, " [value: {}]", value)?;
        }
        Ok(())
    }
}

/// Failures of one run, keyed by property name
///
/// Names keep the position of their first failure. Inserting a failure under
/// a name that is already present replaces the recorded failure in place.
/// Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failures {
    entries: Vec<(String, Failure)>,
}

impl Failures {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, returning the one it replaced
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{Failure, Failures};
    ///
    /// let mut failures = Failures::new();
    /// assert!(failures.insert("a", Failure::new("first")).is_none());
    /// failures.insert("b", Failure::new("other"));
    ///
    /// let replaced = failures.insert("a", Failure::new("second"));
    /// assert_eq!(replaced.unwrap().message(), "first");
    /// assert_eq!(failures["a"].message(), "second");
    /// assert_eq!(failures.names().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, failure: Failure) -> Option<Failure> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, failure)),
            None => {
                self.entries.push((name, failure));
                None
            }
        }
    }

    /// Look up the failure recorded for `name`
    pub fn get(&self, name: &str) -> Option<&Failure> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, failure)| failure)
    }

    /// Whether `name` failed
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct names that failed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing failed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, failure)` pairs in order of first failure
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over failed names in order of first failure
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Index<&str> for Failures {
    type Output = Failure;

    fn index(&self, name: &str) -> &Failure {
        match self.get(name) {
            Some(failure) => failure,
            None => panic!("no failure recorded for `{}`", name),
        }
    }
}

/// Borrowing iterator over a [`Failures`] set
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Failure)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Failure);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, failure)| (name.as_str(), failure))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Failures {
    type Item = (&'a str, &'a Failure);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Failures {
    type Item = (String, Failure);
    type IntoIter = std::vec::IntoIter<(String, Failure)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> Extend<(K, Failure)> for Failures {
    fn extend<I: IntoIterator<Item = (K, Failure)>>(&mut self, iter: I) {
        for (name, failure) in iter {
            self.insert(name, failure);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Failure)> for Failures {
    fn from_iter<I: IntoIterator<Item = (K, Failure)>>(iter: I) -> Self {
        let mut failures = Failures::new();
        failures.extend(iter);
        failures
    }
}

// Right-biased: same-named failures from `other` replace ours in place.
impl Semigroup for Failures {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(FailureValue::from(7u8), FailureValue::UInt(7));
        assert_eq!(FailureValue::from(-3i32), FailureValue::Int(-3));
        assert_eq!(FailureValue::from(1.5f32), FailureValue::Float(1.5));
        assert_eq!(FailureValue::from(true), FailureValue::Bool(true));
        assert_eq!(FailureValue::from('x'), FailureValue::Text("x".to_string()));
        assert_eq!(
            FailureValue::from(&"owned".to_string()),
            FailureValue::Text("owned".to_string())
        );
    }

    #[test]
    fn test_value_comparisons() {
        assert_eq!(FailureValue::from("Cortland"), "Cortland");
        assert_ne!(FailureValue::debug(&"Cortland"), "Cortland");
        assert_eq!(FailureValue::from(5u32), 5i64);
        assert!(FailureValue::from(u64::MAX) != -1i64);
        assert_eq!(FailureValue::from(false), false);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(FailureValue::from(50.0).to_string(), "50");
        assert_eq!(FailureValue::from(10.3).to_string(), "10.3");
        assert_eq!(FailureValue::debug(&Some(3)).to_string(), "Some(3)");
        assert_eq!(FailureValue::from("Granny Green").to_string(), "Granny Green");
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(Failure::new("Required").to_string(), "Required");
        assert_eq!(
            Failure::with_value("Id must be positive", -1).to_string(),
            "Id must be positive [value: -1]"
        );
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut failures = Failures::new();
        failures.insert("a", Failure::with_value("a failed", 1));
        failures.insert("b", Failure::new("b failed"));
        failures.insert("a", Failure::with_value("a failed again", 2));

        let names: Vec<_> = failures.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(failures["a"].value(), Some(&FailureValue::Int(2)));
    }

    #[test]
    fn test_get_missing() {
        let failures = Failures::new();
        assert!(failures.get("missing").is_none());
        assert!(!failures.contains("missing"));
        assert!(failures.is_empty());
    }

    #[test]
    #[should_panic(expected = "no failure recorded for `missing`")]
    fn test_index_missing_panics() {
        let failures = Failures::new();
        let _ = &failures["missing"];
    }

    #[test]
    fn test_iter_and_into_iter() {
        let failures: Failures = vec![
            ("x", Failure::new("x failed")),
            ("y", Failure::new("y failed")),
        ]
        .into_iter()
        .collect();

        let borrowed: Vec<_> = failures.iter().map(|(n, f)| (n, f.message())).collect();
        assert_eq!(borrowed, vec![("x", "x failed"), ("y", "y failed")]);
        assert_eq!(failures.iter().len(), 2);

        let owned: Vec<String> = failures.into_iter().map(|(n, _)| n).collect();
        assert_eq!(owned, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_combine_is_right_biased() {
        let left: Failures = vec![
            ("a", Failure::new("left a")),
            ("b", Failure::new("left b")),
        ]
        .into_iter()
        .collect();
        let right: Failures = vec![
            ("c", Failure::new("right c")),
            ("a", Failure::new("right a")),
        ]
        .into_iter()
        .collect();

        let combined = left.combine(right);
        assert_eq!(combined.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(combined["a"].message(), "right a");
        assert_eq!(combined["b"].message(), "left b");
    }
}
