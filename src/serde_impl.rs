//! Serde support for failure reports (feature-gated)
//!
//! [`Failures`] serializes as a map from property name to failure, in the
//! order the names first failed, which is the shape form UIs usually want.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{Failure, Failures};

impl Serialize for Failures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, failure) in self {
            map.serialize_entry(name, failure)?;
        }
        map.end()
    }
}

struct FailuresVisitor;

impl<'de> Visitor<'de> for FailuresVisitor {
    type Value = Failures;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from property name to failure")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Failures, A::Error> {
        let mut failures = Failures::new();
        while let Some((name, failure)) = access.next_entry::<String, Failure>()? {
            failures.insert(name, failure);
        }
        Ok(failures)
    }
}

impl<'de> Deserialize<'de> for Failures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FailuresVisitor)
    }
}
