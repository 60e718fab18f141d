//! Constructor-style validation: building a value aborts with every failed field

use accrue::{validate, FailureValue, ValidationError, DEFAULT_MESSAGE};

const APPLE_TYPES: [&str; 6] = [
    "Cortland",
    "Fuji",
    "Gala",
    "Granny Smith",
    "Honeycrisp",
    "McIntosh",
];

#[derive(Debug, Clone, PartialEq)]
struct Apple {
    id: i64,
    weight: f64,
    kind: String,
}

impl Apple {
    fn new(id: i64, weight: f64, kind: &str) -> Result<Self, ValidationError> {
        validate(|v| {
            v.check_value("id", "Id must be positive", id, || id > 0);
            v.check_value(
                "weight",
                "Weight must be between 1 and 25, or exactly 50 for the sample apple",
                weight,
                || {
                    if id == 0 {
                        weight == 50.0
                    } else {
                        (1.0..=25.0).contains(&weight)
                    }
                },
            );
            v.check_value("type", "Type must be a known apple variety", kind, || {
                APPLE_TYPES.contains(&kind)
            });
        })?;

        Ok(Apple {
            id,
            weight,
            kind: kind.to_string(),
        })
    }
}

#[test]
fn invalid_apple_reports_every_field() {
    let err = Apple::new(-1, 50.0, "Granny Green").unwrap_err();

    assert_eq!(err.message(), DEFAULT_MESSAGE);
    assert_eq!(err.failures().len(), 3);
    assert_eq!(err.failures()["id"].message(), "Id must be positive");
    assert_eq!(err.failures()["id"].value(), Some(&FailureValue::Int(-1)));
    assert_eq!(err.failures()["weight"].value().unwrap(), &50.0);
    assert_eq!(err.failures()["type"].value().unwrap(), &"Granny Green");
}

#[test]
fn failures_follow_registration_order() {
    let err = Apple::new(-1, 50.0, "Granny Green").unwrap_err();
    let names: Vec<_> = err.failures().names().collect();
    assert_eq!(names, vec!["id", "weight", "type"]);
}

#[test]
fn valid_apple_is_built() {
    let apple = Apple::new(1, 10.3, "Cortland").unwrap();
    assert_eq!(
        apple,
        Apple {
            id: 1,
            weight: 10.3,
            kind: "Cortland".to_string(),
        }
    );
}

#[test]
fn every_known_variety_passes() {
    for kind in APPLE_TYPES {
        assert!(Apple::new(3, 12.0, kind).is_ok(), "{} rejected", kind);
    }
}

#[test]
fn sample_apple_rule_reads_sibling_field() {
    assert!(Apple::new(0, 50.0, "Fuji").is_err_and(|e| {
        e.failures().len() == 1 && e.failures().contains("id")
    }));

    let err = Apple::new(0, 10.0, "Fuji").unwrap_err();
    assert_eq!(
        err.failures().names().collect::<Vec<_>>(),
        vec!["id", "weight"]
    );
}

#[test]
fn single_failure_is_reported_alone() {
    let err = Apple::new(7, 30.0, "Gala").unwrap_err();
    assert_eq!(err.failures().len(), 1);
    assert!(err.failures().contains("weight"));
    assert_eq!(
        err.to_string(),
        "Validation failed (1 failure)\n  - weight: Weight must be between 1 and 25, or exactly 50 for the sample apple [value: 30]"
    );
}

#[test]
fn error_converts_into_boxed_error() {
    fn build() -> Result<Apple, Box<dyn std::error::Error>> {
        Ok(Apple::new(-5, 10.0, "Gala")?)
    }

    let err = build().unwrap_err();
    assert!(err.to_string().starts_with("Validation failed (1 failure)"));
}
