//! Log output of validation runs, checked with tracing-test
#![cfg(feature = "tracing")]

use accrue::{validate, validation};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn failed_check_is_logged() {
    let _ = validate(|v| {
        v.check("id", "Id must be positive", || false);
    });

    assert!(logs_contain("check failed"));
    assert!(logs_contain("check=id"));
    assert!(logs_contain("reason=\"Id must be positive\""));
}

#[test]
#[traced_test]
fn finished_run_logs_counts() {
    let _ = validation(|v| {
        v.check("a", "a", || true);
        v.check("b", "b", || false);
        v.check("c", "c", || true);
    });

    assert!(logs_contain("validation run finished"));
    assert!(logs_contain("checks=3"));
    assert!(logs_contain("failures=1"));
}

#[test]
#[traced_test]
fn passing_run_logs_no_failures() {
    let _ = validate(|v| {
        v.check("a", "a", || true);
    });

    assert!(logs_contain("failures=0"));
    assert!(!logs_contain("check failed"));
}

#[test]
#[traced_test]
fn nested_failures_are_logged_with_qualified_name() {
    let child = validate(|v| {
        v.check("length", "Stem too long", || false);
    })
    .unwrap_err();

    let _ = validate(|v| {
        v.nest("stem", child.into_failures());
    });

    assert!(logs_contain("nested failure recorded"));
    assert!(logs_contain("check=stem.length"));
}
