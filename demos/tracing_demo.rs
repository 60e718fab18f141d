//! Demonstrates the events a validation run emits
//!
//! Run with: cargo run --example tracing_demo --features tracing

use accrue::{validate, validation};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Validating a signup form");

    let email = "not-an-email";
    let age = 15;

    let result = validate(|v| {
        v.check_value("email", "Email must contain @", email, || email.contains('@'));
        v.check_value("age", "Must be 18 or older", age, || age >= 18);
        v.check("terms", "Terms must be accepted", || true);
    });

    match result {
        Ok(_) => tracing::info!("Form accepted"),
        Err(e) => tracing::warn!(failures = e.failures().len(), "Form rejected"),
    }

    tracing::info!("Validating nested address");
    let outcome = validation(|v| {
        let address = validate(|a| {
            a.check("zip", "Zip code is required", || !"".is_empty());
        });
        if let Err(err) = address {
            v.nest("address", err.into_failures());
        }
    });
    tracing::info!(ok = outcome.is_success(), "Nested validation done");
}
