//! Constructor validation - an apple refuses to exist with bad fields
//!
//! Run with: cargo run --example apple

use accrue::{validate, ValidationError};

const APPLE_TYPES: [&str; 4] = ["Cortland", "Fuji", "Granny Smith", "McIntosh"];

#[derive(Debug)]
#[allow(dead_code)]
struct Apple {
    id: i64,
    weight: f64,
    kind: String,
}

impl Apple {
    fn new(id: i64, weight: f64, kind: &str) -> Result<Self, ValidationError> {
        validate(|v| {
            v.check_value("id", "Id must be positive", id, || id > 0);
            v.check_value("weight", "Weight must be between 1 and 25", weight, || {
                if id == 0 {
                    weight == 50.0
                } else {
                    (1.0..=25.0).contains(&weight)
                }
            });
            v.check_value("type", "Type must be a known variety", kind, || {
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

fn main() {
    println!("=== Apple Constructor ===\n");

    println!("Test 1: Valid apple");
    match Apple::new(1, 10.3, "Cortland") {
        Ok(apple) => println!("✓ Built: {:?}", apple),
        Err(err) => println!("✗ {}", err),
    }

    println!("\n---\n");

    println!("Test 2: Every field wrong");
    match Apple::new(-1, 50.0, "Granny Green") {
        Ok(apple) => println!("✓ Unexpected success: {:?}", apple),
        Err(err) => {
            println!("✗ {}", err);
            println!();
            for (name, failure) in err.failures() {
                match failure.value() {
                    Some(value) => println!("  field {:<8} rejected {}", name, value),
                    None => println!("  field {:<8} rejected", name),
                }
            }
        }
    }
}

/* Expected output:

=== Apple Constructor ===

Test 1: Valid apple
✓ Built: Apple { id: 1, weight: 10.3, kind: "Cortland" }

---

Test 2: Every field wrong
✗ Validation failed (3 failures)
  - id: Id must be positive [value: -1]
  - weight: Weight must be between 1 and 25 [value: 50]
  - type: Type must be a known variety [value: Granny Green]

  field id       rejected -1
  field weight   rejected 50
  field type     rejected Granny Green

*/
