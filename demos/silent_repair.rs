//! Outcome validation - repair invalid fields instead of rejecting them
//!
//! Run with: cargo run --example silent_repair

use accrue::{validation, Validation, Validator};

#[derive(Debug)]
struct Settings {
    retries: i32,
    batch: i32,
}

impl Settings {
    fn check(&self, v: &mut Validator) {
        v.check_value("retries", "Retries must be positive", self.retries, || {
            self.retries > 0
        });
        v.check_value("batch", "Batch must be a positive multiple of 3", self.batch, || {
            self.batch > 0 && self.batch % 3 == 0
        });
    }

    /// Replace every invalid field with its default, leaving valid ones alone
    fn repaired(mut self) -> Self {
        if let Validation::Failure(err) = validation(|v| self.check(v)) {
            for (name, failure) in err.failures() {
                println!("  repairing {}: {}", name, failure);
            }
            if err.failures().contains("retries") {
                self.retries = 1;
            }
            if err.failures().contains("batch") {
                self.batch = 3;
            }
        }
        self
    }
}

fn main() {
    println!("=== Silent Repair ===\n");

    let inputs = [
        Settings { retries: -1, batch: 9 },
        Settings { retries: 0, batch: 4 },
        Settings { retries: 5, batch: 12 },
    ];

    for input in inputs {
        println!("Input: {:?}", input);
        let fixed = input.repaired();
        println!("Using: {:?}\n", fixed);
    }
}

/* Expected output:

=== Silent Repair ===

Input: Settings { retries: -1, batch: 9 }
  repairing retries: Retries must be positive [value: -1]
Using: Settings { retries: 1, batch: 9 }

Input: Settings { retries: 0, batch: 4 }
  repairing retries: Retries must be positive [value: 0]
  repairing batch: Batch must be a positive multiple of 3 [value: 4]
Using: Settings { retries: 1, batch: 3 }

Input: Settings { retries: 5, batch: 12 }
Using: Settings { retries: 5, batch: 12 }

*/
