//! Signup Form Validation
//!
//! This example validates a signup form and reports every problem at once.
//!
//! Key concepts:
//! - Registering failure conditions with messages
//! - Short-circuiting when later rules make no sense
//! - Reusable descriptors and ready-made conditions
//! - Guard clauses with `evaluate`
//!
//! Run with: cargo run --example signup_form

use chrono::{DateTime, Duration, Utc};
use rulecheck::conditions::{date, number, string};
use rulecheck::{evaluate, AggregateFailure, Descriptor, MissingValue, Validator};

struct Signup {
    username: String,
    email: Option<String>,
    age: u32,
    birth_date: DateTime<Utc>,
}

fn validate(signup: &Signup) -> Result<(), AggregateFailure> {
    let reserved = Descriptor::new(
        |name: &str| matches!(name, "admin" | "root"),
        "Username is reserved",
    );

    Validator::new()
        .add_condition(&signup.email, &MissingValue::with_message("Email is required"))
        .add_failure_condition_for(
            signup.username.as_str(),
            string::contains_non_alphanumeric,
            "Username may only contain letters and digits",
            false,
        )
        .add_condition(signup.username.as_str(), &reserved)
        .add_failure_condition(
            number::is_less_than(signup.age, 13),
            "You must be at least 13 years old",
            false,
        )
        .add_failure_condition(
            date::is_future_date(signup.birth_date),
            "Birth date cannot be in the future",
            false,
        )
        .raise_on_failures()
}

fn main() {
    println!("=== Signup Form Validation Example ===\n");

    // Example 1: A valid form
    println!("Example 1: Valid signup");
    let valid = Signup {
        username: "ferris".to_string(),
        email: Some("ferris@example.com".to_string()),
        age: 30,
        birth_date: Utc::now() - Duration::days(30 * 365),
    };
    match validate(&valid) {
        Ok(()) => println!("  Accepted\n"),
        Err(failure) => println!("  Rejected:\n{failure}\n"),
    }

    // Example 2: Every violated rule is reported
    println!("Example 2: Several problems at once");
    let invalid = Signup {
        username: "root".to_string(),
        email: Some("root@example.com".to_string()),
        age: 9,
        birth_date: Utc::now() + Duration::days(1),
    };
    if let Err(failure) = validate(&invalid) {
        println!("{failure}\n");
    }

    // Example 3: A missing email stops evaluation
    println!("Example 3: Short-circuit on missing email");
    let missing = Signup {
        username: "r00t!".to_string(),
        email: None,
        age: 9,
        birth_date: Utc::now(),
    };
    if let Err(failure) = validate(&missing) {
        println!("{failure}\n");
    }

    // Example 4: Guard clause
    println!("Example 4: Guard clause");
    if let Err(failure) = evaluate(invalid.username.is_empty(), "Username is required") {
        println!("{failure}");
    } else {
        println!("  Username present\n");
    }

    println!("=== Example Complete ===");
}
