//! Rulecheck: fluent failure-condition validation
//!
//! Rulecheck collects failure conditions, each paired with a message, and
//! reports every violated rule at once instead of stopping at the first one.
//! Users fix all their input in a single round trip.
//!
//! # Core Concepts
//!
//! - **Validator**: An ordered session of registered rule outcomes
//! - **Failure conditions**: Booleans (or predicates evaluated on the spot)
//!   that are `true` when a rule is violated
//! - **Short-circuit**: A failing rule may stop evaluation of the rules after it
//! - **AggregateFailure**: One error carrying every violated rule's message
//!
//! # Example
//!
//! ```rust
//! use rulecheck::conditions::string;
//! use rulecheck::{AggregateFailure, Validator};
//!
//! struct Signup<'a> {
//!     username: &'a str,
//!     password: &'a str,
//! }
//!
//! fn validate(signup: &Signup) -> Result<(), AggregateFailure> {
//!     Validator::new()
//!         .add_failure_condition(signup.username.is_empty(), "Username is required", true)
//!         .add_failure_condition_for(
//!             signup.username,
//!             string::contains_non_alphanumeric,
//!             "Username may only contain letters and digits",
//!             false,
//!         )
//!         .add_failure_condition(
//!             string::shorter_than(signup.password, 8),
//!             "Password must be at least 8 characters long",
//!             false,
//!         )
//!         .raise_on_failures()
//! }
//!
//! let failure = validate(&Signup { username: "fer ris", password: "hunter2" }).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "2 validation error(s) occurred\n\
//!      0). Username may only contain letters and digits\n\
//!      1). Password must be at least 8 characters long"
//! );
//! ```

pub mod conditions;
pub mod core;
pub mod failure;

// Re-export commonly used types
pub use crate::core::{
    evaluate, evaluate_for, reject, Descriptor, FailureCondition, MissingValue, RuleRecord,
    Validator,
};
pub use crate::failure::{AggregateFailure, ValidationError};
