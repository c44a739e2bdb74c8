//! Ready-made failure conditions.
//!
//! Plain functions that return `true` when a value violates a rule, for use
//! with [`Validator::add_failure_condition_for`](crate::Validator::add_failure_condition_for)
//! or to compute the boolean passed to
//! [`Validator::add_failure_condition`](crate::Validator::add_failure_condition).
//!
//! # Example
//!
//! ```rust
//! use rulecheck::conditions::{number, string};
//! use rulecheck::Validator;
//!
//! let username = "ferris!";
//! let age = 230;
//!
//! let messages = Validator::new()
//!     .add_failure_condition_for(
//!         username,
//!         string::contains_non_alphanumeric,
//!         "Username may only contain letters and digits",
//!         false,
//!     )
//!     .add_failure_condition(number::is_greater_than(age, 150), "Age is not plausible", false)
//!     .failure_messages();
//!
//! assert_eq!(messages.len(), 2);
//! ```

pub mod date;
pub mod error;
pub mod number;
pub mod object;
pub mod string;

pub use error::ConditionError;
