//! Failure conditions for string input.
//!
//! Every function returns `true` when the value fails the check. Most checks
//! treat an empty string as a failure since there is nothing to validate;
//! [`exceeds_length`] is the exception.

use crate::conditions::error::ConditionError;
use crate::core::{evaluate, Validator};
use crate::failure::AggregateFailure;
use regex::Regex;

pub fn is_empty_string(value: &str) -> bool {
    value.is_empty()
}

/// Fails when `value` is empty or not a valid `f64`.
pub fn does_not_parse_to_f64(value: &str) -> bool {
    value.is_empty() || value.parse::<f64>().is_err()
}

/// Fails when `value` is empty or not a valid `i64`.
pub fn does_not_parse_to_i64(value: &str) -> bool {
    value.is_empty() || value.parse::<i64>().is_err()
}

/// Fails unless `value` is made only of ASCII letters and digits.
pub fn contains_non_alphanumeric(value: &str) -> bool {
    value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Fails unless `value` is made only of ASCII letters.
pub fn contains_non_alphabetic(value: &str) -> bool {
    value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Fails when `value` is empty or does not match `pattern`.
///
/// # Errors
///
/// Returns [`ConditionError::InvalidPattern`] if `pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use rulecheck::conditions::string::fails_regex_filter;
///
/// assert_eq!(fails_regex_filter("AB-123", r"^[A-Z]{2}-\d{3}$").unwrap(), false);
/// assert_eq!(fails_regex_filter("ab-123", r"^[A-Z]{2}-\d{3}$").unwrap(), true);
/// assert!(fails_regex_filter("AB-123", "(").is_err());
/// ```
pub fn fails_regex_filter(value: &str, pattern: &str) -> Result<bool, ConditionError> {
    if value.is_empty() {
        return Ok(true);
    }

    let filter = Regex::new(pattern).map_err(|source| ConditionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(!filter.is_match(value))
}

/// Fails when `value` has more than `length` characters. Empty never fails.
pub fn exceeds_length(value: &str, length: usize) -> bool {
    value.chars().count() > length
}

/// Fails when `value` is empty or has fewer than `length` characters.
pub fn shorter_than(value: &str, length: usize) -> bool {
    value.is_empty() || value.chars().count() < length
}

pub fn length_outside_of_bounds(value: &str, min_length: usize, max_length: usize) -> bool {
    exceeds_length(value, max_length) || shorter_than(value, min_length)
}

/// Require `value` to be non-empty with a length within `min..=max` characters.
///
/// An empty value fails on its own, before the bounds are checked.
///
/// # Example
///
/// ```rust
/// use rulecheck::conditions::string::require_length_between;
///
/// assert!(require_length_between("ferris", 3, 10).is_ok());
///
/// let failure = require_length_between("", 3, 10).unwrap_err();
/// assert_eq!(failure.errors()[0].message, "Value must not be empty");
/// ```
pub fn require_length_between(value: &str, min: usize, max: usize) -> Result<(), AggregateFailure> {
    evaluate(is_empty_string(value), "Value must not be empty")?;

    Validator::new()
        .add_failure_condition(
            shorter_than(value, min),
            format!("Value must be at least {min} characters long"),
            false,
        )
        .add_failure_condition(
            exceeds_length(value, max),
            format!("Value must be at most {max} characters long"),
            false,
        )
        .raise_on_failures()
}
