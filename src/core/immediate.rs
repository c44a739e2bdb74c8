//! Guard clauses that fail on the spot.
//!
//! Conditions are evaluated through a throwaway [`Validator`] holding a single
//! terminating rule, so the failure has the same shape as one raised by a
//! full evaluation.

use crate::core::validator::Validator;
use crate::failure::AggregateFailure;

/// Fail immediately if `failed` is `true`.
///
/// # Example
///
/// ```rust
/// use rulecheck::evaluate;
///
/// assert!(evaluate(false, "Quantity must be positive").is_ok());
///
/// let failure = evaluate(true, "Quantity must be positive").unwrap_err();
/// assert_eq!(failure.to_string(), "1 validation error(s) occurred\n0). Quantity must be positive");
/// ```
pub fn evaluate(failed: bool, message: impl Into<String>) -> Result<(), AggregateFailure> {
    Validator::new()
        .add_failure_condition(failed, message, true)
        .raise_on_failures()
}

/// Fail immediately if `predicate` reports a failure for `value`.
pub fn evaluate_for<T, F>(
    value: T,
    predicate: F,
    message: impl Into<String>,
) -> Result<(), AggregateFailure>
where
    F: FnOnce(T) -> bool,
{
    Validator::new()
        .add_failure_condition_for(value, predicate, message, true)
        .raise_on_failures()
}

/// Always fail with `message`. Same failure as `evaluate(true, message)`.
///
/// Generic over the success type so it can end any function returning a
/// `Result<_, AggregateFailure>`.
///
/// ```rust
/// use rulecheck::{reject, AggregateFailure};
///
/// fn parse_port(raw: &str) -> Result<u16, AggregateFailure> {
///     match raw.parse() {
///         Ok(port) => Ok(port),
///         Err(_) => reject(format!("'{raw}' is not a valid port")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert_eq!(parse_port("http").unwrap_err().len(), 1);
/// ```
pub fn reject<T>(message: impl Into<String>) -> Result<T, AggregateFailure> {
    Err(AggregateFailure::single(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_true_fails_with_one_error() {
        let failure = evaluate(true, "X").unwrap_err();
        assert_eq!(failure.len(), 1);
        assert_eq!(failure.errors()[0].message, "X");
    }

    #[test]
    fn evaluate_false_succeeds() {
        assert_eq!(evaluate(false, "X"), Ok(()));
    }

    #[test]
    fn evaluate_for_runs_predicate() {
        assert!(evaluate_for("", str::is_empty, "Value is required").is_err());
        assert!(evaluate_for("x", str::is_empty, "Value is required").is_ok());
    }

    #[test]
    fn reject_always_fails() {
        let result: Result<u64, AggregateFailure> = reject("Unsupported operation");
        assert_eq!(
            result.unwrap_err(),
            AggregateFailure::single("Unsupported operation")
        );
    }
}
