//! The failure raised when an evaluation finds violated rules.

use crate::failure::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Every violated rule from one evaluation pass.
///
/// The error list is a snapshot: it is owned by the failure and stays valid
/// after the validator that produced it has been cleared.
///
/// # Example
///
/// ```rust
/// use rulecheck::AggregateFailure;
///
/// let failure = AggregateFailure::from_messages(["Name is required", "Age must be positive"]);
///
/// assert_eq!(failure.len(), 2);
/// assert_eq!(
///     failure.to_string(),
///     "2 validation error(s) occurred\n0). Name is required\n1). Age must be positive"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", summarize(.errors))]
pub struct AggregateFailure {
    errors: Vec<ValidationError>,
}

impl AggregateFailure {
    /// Build a failure from errors in encounter order.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Build a failure holding a single message.
    pub fn single(message: impl Into<String>) -> Self {
        Self::new(vec![ValidationError::new(message)])
    }

    pub fn from_messages<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self::new(messages.into_iter().map(ValidationError::new).collect())
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Messages of the errors, in encounter order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable report: a count line followed by `index). message` lines.
    ///
    /// Empty when the failure carries no errors.
    pub fn summary(&self) -> String {
        summarize(&self.errors)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<NonEmptyVec<ValidationError>> for AggregateFailure {
    fn from(errors: NonEmptyVec<ValidationError>) -> Self {
        Self::new(errors.iter().cloned().collect())
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut summary = format!("{} validation error(s) occurred", errors.len());
    for (index, error) in errors.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(summary, "\n{index}). {}", error.message);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_enumerates_errors_from_zero() {
        let failure = AggregateFailure::from_messages(["A", "B"]);
        assert_eq!(failure.summary(), "2 validation error(s) occurred\n0). A\n1). B");
    }

    #[test]
    fn display_matches_summary() {
        let failure = AggregateFailure::single("Only one");
        assert_eq!(failure.to_string(), failure.summary());
        assert_eq!(failure.to_string(), "1 validation error(s) occurred\n0). Only one");
    }

    #[test]
    fn empty_failure_has_empty_summary() {
        let failure = AggregateFailure::new(Vec::new());
        assert!(failure.is_empty());
        assert_eq!(failure.summary(), "");
    }

    #[test]
    fn messages_preserve_order() {
        let failure = AggregateFailure::from_messages(["first", "second", "third"]);
        let messages: Vec<&str> = failure.messages().collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn serializes_error_list() {
        let failure = AggregateFailure::from_messages(["A"]);
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"errors":[{"message":"A"}]}"#);

        let restored: AggregateFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, failure);
    }
}
