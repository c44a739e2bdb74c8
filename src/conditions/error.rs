//! Errors raised by failure condition helpers.

use thiserror::Error;

/// Errors that prevent a condition from being evaluated at all
#[derive(Debug, Error)]
pub enum ConditionError {
    /// The supplied regular expression does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
