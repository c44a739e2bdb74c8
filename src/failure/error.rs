//! A single violated rule.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message produced by one failing rule.
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
