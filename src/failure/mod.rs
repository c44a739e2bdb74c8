//! Failure types reported by validation.
//!
//! A failing evaluation produces one [`AggregateFailure`] carrying a
//! [`ValidationError`] for every violated rule, so callers can show every
//! problem in a single pass.

mod aggregate;
mod error;

pub use aggregate::AggregateFailure;
pub use error::ValidationError;
