//! Rule accumulation and evaluation.
//!
//! This module contains the validator itself:
//! - Registered rule outcomes via [`RuleRecord`]
//! - The accumulating [`Validator`] session
//! - Reusable [`FailureCondition`] descriptors
//! - Immediate guard clauses ([`evaluate`], [`reject`])
//!
//! Conditions are always evaluated at registration time; a validator only
//! ever holds plain outcomes, never closures.

mod descriptor;
mod immediate;
mod rule;
mod validator;

pub use descriptor::{Descriptor, FailureCondition, MissingValue};
pub use immediate::{evaluate, evaluate_for, reject};
pub use rule::RuleRecord;
pub use validator::Validator;
