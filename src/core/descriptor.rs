//! Reusable failure condition descriptors.
//!
//! A descriptor bundles a failure predicate with its message and termination
//! flag so the same rule can be registered against many values.

use std::marker::PhantomData;

/// A predicate paired with the message to report when it fails.
///
/// `is_failure` returns `true` when the value violates the rule.
pub trait FailureCondition<T: ?Sized> {
    fn is_failure(&self, value: &T) -> bool;

    fn message(&self) -> &str;

    /// Whether a failure should stop evaluation of later rules.
    ///
    /// Default implementation returns `false`.
    fn terminates_on_failure(&self) -> bool {
        false
    }
}

/// Closure-backed [`FailureCondition`].
///
/// # Example
///
/// ```rust
/// use rulecheck::{Descriptor, FailureCondition};
///
/// let too_long = Descriptor::new(|name: &str| name.chars().count() > 8, "Name is too long")
///     .terminate_on_failure(true);
///
/// assert!(too_long.is_failure("Bartholomew"));
/// assert!(!too_long.is_failure("Ann"));
/// assert!(too_long.terminates_on_failure());
/// ```
pub struct Descriptor<T: ?Sized, F> {
    predicate: F,
    message: String,
    terminate_on_failure: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Descriptor<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
            terminate_on_failure: false,
            _phantom: PhantomData,
        }
    }

    /// Set whether a failure stops evaluation of later rules
    pub fn terminate_on_failure(mut self, terminate: bool) -> Self {
        self.terminate_on_failure = terminate;
        self
    }
}

impl<T: ?Sized, F> FailureCondition<T> for Descriptor<T, F>
where
    F: Fn(&T) -> bool,
{
    fn is_failure(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn terminates_on_failure(&self) -> bool {
        self.terminate_on_failure
    }
}

/// Fails when an optional value is absent. Terminates evaluation on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingValue {
    message: String,
}

impl MissingValue {
    pub const DEFAULT_MESSAGE: &'static str = "Item is missing";

    pub fn new() -> Self {
        Self::with_message(Self::DEFAULT_MESSAGE)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for MissingValue {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FailureCondition<Option<T>> for MissingValue {
    fn is_failure(&self, value: &Option<T>) -> bool {
        value.is_none()
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn terminates_on_failure(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_does_not_terminate_by_default() {
        let descriptor = Descriptor::new(|n: &i32| *n < 0, "Must not be negative");
        assert!(!descriptor.terminates_on_failure());
        assert_eq!(descriptor.message(), "Must not be negative");
    }

    #[test]
    fn descriptor_applies_predicate() {
        let descriptor = Descriptor::new(|n: &i32| *n < 0, "Must not be negative");
        assert!(descriptor.is_failure(&-1));
        assert!(!descriptor.is_failure(&0));
    }

    #[test]
    fn missing_value_fails_on_none() {
        let condition = MissingValue::new();
        assert!(condition.is_failure(&None::<u32>));
        assert!(!condition.is_failure(&Some(3u32)));
        assert!(FailureCondition::<Option<u32>>::terminates_on_failure(
            &condition
        ));
    }

    #[test]
    fn missing_value_message_can_be_overridden() {
        let condition = MissingValue::with_message("Email is required");
        assert_eq!(
            FailureCondition::<Option<String>>::message(&condition),
            "Email is required"
        );
        assert_eq!(
            FailureCondition::<Option<String>>::message(&MissingValue::default()),
            MissingValue::DEFAULT_MESSAGE
        );
    }
}
