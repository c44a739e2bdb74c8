//! The rule accumulator.
//!
//! A [`Validator`] collects failure conditions in registration order and
//! reports the violated ones either as a list of messages or as a single
//! [`AggregateFailure`].

use crate::core::descriptor::FailureCondition;
use crate::core::immediate;
use crate::core::rule::RuleRecord;
use crate::failure::{AggregateFailure, ValidationError};
use std::future::Future;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Ordered collection of registered failure conditions.
///
/// Conditions are evaluated as soon as they are registered; the validator
/// only stores their outcomes. An evaluation that finds failures clears the
/// validator, so the same failures are never reported twice.
///
/// # Example
///
/// ```rust
/// use rulecheck::Validator;
///
/// let name = "";
/// let age = -3;
///
/// let mut validator = Validator::new()
///     .add_failure_condition(name.is_empty(), "Name is required", false)
///     .add_failure_condition(age < 0, "Age must not be negative", false);
///
/// let failure = validator.raise_on_failures().unwrap_err();
/// assert_eq!(
///     failure.to_string(),
///     "2 validation error(s) occurred\n0). Name is required\n1). Age must not be negative"
/// );
/// assert!(validator.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Validator {
    rules: Vec<RuleRecord>,
}

impl Validator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a condition that has already been evaluated.
    ///
    /// `failed` is `true` when the rule is violated. When `terminate_on_failure`
    /// is set and the rule failed, evaluation stops after this rule.
    pub fn add_failure_condition(
        mut self,
        failed: bool,
        message: impl Into<String>,
        terminate_on_failure: bool,
    ) -> Self {
        self.push(RuleRecord::new(failed, message, terminate_on_failure));
        self
    }

    /// Register the outcome of `predicate` applied to `value`.
    ///
    /// The predicate runs exactly once, now. It is not retained.
    pub fn add_failure_condition_for<T, F>(
        self,
        value: T,
        predicate: F,
        message: impl Into<String>,
        terminate_on_failure: bool,
    ) -> Self
    where
        F: FnOnce(T) -> bool,
    {
        let failed = predicate(value);
        self.add_failure_condition(failed, message, terminate_on_failure)
    }

    /// Register the outcome of a reusable [`FailureCondition`] applied to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::{MissingValue, Validator};
    ///
    /// let email: Option<String> = None;
    /// let messages = Validator::new()
    ///     .add_condition(&email, &MissingValue::with_message("Email is required"))
    ///     .add_failure_condition(true, "Never reached", false)
    ///     .failure_messages();
    ///
    /// assert_eq!(messages, vec!["Email is required"]);
    /// ```
    pub fn add_condition<T, C>(self, value: &T, condition: &C) -> Self
    where
        T: ?Sized,
        C: FailureCondition<T> + ?Sized,
    {
        let failed = condition.is_failure(value);
        self.add_failure_condition(
            failed,
            condition.message(),
            condition.terminates_on_failure(),
        )
    }

    /// Register a condition whose outcome is produced asynchronously.
    ///
    /// The returned future completes once `condition` has resolved and the
    /// rule has been registered. Rules keep the order in which these calls are
    /// awaited.
    pub async fn add_async_failure_condition<F, Fut>(
        self,
        condition: F,
        message: impl Into<String>,
        terminate_on_failure: bool,
    ) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        let failed = condition().await;
        self.add_failure_condition(failed, message, terminate_on_failure)
    }

    /// Evaluate a single condition right away, failing if it is violated.
    ///
    /// Rules already registered on this validator are not evaluated; on
    /// success the validator is handed back unchanged for further chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::Validator;
    ///
    /// fn check(username: &str) -> Result<(), rulecheck::AggregateFailure> {
    ///     Validator::new()
    ///         .evaluate_immediate(username.is_empty(), "Username is required")?
    ///         .add_failure_condition(username.len() > 16, "Username is too long", false)
    ///         .raise_on_failures()
    /// }
    ///
    /// assert!(check("ferris").is_ok());
    /// assert_eq!(check("").unwrap_err().len(), 1);
    /// ```
    pub fn evaluate_immediate(
        self,
        failed: bool,
        message: impl Into<String>,
    ) -> Result<Self, AggregateFailure> {
        immediate::evaluate(failed, message)?;
        Ok(self)
    }

    /// Predicate form of [`Validator::evaluate_immediate`].
    pub fn evaluate_immediate_for<T, F>(
        self,
        value: T,
        predicate: F,
        message: impl Into<String>,
    ) -> Result<Self, AggregateFailure>
    where
        F: FnOnce(T) -> bool,
    {
        immediate::evaluate_for(value, predicate, message)?;
        Ok(self)
    }

    /// Messages of the violated rules, in registration order.
    ///
    /// Stops after the first violated rule that terminates on failure. Does
    /// not modify the validator.
    pub fn failure_messages(&self) -> Vec<String> {
        self.violations()
            .map(|rule| rule.message().to_string())
            .collect()
    }

    /// Fail with every violated rule, clearing the validator.
    ///
    /// Succeeds without side effects when no rule is violated. On failure the
    /// validator is emptied before the error is returned.
    pub fn raise_on_failures(&mut self) -> Result<(), AggregateFailure> {
        let errors: Vec<ValidationError> = self
            .violations()
            .map(|rule| ValidationError::new(rule.message()))
            .collect();

        if errors.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            failures = errors.len(),
            "validation failed, clearing registered rules"
        );
        self.clear();
        Err(AggregateFailure::new(errors))
    }

    /// Like [`Validator::raise_on_failures`], yielding `T::default()` on success.
    ///
    /// Lets the evaluation be the tail expression of a function that returns a
    /// value.
    pub fn raise_on_failures_or_default<T: Default>(&mut self) -> Result<T, AggregateFailure> {
        self.raise_on_failures().map(|()| T::default())
    }

    /// Violated rules as a stillwater [`Validation`].
    ///
    /// Follows the same short-circuit rules as [`Validator::failure_messages`]
    /// and leaves the validator untouched.
    pub fn to_validation(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = self
            .violations()
            .map(|rule| Validation::fail(ValidationError::new(rule.message())))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Drop every registered rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rules in registration order.
    pub fn rules(&self) -> &[RuleRecord] {
        &self.rules
    }

    fn push(&mut self, rule: RuleRecord) {
        tracing::trace!(
            index = self.rules.len(),
            failed = rule.failed(),
            "registered rule"
        );
        self.rules.push(rule);
    }

    /// Failed rules up to and including the first one that halts evaluation.
    fn violations(&self) -> impl Iterator<Item = &RuleRecord> + '_ {
        let mut halted = false;
        self.rules
            .iter()
            .enumerate()
            .take_while(move |(index, rule)| {
                if halted {
                    return false;
                }
                if rule.halts_evaluation() {
                    tracing::debug!(index = *index, "evaluation terminated by failed rule");
                    halted = true;
                }
                true
            })
            .map(|(_, rule)| rule)
            .filter(|rule| rule.failed())
    }
}
