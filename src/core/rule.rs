//! Registered rule outcomes.

/// Outcome of one registered failure condition.
///
/// The condition is evaluated when the rule is registered; only its boolean
/// result is kept. Records are immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleRecord {
    failed: bool,
    message: String,
    terminate_on_failure: bool,
}

impl RuleRecord {
    pub fn new(failed: bool, message: impl Into<String>, terminate_on_failure: bool) -> Self {
        Self {
            failed,
            message: message.into(),
            terminate_on_failure,
        }
    }

    /// Whether the condition reported a failure.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn terminate_on_failure(&self) -> bool {
        self.terminate_on_failure
    }

    /// Message to report, if this rule failed.
    pub fn failure_message(&self) -> Option<&str> {
        self.failed.then_some(self.message.as_str())
    }

    /// Evaluation stops after this rule only when it failed and asked to terminate.
    pub fn halts_evaluation(&self) -> bool {
        self.failed && self.terminate_on_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_rule_reports_nothing() {
        let rule = RuleRecord::new(false, "unused", true);
        assert_eq!(rule.failure_message(), None);
    }

    #[test]
    fn failing_rule_reports_its_message() {
        let rule = RuleRecord::new(true, "Name is required", false);
        assert_eq!(rule.failure_message(), Some("Name is required"));
    }

    #[test]
    fn termination_requires_failure_and_flag() {
        assert!(RuleRecord::new(true, "m", true).halts_evaluation());
        assert!(!RuleRecord::new(true, "m", false).halts_evaluation());
        assert!(!RuleRecord::new(false, "m", true).halts_evaluation());
        assert!(!RuleRecord::new(false, "m", false).halts_evaluation());
    }
}
