//! Tests for conditions whose outcome is produced asynchronously.

use rulecheck::Validator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

async fn delayed(outcome: bool, millis: u64) -> bool {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    outcome
}

#[tokio::test]
async fn failing_async_condition_raises() {
    let mut validator = Validator::new()
        .add_async_failure_condition(|| async { true }, "One is not greater than two", false)
        .await;

    let failure = validator.raise_on_failures().unwrap_err();
    assert_eq!(failure.errors()[0].message, "One is not greater than two");
}

#[tokio::test]
async fn passing_async_condition_does_not_raise() {
    let mut validator = Validator::new()
        .add_async_failure_condition(|| async { false }, "One is not greater than two", false)
        .await;

    assert!(validator.raise_on_failures().is_ok());
    assert_eq!(validator.len(), 1);
}

#[tokio::test]
async fn async_conditions_keep_call_order() {
    let validator = Validator::new()
        .add_async_failure_condition(|| delayed(true, 30), "slow", false)
        .await
        .add_async_failure_condition(|| delayed(true, 1), "fast", false)
        .await
        .add_failure_condition(true, "sync", false);

    assert_eq!(validator.failure_messages(), vec!["slow", "fast", "sync"]);
}

#[tokio::test]
async fn async_condition_runs_once_before_registration_returns() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let validator = Validator::new()
        .add_async_failure_condition(
            move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                true
            },
            "Lookup failed",
            true,
        )
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(validator.len(), 1);

    let _ = validator.failure_messages();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn async_condition_can_run_on_spawned_task() {
    let validator = Validator::new()
        .add_async_failure_condition(
            || async { tokio::spawn(delayed(true, 5)).await.unwrap_or(true) },
            "Remote check failed",
            true,
        )
        .await
        .add_failure_condition(true, "unreached", false);

    assert_eq!(validator.failure_messages(), vec!["Remote check failed"]);
}
