//! Tests for the timeout race: operation first, rejection first, timer first.
mod helpers {
    include!("helpers/mod.rs");
}

use helpers::MockTimer;
use korri_flow::{core::TIMEOUT, wait, WaitError};
use tokio::time::{sleep, Duration};

#[tokio::test]
async fn test_wait_resolves_with_operation_result() {
    // Operation finishes at 50 ms, deadline at 500 ms.
    let mut timer = MockTimer;
    let result = wait(
        &mut timer,
        || async {
            sleep(Duration::from_millis(50)).await;
            Ok::<_, ()>("Resolved: callback succeed")
        },
        500,
    )
    .await;

    assert_eq!(result.unwrap(), "Resolved: callback succeed");
}

#[tokio::test]
async fn test_wait_rejects_with_operation_error() {
    let mut timer = MockTimer;
    let result = wait(
        &mut timer,
        || async {
            sleep(Duration::from_millis(50)).await;
            Err::<(), _>("Rejected: callback failed")
        },
        500,
    )
    .await;

    match result {
        Err(WaitError::Rejected(cause)) => assert_eq!(cause, "Rejected: callback failed"),
        other => panic!("expected the operation's own failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wait_times_out_on_slow_operation() {
    let mut timer = MockTimer;
    let result = wait(
        &mut timer,
        || async {
            sleep(Duration::from_millis(500)).await;
            Ok::<_, ()>("Resolved: callback succeed")
        },
        50,
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.to_string(), TIMEOUT);
    assert_eq!(err.to_string(), "Rejected: timeout");
}

#[tokio::test]
async fn test_wait_times_out_even_if_operation_would_fail_later() {
    let mut timer = MockTimer;
    let result = wait(
        &mut timer,
        || async {
            sleep(Duration::from_millis(300)).await;
            Err::<(), _>("late failure")
        },
        30,
    )
    .await;

    assert!(result.unwrap_err().into_rejection().is_none());
}
