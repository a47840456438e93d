//! Unit tests for the timeout race.
use super::*;
use crate::infra::timer::mock::RecordingTimer;
use core::future::{pending, ready};

//==================================================================================WAIT
#[tokio::test]
/// An operation that is already complete wins over the timer.
async fn test_ready_operation_wins() {
    let mut timer = RecordingTimer::new();
    let result = wait(&mut timer, || ready(Ok::<_, ()>(7)), 500).await;
    assert_eq!(result.unwrap(), 7);
}

#[tokio::test]
/// A failure observed before the deadline is propagated as-is.
async fn test_rejection_is_propagated() {
    let mut timer = RecordingTimer::new();
    let result = wait(&mut timer, || ready(Err::<u8, _>("boom")), 500).await;
    match result {
        Err(WaitError::Rejected(cause)) => assert_eq!(cause, "boom"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
/// A never-ending operation loses against the timer.
async fn test_pending_operation_times_out() {
    let mut timer = RecordingTimer::new();
    let result = wait(&mut timer, pending::<Result<(), ()>>, 20).await;
    assert!(result.unwrap_err().is_timeout());
    assert_eq!(timer.delays, [20]);
}

#[test]
/// The timeout failure renders the exact rejection tag.
fn test_timeout_display() {
    use std::string::ToString;
    let err: WaitError<()> = WaitError::Timeout;
    assert_eq!(err.to_string(), crate::core::TIMEOUT);
}
