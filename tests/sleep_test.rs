//! Tests for the delay primitive on a real tokio clock.
mod helpers {
    include!("helpers/mod.rs");
}

use helpers::{CountingTimer, MockTimer};
use korri_flow::sleep;
use tokio::time::{Duration, Instant};

#[tokio::test]
async fn test_sleep_waits_for_the_given_duration() {
    let mut timer = MockTimer;
    let timeout = 200;

    let start = Instant::now();
    sleep(&mut timer, timeout).await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(timeout as u64));
    // Generous upper bound: CI schedulers add jitter.
    assert!(elapsed < Duration::from_millis(timeout as u64 * 3));
}

#[tokio::test]
async fn test_sleep_schedules_exactly_one_delay() {
    let mut timer = CountingTimer::new();
    sleep(&mut timer, 5).await;
    assert_eq!(timer.delays, vec![5]);
}

#[tokio::test]
async fn test_zero_sleep_completes() {
    let mut timer = MockTimer;
    sleep(&mut timer, 0).await;
}
