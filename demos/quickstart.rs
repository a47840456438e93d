//! # Quickstart Example
//!
//! Minimal tour of korri-flow on a desktop tokio runtime:
//! - Pause with the delay primitive
//! - Race an operation against a deadline
//! - Poll a condition until it holds
//! - Run a mixed sync/async sequence
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::cell::Cell;

use korri_flow::{
    do_callbacks, from_async, from_fn, infallible, sleep, wait, wait_for, Callback, FlowConfig,
    FlowController, FlowTimer,
};
use tokio::time::{Duration, Instant};

/// Desktop timer backed by `tokio::time::sleep`.
struct DesktopTimer;

impl FlowTimer for DesktopTimer {
    async fn delay_ms(&mut self, millis: u32) {
        tokio::time::sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== korri-flow Quickstart ===\n");
    let mut timer = DesktopTimer;

    // ======================================================================
    // 1. Delay primitive
    // ======================================================================
    println!("1. Sleeping 100 ms");
    let start = Instant::now();
    sleep(&mut timer, 100).await;
    println!("   Woke up after {:?}\n", start.elapsed());

    // ======================================================================
    // 2. Timeout race
    // ======================================================================
    println!("2. Racing a 50 ms operation against a 200 ms deadline");
    let fast = wait(
        &mut timer,
        || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<_, &str>(42)
        },
        200,
    )
    .await;
    println!("   Result: {:?}", fast);

    let slow = wait(
        &mut timer,
        || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<_, &str>(42)
        },
        200,
    )
    .await;
    match slow {
        Ok(value) => println!("   Unexpected value: {}\n", value),
        Err(e) => println!("   {}\n", e),
    }

    // ======================================================================
    // 3. Polling loop
    // ======================================================================
    println!("3. Polling a condition that becomes true on the third attempt");
    let attempts = Cell::new(0u32);
    let outcome = wait_for(
        &mut timer,
        infallible(|| {
            attempts.set(attempts.get() + 1);
            attempts.get() == 3
        }),
        50,
        5,
    )
    .await;
    match outcome {
        Ok(outcome) => println!("   {} after {} attempt(s)\n", outcome, attempts.get()),
        Err(e) => println!("   {}\n", e),
    }

    // ======================================================================
    // 4. Sequential runner
    // ======================================================================
    println!("4. Running a mixed sync/async sequence");
    let steps: Vec<Box<dyn Callback<Error = &str>>> = vec![
        Box::new(from_fn(|| {
            println!("   step 1 (sync)");
            Ok::<_, &str>(())
        })),
        Box::new(from_async(|| async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            println!("   step 2 (async)");
            Ok::<_, &str>(())
        })),
        Box::new(from_fn(|| Err::<(), _>("step 3 refused"))),
    ];
    match do_callbacks(&mut timer, steps, 30).await {
        Ok(outcome) => println!("   {}\n", outcome),
        Err(e) => println!("   {} ({:?})\n", e, e),
    }

    // ======================================================================
    // 5. Configured controller
    // ======================================================================
    println!("5. Same helpers through a FlowController");
    let config = FlowConfig::builder()
        .interval_ms(20)
        .max_attempts(3)
        .timeout_ms(100)
        .build();
    let mut flow = FlowController::new(timer, config);
    match flow.wait_for(infallible(|| false)).await {
        Ok(outcome) => println!("   {}", outcome),
        Err(e) => println!("   {}", e),
    }
}
