// Test doubles driving the helpers on a real tokio clock.
use korri_flow::FlowTimer;
use tokio::time::{sleep, Duration};

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl FlowTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[derive(Default)]
#[allow(dead_code)]
/// Tokio timer that also keeps every requested delay, in order.
pub struct CountingTimer {
    pub delays: Vec<u32>,
}

#[allow(dead_code)]
impl CountingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delays scheduled so far.
    pub fn count(&self) -> usize {
        self.delays.len()
    }
}

impl FlowTimer for CountingTimer {
    async fn delay_ms(&mut self, millis: u32) {
        self.delays.push(millis);
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
