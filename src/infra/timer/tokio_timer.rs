//! `FlowTimer` adapter for the tokio runtime (feature `tokio`).
use super::FlowTimer;
use ::tokio::time::{sleep, Duration};

/// Timer based on `tokio::time::sleep`.
///
/// Requires a tokio runtime with the time driver enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTimer;

impl FlowTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
