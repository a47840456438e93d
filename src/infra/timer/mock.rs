//! Test double recording every requested delay without waiting.
use super::FlowTimer;
use alloc::vec::Vec;

/// Timer that completes immediately and keeps the requested durations.
#[derive(Debug, Default)]
pub(crate) struct RecordingTimer {
    pub(crate) delays: Vec<u32>,
}

impl RecordingTimer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of delays scheduled so far.
    pub(crate) fn count(&self) -> usize {
        self.delays.len()
    }
}

impl FlowTimer for RecordingTimer {
    async fn delay_ms(&mut self, millis: u32) {
        self.delays.push(millis);
    }
}
