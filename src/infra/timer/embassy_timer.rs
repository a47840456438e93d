//! `FlowTimer` adapter for embassy executors (feature `embassy`).
//!
//! The firmware must link an `embassy-time` driver (e.g. `esp-hal-embassy`,
//! `embassy-stm32`) for the delays to make progress.
use super::FlowTimer;
use embassy_time::{Duration, Timer};

/// Timer based on `embassy_time::Timer::after`.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyTimer;

impl FlowTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        Timer::after(Duration::from_millis(millis as u64)).await;
    }
}
