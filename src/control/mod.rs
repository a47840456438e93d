//! Control-flow helpers built on top of [`FlowTimer`](crate::infra::timer::FlowTimer):
//! timeout race, polling retry loop, sequential callback runner, and the
//! configurable controller bundling them.
//!
//! ## Default timing constants
//!
//! These values are used by [`FlowConfig::default`](controller::FlowConfig)
//! when the caller does not supply its own.

pub mod controller;
pub mod polling;
pub mod race;
pub mod sequence;
pub mod traits;

/// Default pause between two polling attempts or two sequence steps (ms).
pub const DEFAULT_INTERVAL_MS: u32 = 100;

/// Default upper bound on polling attempts.
///
/// Combined with [`DEFAULT_INTERVAL_MS`] a condition gets roughly one second
/// to become true before the loop gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default deadline applied by the timeout race (ms).
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;
