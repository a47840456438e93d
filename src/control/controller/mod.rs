//! Configurable front-end owning a timer and the default timing parameters.
//!
//! [`FlowController`] keeps the timer between calls and applies a
//! [`FlowConfig`], so call sites only provide the operation itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use korri_flow::{infallible, FlowConfig, FlowController};
//!
//! let config = FlowConfig::builder()
//!     .interval_ms(50)
//!     .max_attempts(20)
//!     .build();
//! let mut flow = FlowController::new(timer, config);
//!
//! flow.wait_for(infallible(|| link_is_up())).await?;
//! ```
use crate::{
    control::{
        polling::wait_for,
        race::wait,
        sequence::do_callbacks,
        traits::{callback::Callback, predicate::Predicate},
        DEFAULT_INTERVAL_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_MS,
    },
    core::Outcome,
    error::{DoCallbacksError, WaitError, WaitForError},
    infra::timer::{sleep, FlowTimer},
};

//==================================================================================FLOW_CONFIG
/// Timing parameters applied by [`FlowController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlowConfig {
    /// Pause between polling attempts and after every sequence step (ms).
    pub interval_ms: u32,
    /// Upper bound on polling attempts.
    pub max_attempts: u32,
    /// Deadline of the timeout race (ms).
    pub timeout_ms: u32,
}

impl FlowConfig {
    /// Create a builder seeded with the default values.
    #[inline]
    pub const fn builder() -> FlowConfigBuilder {
        FlowConfigBuilder::new()
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Builder for [`FlowConfig`].
#[derive(Debug, Clone, Copy)]
pub struct FlowConfigBuilder {
    config: FlowConfig,
}

impl FlowConfigBuilder {
    /// Initialize the builder with the crate defaults.
    #[inline]
    pub const fn new() -> Self {
        Self {
            config: FlowConfig {
                interval_ms: DEFAULT_INTERVAL_MS,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
        }
    }

    /// Set the pause between attempts/steps.
    #[inline]
    pub const fn interval_ms(mut self, value: u32) -> Self {
        self.config.interval_ms = value;
        self
    }

    /// Set the polling attempt budget.
    #[inline]
    pub const fn max_attempts(mut self, value: u32) -> Self {
        self.config.max_attempts = value;
        self
    }

    /// Set the timeout race deadline.
    #[inline]
    pub const fn timeout_ms(mut self, value: u32) -> Self {
        self.config.timeout_ms = value;
        self
    }

    /// Finalize the configuration.
    #[inline]
    pub const fn build(self) -> FlowConfig {
        self.config
    }
}

impl Default for FlowConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================FLOW_CONTROLLER
/// Timer plus configuration, exposing every helper as a method.
pub struct FlowController<T: FlowTimer> {
    /// Timer driving every delay and deadline.
    timer: T,
    /// Parameters applied when the caller does not supply its own.
    config: FlowConfig,
}

impl<T: FlowTimer> FlowController<T> {
    /// Bundle `timer` with `config`.
    pub fn new(timer: T, config: FlowConfig) -> Self {
        Self { timer, config }
    }

    /// Bundle `timer` with [`FlowConfig::default`].
    pub fn with_defaults(timer: T) -> Self {
        Self::new(timer, FlowConfig::default())
    }

    /// Active configuration.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replace the configuration for subsequent calls.
    pub fn set_config(&mut self, config: FlowConfig) {
        self.config = config;
    }

    /// Give the timer back.
    pub fn into_timer(self) -> T {
        self.timer
    }

    /// Pause for `millis` milliseconds.
    pub async fn sleep(&mut self, millis: u32) {
        sleep(&mut self.timer, millis).await;
    }

    /// Race `operation` against the configured deadline.
    pub async fn wait<F, Fut, R, E>(&mut self, operation: F) -> Result<R, WaitError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: core::future::Future<Output = Result<R, E>>,
        E: core::fmt::Debug,
    {
        let timeout_ms = self.config.timeout_ms;
        wait(&mut self.timer, operation, timeout_ms).await
    }

    /// Poll `predicate` with the configured interval and attempt budget.
    pub async fn wait_for<P: Predicate>(
        &mut self,
        predicate: P,
    ) -> Result<Outcome, WaitForError<P::Error>> {
        let FlowConfig {
            interval_ms,
            max_attempts,
            ..
        } = self.config;
        wait_for(&mut self.timer, predicate, interval_ms, max_attempts).await
    }

    /// Run `callbacks` in order with the configured interval after each.
    pub async fn do_callbacks<I, C>(
        &mut self,
        callbacks: I,
    ) -> Result<Outcome, DoCallbacksError<C::Error>>
    where
        I: IntoIterator<Item = C>,
        C: Callback,
    {
        let interval_ms = self.config.interval_ms;
        do_callbacks(&mut self.timer, callbacks, interval_ms).await
    }
}
