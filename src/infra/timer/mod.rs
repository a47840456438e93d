//! Asynchronous timer abstraction providing the delay primitive required by
//! the race, polling and sequencing logic.
//!
//! The library never reads a clock by itself: every helper receives a
//! `FlowTimer` from the caller, so the same code runs on tokio, embassy or a
//! test double.
#[cfg(feature = "embassy")]
pub mod embassy_timer;
#[cfg(feature = "tokio")]
pub mod tokio_timer;

#[cfg(test)]
pub(crate) mod mock;

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait FlowTimer {
    /// Asynchronously wait for `millis` milliseconds.
    ///
    /// Implementations complete no earlier than `millis` after the call and
    /// never fail.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

impl<T: FlowTimer> FlowTimer for &mut T {
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a {
        (**self).delay_ms(millis)
    }
}

/// Suspend the caller for `millis` milliseconds, then resume.
///
/// Schedules exactly one delay on `timer`. The delay is not cancellable other
/// than by dropping the returned future.
pub async fn sleep<T: FlowTimer>(timer: &mut T, millis: u32) {
    #[cfg(feature = "defmt")]
    defmt::trace!("Sleeping {} ms", millis);

    timer.delay_ms(millis).await;
}
