//! Sequential callback runner: execute steps one by one, pausing after each,
//! and stop at the first failure.
use crate::control::traits::callback::Callback;
use crate::core::Outcome;
use crate::error::DoCallbacksError;
use crate::infra::timer::FlowTimer;

/// Run every callback of `callbacks` in order, pausing `interval_ms` after
/// each successful one.
///
/// * A failing callback stops the sequence with
///   [`DoCallbacksError::CallbackFailed`]; later callbacks never run and no
///   pause follows the failing step.
/// * Once the last callback and its pause complete, the result is
///   [`Outcome::CallbacksSucceeded`]. An empty sequence succeeds at once.
///
/// Values produced by the callbacks are discarded.
pub async fn do_callbacks<T, I, C>(
    timer: &mut T,
    callbacks: I,
    interval_ms: u32,
) -> Result<Outcome, DoCallbacksError<C::Error>>
where
    T: FlowTimer,
    I: IntoIterator<Item = C>,
    C: Callback,
{
    for (index, mut callback) in callbacks.into_iter().enumerate() {
        #[cfg(feature = "defmt")]
        defmt::trace!("Running callback #{}", index);

        if let Err(cause) = callback.invoke().await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Callback #{} failed, aborting sequence", index);
            return Err(DoCallbacksError::CallbackFailed { index, cause });
        }

        timer.delay_ms(interval_ms).await;
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("Every callback completed");
    Ok(Outcome::CallbacksSucceeded)
}
