//! Timeout race: run one asynchronous operation against a timer and keep
//! whichever completes first.
use crate::error::WaitError;
use crate::infra::timer::FlowTimer;
use futures_util::future::{select, Either};
use futures_util::pin_mut;

/// Start `operation` and a `timeout_ms` delay together and return the first
/// to complete.
///
/// * The operation completes first with `Ok(value)` → `Ok(value)`.
/// * The operation fails first with `Err(cause)` → [`WaitError::Rejected`].
/// * The timer elapses first → [`WaitError::Timeout`] ("Rejected: timeout").
///
/// When both are ready on the same poll the operation wins. The losing branch
/// is not driven any further: it is dropped together with the race.
pub async fn wait<T, F, Fut, R, E>(
    timer: &mut T,
    operation: F,
    timeout_ms: u32,
) -> Result<R, WaitError<E>>
where
    T: FlowTimer,
    F: FnOnce() -> Fut,
    Fut: core::future::Future<Output = Result<R, E>>,
    E: core::fmt::Debug,
{
    let operation = operation();
    let deadline = timer.delay_ms(timeout_ms);
    pin_mut!(operation);
    pin_mut!(deadline);

    match select(operation, deadline).await {
        Either::Left((Ok(value), _)) => Ok(value),
        Either::Left((Err(cause), _)) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Operation rejected before the {} ms deadline", timeout_ms);
            Err(WaitError::Rejected(cause))
        }
        Either::Right(((), _)) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Deadline of {} ms elapsed first", timeout_ms);
            Err(WaitError::Timeout)
        }
    }
}

#[cfg(test)]
mod tests;
