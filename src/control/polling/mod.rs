//! Polling retry loop: evaluate a synchronous predicate until it holds, the
//! attempt budget is spent, or the predicate fails.
use crate::control::traits::predicate::Predicate;
use crate::core::Outcome;
use crate::error::WaitForError;
use crate::infra::timer::FlowTimer;

/// Poll `predicate` up to `max_attempts` times, pausing `interval_ms` between
/// two attempts.
///
/// Strategy:
/// 1. Evaluate the predicate.
/// 2. `Err` → stop with [`WaitForError::CallbackFailed`], no further attempt.
/// 3. `Ok(true)` → stop with [`Outcome::CallbackSucceeded`].
/// 4. `Ok(false)` → pause, then try again unless this was the last attempt,
///    in which case stop with [`WaitForError::MaxRetries`].
///
/// The pause only happens between attempts: `k` attempts cost `k - 1` delays.
/// With `max_attempts == 0` the predicate is never evaluated.
pub async fn wait_for<T, P>(
    timer: &mut T,
    mut predicate: P,
    interval_ms: u32,
    max_attempts: u32,
) -> Result<Outcome, WaitForError<P::Error>>
where
    T: FlowTimer,
    P: Predicate,
{
    for attempt in Attempts::new(max_attempts) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Polling attempt {}/{}", attempt.number(), attempt.total());

        match predicate.check() {
            Ok(true) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Condition met after {} attempt(s)", attempt.number());
                return Ok(Outcome::CallbackSucceeded);
            }
            Ok(false) => {}
            Err(cause) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Predicate failed on attempt {}", attempt.number());
                return Err(WaitForError::CallbackFailed(cause));
            }
        }

        if !attempt.is_last() {
            timer.delay_ms(interval_ms).await;
        }
    }

    #[cfg(feature = "defmt")]
    defmt::warn!("Condition still false after {} attempt(s)", max_attempts);
    Err(WaitForError::MaxRetries)
}

//==================================================================================ATTEMPTS
/// One step of the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attempt {
    index: u32,
    total: u32,
}

impl Attempt {
    /// 0-based position of the attempt.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// 1-based position of the attempt.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.index + 1
    }

    /// Attempt budget of the loop this attempt belongs to.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// `true` for the final allowed attempt (no delay follows it).
    #[inline]
    pub const fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Generates the attempts of a bounded polling loop, in increasing order.
#[derive(Debug, Clone)]
pub struct Attempts {
    next: u32,
    total: u32,
}

impl Attempts {
    /// Prepare `total` attempts. Zero yields nothing.
    pub const fn new(total: u32) -> Self {
        Self { next: 0, total }
    }
}

impl Iterator for Attempts {
    type Item = Attempt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let attempt = Attempt {
            index: self.next,
            total: self.total,
        };
        self.next += 1;
        Some(attempt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Attempts {}
