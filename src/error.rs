//! Error definitions shared across library modules.
//! Each type models the failure vocabulary of one helper. The `Display`
//! output is the literal rejection tag; the underlying cause stays available
//! in the variant for diagnostics.
use thiserror_no_std::Error;

//==================================================================================WAIT_ERROR
#[derive(Error, Debug)]
/// Failures of the timeout race ([`crate::wait`]).
pub enum WaitError<E: core::fmt::Debug> {
    /// The timer elapsed before the operation completed.
    #[error("Rejected: timeout")]
    Timeout,
    /// The operation itself failed before the timer elapsed.
    #[error("Rejected: {0:?}")]
    Rejected(E),
}

impl<E: core::fmt::Debug> WaitError<E> {
    /// `true` when the timer won the race.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout)
    }

    /// Consume the error and return the operation's own failure, if any.
    pub fn into_rejection(self) -> Option<E> {
        match self {
            WaitError::Timeout => None,
            WaitError::Rejected(cause) => Some(cause),
        }
    }
}

//==================================================================================WAIT_FOR_ERROR
#[derive(Error, Debug)]
/// Failures of the polling retry loop ([`crate::wait_for`]).
pub enum WaitForError<E: core::fmt::Debug> {
    /// The predicate failed; no further attempt was made.
    #[error("Rejected: callback failed")]
    CallbackFailed(E),
    /// Every allowed attempt returned `false`.
    #[error("Rejected: max retries")]
    MaxRetries,
}

//==================================================================================DO_CALLBACKS_ERROR
#[derive(Error, Debug)]
/// Failures of the sequential callback runner ([`crate::do_callbacks`]).
pub enum DoCallbacksError<E: core::fmt::Debug> {
    /// The callback at `index` (0-based) failed; later callbacks never ran.
    #[error("Rejected: callback failed")]
    CallbackFailed { index: usize, cause: E },
}

impl<E: core::fmt::Debug> DoCallbacksError<E> {
    /// Position of the failing callback in the sequence.
    pub fn index(&self) -> usize {
        match self {
            DoCallbacksError::CallbackFailed { index, .. } => *index,
        }
    }
}
