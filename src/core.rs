//! Outcome vocabulary shared by the control-flow helpers.
//!
//! Every terminal state is identified by a fixed literal tag. Success tags are
//! carried by [`Outcome`]; failure tags are the `Display` output of the error
//! enums in [`crate::error`].
use core::fmt;

/// Tag reported when the polling predicate returned `true`.
pub const CALLBACK_SUCCEED: &str = "Resolved: callback succeed";
/// Tag reported when every callback of a sequence completed.
pub const CALLBACKS_SUCCEED: &str = "Resolved: callbacks succeed";
/// Tag reported when a predicate or callback failed.
pub const CALLBACK_FAILED: &str = "Rejected: callback failed";
/// Tag reported when the polling loop ran out of attempts.
pub const MAX_RETRIES: &str = "Rejected: max retries";
/// Tag reported when the timer of a race elapsed first.
pub const TIMEOUT: &str = "Rejected: timeout";

/// Successful termination of a loop-based helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The polling predicate returned `true` (see [`crate::wait_for`]).
    CallbackSucceeded,
    /// Every callback of the sequence completed (see [`crate::do_callbacks`]).
    CallbacksSucceeded,
}

impl Outcome {
    /// Literal tag identifying this outcome.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Outcome::CallbackSucceeded => CALLBACK_SUCCEED,
            Outcome::CallbacksSucceeded => CALLBACKS_SUCCEED,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Outcome {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
