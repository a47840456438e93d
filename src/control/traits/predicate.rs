//! Synchronous condition polled by [`wait_for`](crate::control::polling::wait_for).
use core::convert::Infallible as Never;

/// Zero-argument synchronous test returning a boolean or failing.
pub trait Predicate {
    type Error: core::fmt::Debug;
    /// Evaluate the condition once.
    fn check(&mut self) -> Result<bool, Self::Error>;
}

impl<F, E> Predicate for F
where
    F: FnMut() -> Result<bool, E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn check(&mut self) -> Result<bool, E> {
        self()
    }
}

/// Predicate wrapper for closures that cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(F);

impl<F> Predicate for Infallible<F>
where
    F: FnMut() -> bool,
{
    type Error = Never;

    fn check(&mut self) -> Result<bool, Never> {
        Ok((self.0)())
    }
}

/// Adapt a plain `FnMut() -> bool` into a [`Predicate`].
///
/// ```
/// use korri_flow::{infallible, Predicate};
///
/// let mut ready = infallible(|| true);
/// assert!(ready.check().unwrap());
/// ```
pub fn infallible<F>(f: F) -> Infallible<F>
where
    F: FnMut() -> bool,
{
    Infallible(f)
}
