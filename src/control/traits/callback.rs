//! Zero-argument step executed by [`do_callbacks`](crate::control::sequence::do_callbacks).
//!
//! A step may complete synchronously or after suspension; the runner awaits
//! both the same way. The trait is object safe so heterogeneous sequences can
//! be stored as `Box<dyn Callback<Error = E>>`.
use alloc::boxed::Box;
use async_trait::async_trait;
use core::marker::PhantomData;
use futures_util::{TryFuture, TryFutureExt};

/// Contract for a single step of a sequence. Only pass/fail is observed.
#[async_trait(?Send)]
pub trait Callback {
    type Error: core::fmt::Debug;
    /// Run the step once and report whether it succeeded.
    async fn invoke(&mut self) -> Result<(), Self::Error>;
}

#[async_trait(?Send)]
impl<C: Callback + ?Sized> Callback for Box<C> {
    type Error = C::Error;

    async fn invoke(&mut self) -> Result<(), Self::Error> {
        (**self).invoke().await
    }
}

#[async_trait(?Send)]
impl<C: Callback + ?Sized> Callback for &mut C {
    type Error = C::Error;

    async fn invoke(&mut self) -> Result<(), Self::Error> {
        (**self).invoke().await
    }
}

//==================================================================================SYNC_CALLBACK
/// Step backed by a synchronous closure. The produced value is discarded.
pub struct FromFn<F, T, E> {
    f: F,
    _result: PhantomData<fn() -> Result<T, E>>,
}

#[async_trait(?Send)]
impl<F, T, E> Callback for FromFn<F, T, E>
where
    F: FnMut() -> Result<T, E>,
    E: core::fmt::Debug,
{
    type Error = E;

    async fn invoke(&mut self) -> Result<(), E> {
        (self.f)().map(|_| ())
    }
}

/// Wrap a synchronous closure returning `Result<T, E>` as a [`Callback`].
///
/// ```
/// use korri_flow::{from_fn, Callback};
///
/// fn assert_callback<C: Callback>(_: &C) {}
///
/// let step = from_fn(|| Ok::<_, ()>(42));
/// assert_callback(&step);
/// ```
pub fn from_fn<F, T, E>(f: F) -> FromFn<F, T, E>
where
    F: FnMut() -> Result<T, E>,
    E: core::fmt::Debug,
{
    FromFn {
        f,
        _result: PhantomData,
    }
}

//==================================================================================ASYNC_CALLBACK
/// Step backed by a closure returning a future. The resolved value is discarded.
pub struct FromAsync<F, Fut> {
    f: F,
    _future: PhantomData<fn() -> Fut>,
}

#[async_trait(?Send)]
impl<F, Fut> Callback for FromAsync<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: TryFuture,
    Fut::Error: core::fmt::Debug,
{
    type Error = Fut::Error;

    async fn invoke(&mut self) -> Result<(), Self::Error> {
        TryFutureExt::into_future((self.f)()).await.map(|_| ())
    }
}

/// Wrap a closure producing `impl Future<Output = Result<T, E>>` as a [`Callback`].
pub fn from_async<F, Fut>(f: F) -> FromAsync<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: TryFuture,
    Fut::Error: core::fmt::Debug,
{
    FromAsync {
        f,
        _future: PhantomData,
    }
}
