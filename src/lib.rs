//! `korri-flow` library: small asynchronous control-flow helpers usable in a
//! `no_std` environment. The crate exposes the timing infrastructure (timer
//! abstraction, delay primitive), the control-flow logic (timeout race,
//! polling retry loop, sequential callback runner), and a configurable
//! controller bundling them around a single timer.
#![no_std]
//==================================================================================
extern crate alloc;

#[cfg(test)]
extern crate std;
//==================================================================================
/// Outcome tags and success values shared by every control-flow helper.
pub mod core;
/// Failure definitions for the race, polling and sequencing helpers.
pub mod error;
/// Timer abstraction and the delay primitive built on top of it.
pub mod infra;
/// Control-flow helpers: timeout race, polling loop, sequential runner,
/// callback/predicate adapters and the configurable controller.
pub mod control;
//==================================================================================
pub use crate::control::{
    controller::{FlowConfig, FlowController},
    polling::wait_for,
    race::wait,
    sequence::do_callbacks,
    traits::{
        callback::{from_async, from_fn, Callback},
        predicate::{infallible, Predicate},
    },
};
pub use crate::core::Outcome;
pub use crate::error::{DoCallbacksError, WaitError, WaitForError};
pub use crate::infra::timer::{sleep, FlowTimer};
