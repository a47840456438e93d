//! Infrastructure shared by the control-flow helpers: the timer abstraction
//! and its executor-specific adapters.
pub mod timer;
