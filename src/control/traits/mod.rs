//! Abstraction traits used by the control-flow helpers (polling predicate and
//! sequence callback).
pub mod callback;
pub mod predicate;
