//! Dispatch engine: runtime instances driven by inputs.
//!
//! An [`Instance`] is a cursor over a frozen
//! [`Blueprint`](crate::core::Blueprint). [`Instance::dispatch`] looks up
//! the transition for the current state and the given input, runs its
//! outputs in order, and only then moves to the destination state.
//!
//! Dispatch is synchronous and never blocks beyond the outputs
//! themselves. One instance must not be dispatched from two threads at
//! once; move it or wrap it in a lock.

mod error;
mod instance;

pub use error::DispatchError;
pub use instance::Instance;
