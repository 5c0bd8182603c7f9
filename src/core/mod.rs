//! Core declarations shared by the builder, the dispatch engine and the
//! graph serializer:
//! - opaque identifiers for states, inputs and outputs
//! - the `Output` capability trait
//! - the declaration registry and the transition table
//! - the frozen `Blueprint`
//!
//! Nothing in this module mutates a blueprint after it is frozen.

mod blueprint;
mod ids;
mod output;
pub(crate) mod registry;
mod table;

pub use blueprint::Blueprint;
pub use ids::{InputId, OutputId, StateId};
pub use output::{Output, OutputError};
pub use registry::{DeclaredOutput, Input, State};
pub use table::Transition;

pub(crate) use table::TransitionTable;
