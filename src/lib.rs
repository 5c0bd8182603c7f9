//! Switchyard: declarative finite-state machines.
//!
//! A machine is declared once as a [`Blueprint`]: named states, named
//! inputs, named outputs (side-effecting actions), and a transition table
//! mapping `(state, input)` to a destination state and an ordered list of
//! outputs. Any number of [`Instance`]s then follow that blueprint, each
//! with its own current state.
//!
//! # Core Concepts
//!
//! - **Builder**: [`BlueprintBuilder`] validates declarations as they are
//!   made and freezes them into an immutable, shareable blueprint
//! - **Dispatch**: [`Instance::dispatch`] runs a transition's outputs in
//!   order and advances only when all of them succeed
//! - **Graph**: [`graph::serialize`] renders a blueprint as Graphviz text
//! - **Checkpoint**: [`checkpoint::Checkpoint`] saves and restores an
//!   instance's current state
//!
//! # Example
//!
//! ```rust
//! use switchyard::{BlueprintBuilder, DispatchError, Instance};
//!
//! let mut builder = BlueprintBuilder::<String, String>::new("sample");
//! let begin = builder.declare_state("begin", true).unwrap();
//! let end = builder.declare_state("end", false).unwrap();
//! let go = builder.declare_input("go").unwrap();
//! let out = builder
//!     .declare_output("out", |arg: &String| Ok(format!("out: {arg}")))
//!     .unwrap();
//! builder.add_transition(begin, go, end, [out]).unwrap();
//! let blueprint = builder.freeze().unwrap();
//!
//! let mut instance = Instance::new(blueprint.clone());
//! let results = instance.dispatch(go, &"result".to_string()).unwrap();
//! assert_eq!(results, vec!["out: result".to_string()]);
//! assert_eq!(instance.current_state(), end);
//!
//! let again = instance.dispatch(go, &"result".to_string());
//! assert!(matches!(again, Err(DispatchError::NoTransition { .. })));
//!
//! let dot = blueprint.to_dot();
//! assert!(dot.contains("begin") && dot.contains("go / out"));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod graph;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BlueprintBuilder, BuildError};
pub use crate::core::{Blueprint, InputId, Output, OutputError, OutputId, StateId};
pub use runtime::{DispatchError, Instance};
