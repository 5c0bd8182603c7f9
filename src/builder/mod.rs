//! Builder API for declaring machines.
//!
//! A [`BlueprintBuilder`] collects states, inputs, outputs and transitions
//! and validates each one as it arrives. [`BlueprintBuilder::freeze`]
//! turns the result into an immutable, shareable
//! [`Blueprint`](crate::core::Blueprint).
//!
//! # Example
//!
//! ```
//! use switchyard::builder::BlueprintBuilder;
//!
//! let mut builder = BlueprintBuilder::<String, String>::new("sample");
//! let begin = builder.declare_state("begin", true).unwrap();
//! let end = builder.declare_state("end", false).unwrap();
//! let go = builder.declare_input("go").unwrap();
//! let out = builder.declare_output("out", |arg: &String| Ok(arg.clone())).unwrap();
//! builder.add_transition(begin, go, end, [out]).unwrap();
//!
//! let blueprint = builder.freeze().unwrap();
//! assert_eq!(blueprint.transitions().len(), 1);
//! ```

mod blueprint;
mod error;

pub use blueprint::BlueprintBuilder;
pub use error::{BuildError, DeclarationKind};
