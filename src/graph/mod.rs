//! Graphviz export.
//!
//! [`serialize`] walks a frozen blueprint and yields a DOT document line
//! by line: one node per state, one labelled edge per transition
//! (`input / output, output`), and a marker on the initial state. The
//! text can be piped straight into `dot`.

mod config;
mod dot;

pub use config::{DotConfig, InitialMarker, RankDirection};
pub use dot::{serialize, serialize_with, DotLines};
