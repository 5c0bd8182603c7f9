//! Construction errors for blueprint builders.

use crate::core::{InputId, OutputId, StateId};
use std::fmt;
use thiserror::Error;

/// Kind of declaration named in a [`BuildError::DuplicateDeclaration`].
///
/// Inputs carry nothing but a name, so re-declaring one never conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    State,
    Output,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::State => "state",
            Self::Output => "output",
        })
    }
}

/// Errors that can occur while declaring and wiring a blueprint.
///
/// All of these are caller errors, reported at the offending call.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("{kind} '{name}' is already declared as a different {kind}")]
    DuplicateDeclaration { kind: DeclarationKind, name: String },

    #[error("state '{attempted}' cannot be initial: '{existing}' already is")]
    MultipleInitialStates { existing: String, attempted: String },

    #[error("no initial state declared. Declare one with declare_state(name, true) before freeze()")]
    MissingInitialState,

    #[error("{0} was not declared by this blueprint")]
    UnknownState(StateId),

    #[error("{0} was not declared by this blueprint")]
    UnknownInput(InputId),

    #[error("{0} was not declared by this blueprint")]
    UnknownOutput(OutputId),

    #[error("transition from '{state}' on '{input}' is already registered")]
    DuplicateTransition { state: String, input: String },

    #[error("blueprint is frozen; no further declarations or transitions are accepted")]
    BlueprintFrozen,
}
