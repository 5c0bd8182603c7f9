//! Dispatch errors.

use crate::core::{InputId, OutputError, StateId};
use thiserror::Error;

/// Errors returned by [`Instance`](crate::runtime::Instance) operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The current state has no transition for the input. The instance
    /// stays where it was.
    #[error("no transition from state '{state}' on input '{input}'")]
    NoTransition { state: String, input: String },

    #[error("{0} was not declared by this blueprint")]
    UnknownInput(InputId),

    #[error("no input named '{0}'")]
    UnknownInputName(String),

    #[error("{0} was not declared by this blueprint")]
    UnknownState(StateId),

    /// An output failed. Outputs before it have already run; the instance
    /// stays in its pre-dispatch state.
    #[error("output '{output}' failed: {source}")]
    OutputFailed {
        output: String,
        #[source]
        source: OutputError,
    },
}

impl DispatchError {
    /// The error raised by a failing output, if that is what this is.
    pub fn into_output_error(self) -> Option<OutputError> {
        match self {
            Self::OutputFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
