//! Transition table keyed by (source state, input).

use crate::core::ids::{InputId, OutputId, StateId};
use std::collections::HashMap;

/// A declared transition: from `source` on `input`, run `outputs` in
/// order and move to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    source: StateId,
    input: InputId,
    destination: StateId,
    outputs: Vec<OutputId>,
}

impl Transition {
    pub(crate) fn new(
        source: StateId,
        input: InputId,
        destination: StateId,
        outputs: Vec<OutputId>,
    ) -> Self {
        Self {
            source,
            input,
            destination,
            outputs,
        }
    }

    pub fn source(&self) -> StateId {
        self.source
    }

    pub fn input(&self) -> InputId {
        self.input
    }

    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Outputs run by this transition, in the order they run.
    pub fn outputs(&self) -> &[OutputId] {
        &self.outputs
    }
}

/// Insertion-ordered transitions with a hash index for dispatch.
#[derive(Debug, Default)]
pub(crate) struct TransitionTable {
    entries: Vec<Transition>,
    index: HashMap<(StateId, InputId), usize>,
}

impl TransitionTable {
    /// Store a transition. A second entry for an existing key is handed
    /// back untouched.
    pub(crate) fn insert(&mut self, transition: Transition) -> Result<(), Transition> {
        let key = (transition.source, transition.input);
        if self.index.contains_key(&key) {
            return Err(transition);
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(transition);
        Ok(())
    }

    pub(crate) fn get(&self, source: StateId, input: InputId) -> Option<&Transition> {
        self.index
            .get(&(source, input))
            .and_then(|&position| self.entries.get(position))
    }

    pub(crate) fn entries(&self) -> &[Transition] {
        &self.entries
    }

    pub(crate) fn from_state(&self, source: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.entries.iter().filter(move |t| t.source == source)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
