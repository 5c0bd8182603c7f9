//! Declaration registry: the arena of states, inputs and outputs.

use crate::builder::{BuildError, DeclarationKind};
use crate::core::ids::{InputId, MachineKey, OutputId, StateId};
use crate::core::output::{Output, OutputError};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A declared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    id: StateId,
    name: String,
    initial: bool,
}

impl State {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether instances start in this state.
    pub fn is_initial(&self) -> bool {
        self.initial
    }
}

/// A declared input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    id: InputId,
    name: String,
}

impl Input {
    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A declared output together with the action it runs.
pub struct DeclaredOutput<A, R> {
    id: OutputId,
    name: String,
    action: Arc<dyn Output<A, R>>,
}

impl<A, R> DeclaredOutput<A, R> {
    pub fn id(&self) -> OutputId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, args: &A) -> Result<R, OutputError> {
        self.action.invoke(args)
    }
}

impl<A, R> fmt::Debug for DeclaredOutput<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredOutput")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Arena of every declaration made against one blueprint.
pub(crate) struct Registry<A, R> {
    key: MachineKey,
    states: Vec<State>,
    inputs: Vec<Input>,
    outputs: Vec<DeclaredOutput<A, R>>,
    states_by_name: HashMap<String, StateId>,
    inputs_by_name: HashMap<String, InputId>,
    outputs_by_name: HashMap<String, OutputId>,
    initial: Option<StateId>,
}

impl<A, R> Registry<A, R> {
    pub(crate) fn new() -> Self {
        Self {
            key: MachineKey::next(),
            states: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            states_by_name: HashMap::new(),
            inputs_by_name: HashMap::new(),
            outputs_by_name: HashMap::new(),
            initial: None,
        }
    }

    pub(crate) fn declare_state(&mut self, name: &str, initial: bool) -> Result<StateId, BuildError> {
        if let Some(&id) = self.states_by_name.get(name) {
            return if self.states[id.index()].initial == initial {
                Ok(id)
            } else {
                Err(BuildError::DuplicateDeclaration {
                    kind: DeclarationKind::State,
                    name: name.to_string(),
                })
            };
        }

        if initial {
            if let Some(existing) = self.initial {
                return Err(BuildError::MultipleInitialStates {
                    existing: self.states[existing.index()].name.clone(),
                    attempted: name.to_string(),
                });
            }
        }

        let id = StateId::new(self.key, self.states.len());
        self.states.push(State {
            id,
            name: name.to_string(),
            initial,
        });
        self.states_by_name.insert(name.to_string(), id);
        if initial {
            self.initial = Some(id);
        }
        Ok(id)
    }

    /// Inputs carry nothing but a name, so re-declaring one is always
    /// the same input.
    pub(crate) fn declare_input(&mut self, name: &str) -> InputId {
        if let Some(&id) = self.inputs_by_name.get(name) {
            return id;
        }

        let id = InputId::new(self.key, self.inputs.len());
        self.inputs.push(Input {
            id,
            name: name.to_string(),
        });
        self.inputs_by_name.insert(name.to_string(), id);
        id
    }

    pub(crate) fn declare_output(
        &mut self,
        name: &str,
        action: Arc<dyn Output<A, R>>,
    ) -> Result<OutputId, BuildError> {
        if let Some(&id) = self.outputs_by_name.get(name) {
            // Same name is the same output only when it wraps the very same action.
            return if Arc::ptr_eq(&self.outputs[id.index()].action, &action) {
                Ok(id)
            } else {
                Err(BuildError::DuplicateDeclaration {
                    kind: DeclarationKind::Output,
                    name: name.to_string(),
                })
            };
        }

        let id = OutputId::new(self.key, self.outputs.len());
        self.outputs.push(DeclaredOutput {
            id,
            name: name.to_string(),
            action,
        });
        self.outputs_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub(crate) fn initial(&self) -> Option<StateId> {
        self.initial
    }

    pub(crate) fn state(&self, id: StateId) -> Option<&State> {
        if id.machine() != self.key {
            return None;
        }
        self.states.get(id.index())
    }

    pub(crate) fn input(&self, id: InputId) -> Option<&Input> {
        if id.machine() != self.key {
            return None;
        }
        self.inputs.get(id.index())
    }

    pub(crate) fn output(&self, id: OutputId) -> Option<&DeclaredOutput<A, R>> {
        if id.machine() != self.key {
            return None;
        }
        self.outputs.get(id.index())
    }

    pub(crate) fn states(&self) -> &[State] {
        &self.states
    }

    pub(crate) fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub(crate) fn outputs(&self) -> &[DeclaredOutput<A, R>] {
        &self.outputs
    }

    pub(crate) fn state_id(&self, name: &str) -> Option<StateId> {
        self.states_by_name.get(name).copied()
    }

    pub(crate) fn input_id(&self, name: &str) -> Option<InputId> {
        self.inputs_by_name.get(name).copied()
    }

    pub(crate) fn output_id(&self, name: &str) -> Option<OutputId> {
        self.outputs_by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Arc<dyn Output<(), ()>> {
        Arc::new(|_: &()| -> Result<(), OutputError> { Ok(()) })
    }

    #[test]
    fn declarations_get_sequential_ids() {
        let mut registry: Registry<(), ()> = Registry::new();

        let a = registry.declare_state("a", true).unwrap();
        let b = registry.declare_state("b", false).unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(registry.initial(), Some(a));
        assert_eq!(registry.state(b).unwrap().name(), "b");
    }

    #[test]
    fn second_initial_state_is_rejected() {
        let mut registry: Registry<(), ()> = Registry::new();
        registry.declare_state("a", true).unwrap();

        let result = registry.declare_state("b", true);

        assert_eq!(
            result,
            Err(BuildError::MultipleInitialStates {
                existing: "a".to_string(),
                attempted: "b".to_string(),
            })
        );
        assert!(registry.state_id("b").is_none());
    }

    #[test]
    fn identical_state_redeclaration_is_idempotent() {
        let mut registry: Registry<(), ()> = Registry::new();

        let first = registry.declare_state("a", true).unwrap();
        let second = registry.declare_state("a", true).unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.states().len(), 1);
    }

    #[test]
    fn conflicting_state_redeclaration_fails() {
        let mut registry: Registry<(), ()> = Registry::new();
        registry.declare_state("a", false).unwrap();

        let result = registry.declare_state("a", true);

        assert!(matches!(
            result,
            Err(BuildError::DuplicateDeclaration {
                kind: DeclarationKind::State,
                ..
            })
        ));
    }

    #[test]
    fn inputs_are_idempotent_by_name() {
        let mut registry: Registry<(), ()> = Registry::new();

        let first = registry.declare_input("go");
        let second = registry.declare_input("go");

        assert_eq!(first, second);
        assert_eq!(registry.inputs().len(), 1);
    }

    #[test]
    fn outputs_are_idempotent_only_for_the_same_action() {
        let mut registry: Registry<(), ()> = Registry::new();
        let action = noop();

        let first = registry.declare_output("out", Arc::clone(&action)).unwrap();
        let again = registry.declare_output("out", action).unwrap();
        let other = registry.declare_output("out", noop());

        assert_eq!(first, again);
        assert!(matches!(
            other,
            Err(BuildError::DuplicateDeclaration {
                kind: DeclarationKind::Output,
                ..
            })
        ));
    }

    #[test]
    fn foreign_ids_are_not_found() {
        let mut ours: Registry<(), ()> = Registry::new();
        let mut theirs: Registry<(), ()> = Registry::new();
        ours.declare_state("a", true).unwrap();
        let foreign = theirs.declare_state("a", true).unwrap();

        assert!(ours.state(foreign).is_none());
    }
}
