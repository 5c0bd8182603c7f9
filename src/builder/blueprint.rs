//! Builder for declaring and freezing blueprints.

use crate::builder::error::BuildError;
use crate::core::registry::Registry;
use crate::core::{
    Blueprint, InputId, Output, OutputError, OutputId, StateId, Transition, TransitionTable,
};
use std::fmt;
use std::sync::Arc;

/// Accumulates declarations and transitions, then freezes them into a
/// shared [`Blueprint`].
///
/// `A` is the argument type inputs are dispatched with and `R` the result
/// type every output produces.
///
/// Once [`freeze`](Self::freeze) has succeeded, every further declaration
/// or transition fails with [`BuildError::BlueprintFrozen`].
pub struct BlueprintBuilder<A, R> {
    name: String,
    registry: Registry<A, R>,
    table: TransitionTable,
    frozen: Option<Arc<Blueprint<A, R>>>,
}

impl<A, R> BlueprintBuilder<A, R> {
    /// Create an empty builder for a machine called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: Registry::new(),
            table: TransitionTable::default(),
            frozen: None,
        }
    }

    /// Declare a state. Exactly one state per blueprint must be initial.
    ///
    /// Declaring a name again with the same `initial` flag returns the
    /// existing identifier.
    pub fn declare_state(&mut self, name: &str, initial: bool) -> Result<StateId, BuildError> {
        self.ensure_open()?;
        let id = self.registry.declare_state(name, initial)?;
        tracing::trace!(machine = %self.name, state = name, initial, "declared state");
        Ok(id)
    }

    /// Declare an input. Declaring a name again returns the existing
    /// identifier.
    pub fn declare_input(&mut self, name: &str) -> Result<InputId, BuildError> {
        self.ensure_open()?;
        let id = self.registry.declare_input(name);
        tracing::trace!(machine = %self.name, input = name, "declared input");
        Ok(id)
    }

    /// Declare an output backed by a closure.
    ///
    /// Each call wraps a fresh action, so reusing a name fails with
    /// [`BuildError::DuplicateDeclaration`]. Use
    /// [`declare_shared_output`](Self::declare_shared_output) to re-declare
    /// an output idempotently.
    pub fn declare_output<F>(&mut self, name: &str, action: F) -> Result<OutputId, BuildError>
    where
        F: Fn(&A) -> Result<R, OutputError> + Send + Sync + 'static,
    {
        self.declare_shared_output(name, Arc::new(action))
    }

    /// Declare an output backed by a shared [`Output`] implementation.
    ///
    /// Declaring the same name with the same `Arc` again returns the
    /// existing identifier.
    pub fn declare_shared_output(
        &mut self,
        name: &str,
        action: Arc<dyn Output<A, R>>,
    ) -> Result<OutputId, BuildError> {
        self.ensure_open()?;
        let id = self.registry.declare_output(name, action)?;
        tracing::trace!(machine = %self.name, output = name, "declared output");
        Ok(id)
    }

    /// Register the transition taken from `source` on `input`.
    ///
    /// Every identifier must come from this builder, and `(source, input)`
    /// may be registered only once.
    pub fn add_transition(
        &mut self,
        source: StateId,
        input: InputId,
        destination: StateId,
        outputs: impl IntoIterator<Item = OutputId>,
    ) -> Result<(), BuildError> {
        self.ensure_open()?;

        let source_name = self
            .registry
            .state(source)
            .ok_or(BuildError::UnknownState(source))?
            .name()
            .to_string();
        let input_name = self
            .registry
            .input(input)
            .ok_or(BuildError::UnknownInput(input))?
            .name()
            .to_string();
        if self.registry.state(destination).is_none() {
            return Err(BuildError::UnknownState(destination));
        }

        let outputs: Vec<OutputId> = outputs.into_iter().collect();
        if let Some(&unknown) = outputs.iter().find(|&&id| self.registry.output(id).is_none()) {
            return Err(BuildError::UnknownOutput(unknown));
        }

        let output_count = outputs.len();
        if self
            .table
            .insert(Transition::new(source, input, destination, outputs))
            .is_err()
        {
            return Err(BuildError::DuplicateTransition {
                state: source_name,
                input: input_name,
            });
        }

        tracing::trace!(
            machine = %self.name,
            from = %source_name,
            input = %input_name,
            to = %self.registry.state(destination).map_or("", |s| s.name()),
            outputs = output_count,
            "registered transition"
        );
        Ok(())
    }

    /// Register several transitions, stopping at the first error.
    ///
    /// Transitions before the failing one stay registered.
    pub fn add_transitions<I, O>(&mut self, transitions: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = (StateId, InputId, StateId, O)>,
        O: IntoIterator<Item = OutputId>,
    {
        for (source, input, destination, outputs) in transitions {
            self.add_transition(source, input, destination, outputs)?;
        }
        Ok(())
    }

    /// Finish the blueprint.
    ///
    /// Fails with [`BuildError::MissingInitialState`] when no state was
    /// declared initial. Calling it again after success hands back the
    /// same shared blueprint.
    pub fn freeze(&mut self) -> Result<Arc<Blueprint<A, R>>, BuildError> {
        if let Some(blueprint) = &self.frozen {
            return Ok(Arc::clone(blueprint));
        }

        let initial = self
            .registry
            .initial()
            .ok_or(BuildError::MissingInitialState)?;

        let registry = std::mem::replace(&mut self.registry, Registry::new());
        let table = std::mem::take(&mut self.table);
        let blueprint = Arc::new(Blueprint::new(self.name.clone(), registry, table, initial));

        tracing::debug!(
            machine = %blueprint.name(),
            states = blueprint.states().len(),
            inputs = blueprint.inputs().len(),
            outputs = blueprint.outputs().len(),
            transitions = blueprint.transitions().len(),
            unreachable = blueprint.unreachable_states().len(),
            "blueprint frozen"
        );

        self.frozen = Some(Arc::clone(&blueprint));
        Ok(blueprint)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }

    fn ensure_open(&self) -> Result<(), BuildError> {
        if self.frozen.is_some() {
            return Err(BuildError::BlueprintFrozen);
        }
        Ok(())
    }
}

impl<A, R> fmt::Debug for BlueprintBuilder<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueprintBuilder")
            .field("name", &self.name)
            .field("transitions", &self.table.len())
            .field("frozen", &self.is_frozen())
            .finish()
    }
}
