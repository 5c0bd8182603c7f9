//! Per-object cursor over a shared blueprint.

use crate::core::{Blueprint, InputId, StateId};
use crate::runtime::error::DispatchError;
use std::fmt;
use std::sync::Arc;

/// A running machine: the current state of one stateful object.
///
/// Instances are cheap. Any number of them can follow one [`Blueprint`],
/// each tracking its own current state; the blueprint itself is shared
/// and never changes.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::BlueprintBuilder;
/// use switchyard::runtime::Instance;
///
/// let mut builder = BlueprintBuilder::<u32, u32>::new("doubler");
/// let idle = builder.declare_state("idle", true).unwrap();
/// let done = builder.declare_state("done", false).unwrap();
/// let feed = builder.declare_input("feed").unwrap();
/// let double = builder.declare_output("double", |n: &u32| Ok(n * 2)).unwrap();
/// builder.add_transition(idle, feed, done, [double]).unwrap();
/// let blueprint = builder.freeze().unwrap();
///
/// let mut first = Instance::new(blueprint.clone());
/// let second = Instance::new(blueprint);
///
/// assert_eq!(first.dispatch(feed, &21).unwrap(), vec![42]);
/// assert_eq!(first.current_state(), done);
/// assert_eq!(second.current_state(), idle);
/// ```
pub struct Instance<A, R> {
    blueprint: Arc<Blueprint<A, R>>,
    current: StateId,
}

impl<A, R> Instance<A, R> {
    /// Start a new instance in the blueprint's initial state.
    pub fn new(blueprint: Arc<Blueprint<A, R>>) -> Self {
        let current = blueprint.initial_state();
        Self { blueprint, current }
    }

    /// Start an instance in an arbitrary declared state.
    pub fn resume(blueprint: Arc<Blueprint<A, R>>, state: StateId) -> Result<Self, DispatchError> {
        if blueprint.state(state).is_none() {
            return Err(DispatchError::UnknownState(state));
        }
        Ok(Self {
            blueprint,
            current: state,
        })
    }

    pub fn blueprint(&self) -> &Arc<Blueprint<A, R>> {
        &self.blueprint
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn current_state_name(&self) -> &str {
        self.blueprint
            .state(self.current)
            .map_or("", |state| state.name())
    }

    /// Whether the current state has a transition for `input`.
    pub fn accepts(&self, input: InputId) -> bool {
        self.blueprint.transition(self.current, input).is_some()
    }

    /// Inputs the current state has a transition for.
    pub fn accepted_inputs(&self) -> Vec<InputId> {
        self.blueprint.accepted_inputs(self.current)
    }

    /// Feed `input` to the machine.
    ///
    /// Runs the outputs of the matching transition in order, each with
    /// `args`, and returns their results in the same order. The current
    /// state moves to the transition's destination only after every
    /// output has succeeded.
    ///
    /// When there is no transition, or an output fails, the current state
    /// is left as it was. Side effects of outputs that ran before a
    /// failing one are not undone, and outputs after it do not run.
    pub fn dispatch(&mut self, input: InputId, args: &A) -> Result<Vec<R>, DispatchError> {
        let blueprint = &self.blueprint;
        if blueprint.input(input).is_none() {
            return Err(DispatchError::UnknownInput(input));
        }

        let transition = blueprint.transition(self.current, input).ok_or_else(|| {
            DispatchError::NoTransition {
                state: blueprint.state_label(self.current),
                input: blueprint.input_label(input),
            }
        })?;

        let mut results = Vec::with_capacity(transition.outputs().len());
        for &id in transition.outputs() {
            let output = blueprint.declared_output(id);
            let result = output
                .invoke(args)
                .map_err(|source| DispatchError::OutputFailed {
                    output: output.name().to_string(),
                    source,
                })?;
            results.push(result);
        }

        let destination = transition.destination();
        tracing::trace!(
            machine = %blueprint.name(),
            from = %blueprint.state_label(self.current),
            input = %blueprint.input_label(input),
            to = %blueprint.state_label(destination),
            outputs = results.len(),
            "dispatched"
        );

        self.current = destination;
        Ok(results)
    }

    /// Feed the input called `name` to the machine.
    pub fn dispatch_named(&mut self, name: &str, args: &A) -> Result<Vec<R>, DispatchError> {
        let input = self
            .blueprint
            .input_id(name)
            .ok_or_else(|| DispatchError::UnknownInputName(name.to_string()))?;
        self.dispatch(input, args)
    }
}

impl<A, R> Clone for Instance<A, R> {
    fn clone(&self) -> Self {
        Self {
            blueprint: Arc::clone(&self.blueprint),
            current: self.current,
        }
    }
}

impl<A, R> fmt::Debug for Instance<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("machine", &self.blueprint.name())
            .field("state", &self.current_state_name())
            .finish()
    }
}
