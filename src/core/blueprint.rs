//! The frozen, shareable machine declaration.

use crate::core::ids::{InputId, OutputId, StateId};
use crate::core::registry::{DeclaredOutput, Input, Registry, State};
use crate::core::table::{Transition, TransitionTable};
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// A finished machine declaration.
///
/// A blueprint is produced by [`BlueprintBuilder::freeze`] and never
/// changes afterwards. It is shared (usually behind an `Arc`) by every
/// [`Instance`] that follows it and by the graph serializer.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::BlueprintBuilder;
///
/// let mut builder = BlueprintBuilder::<(), ()>::new("door");
/// let closed = builder.declare_state("closed", true).unwrap();
/// let open = builder.declare_state("open", false).unwrap();
/// let push = builder.declare_input("push").unwrap();
/// builder.add_transition(closed, push, open, []).unwrap();
///
/// let blueprint = builder.freeze().unwrap();
/// assert_eq!(blueprint.initial_state(), closed);
/// assert_eq!(blueprint.transition(closed, push).unwrap().destination(), open);
/// assert!(blueprint.transition(open, push).is_none());
/// ```
///
/// [`BlueprintBuilder::freeze`]: crate::builder::BlueprintBuilder::freeze
/// [`Instance`]: crate::runtime::Instance
pub struct Blueprint<A, R> {
    name: String,
    registry: Registry<A, R>,
    table: TransitionTable,
    initial: StateId,
}

impl<A, R> Blueprint<A, R> {
    pub(crate) fn new(
        name: String,
        registry: Registry<A, R>,
        table: TransitionTable,
        initial: StateId,
    ) -> Self {
        Self {
            name,
            registry,
            table,
            initial,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// State every new instance starts in.
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[State] {
        self.registry.states()
    }

    pub fn inputs(&self) -> &[Input] {
        self.registry.inputs()
    }

    pub fn outputs(&self) -> &[DeclaredOutput<A, R>] {
        self.registry.outputs()
    }

    /// Transitions in registration order.
    pub fn transitions(&self) -> &[Transition] {
        self.table.entries()
    }

    /// The transition taken from `state` on `input`, if one is declared.
    pub fn transition(&self, state: StateId, input: InputId) -> Option<&Transition> {
        self.table.get(state, input)
    }

    /// Inputs `state` has a transition for, in registration order.
    pub fn accepted_inputs(&self, state: StateId) -> Vec<InputId> {
        self.table.from_state(state).map(Transition::input).collect()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.registry.state(id)
    }

    pub fn input(&self, id: InputId) -> Option<&Input> {
        self.registry.input(id)
    }

    pub fn output(&self, id: OutputId) -> Option<&DeclaredOutput<A, R>> {
        self.registry.output(id)
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.registry.state_id(name)
    }

    pub fn input_id(&self, name: &str) -> Option<InputId> {
        self.registry.input_id(name)
    }

    pub fn output_id(&self, name: &str) -> Option<OutputId> {
        self.registry.output_id(name)
    }

    /// Output referenced by a transition of this blueprint. Transitions
    /// only ever hold identifiers checked against the registry.
    pub(crate) fn declared_output(&self, id: OutputId) -> &DeclaredOutput<A, R> {
        &self.registry.outputs()[id.index()]
    }

    /// Name of a state of this blueprint, or its identifier when foreign.
    pub(crate) fn state_label(&self, id: StateId) -> String {
        self.state(id)
            .map_or_else(|| id.to_string(), |state| state.name().to_string())
    }

    pub(crate) fn input_label(&self, id: InputId) -> String {
        self.input(id)
            .map_or_else(|| id.to_string(), |input| input.name().to_string())
    }

    /// States reachable from the initial state, in declaration order.
    pub fn reachable_states(&self) -> Vec<StateId> {
        let mut seen = HashSet::from([self.initial]);
        let mut queue = VecDeque::from([self.initial]);

        while let Some(state) = queue.pop_front() {
            for transition in self.table.from_state(state) {
                if seen.insert(transition.destination()) {
                    queue.push_back(transition.destination());
                }
            }
        }

        self.states()
            .iter()
            .map(State::id)
            .filter(|id| seen.contains(id))
            .collect()
    }

    /// States no sequence of inputs can lead to from the initial state.
    pub fn unreachable_states(&self) -> Vec<StateId> {
        let reachable: HashSet<StateId> = self.reachable_states().into_iter().collect();
        self.states()
            .iter()
            .map(State::id)
            .filter(|id| !reachable.contains(id))
            .collect()
    }

    /// Render as Graphviz text with the default configuration.
    ///
    /// Shorthand for collecting [`crate::graph::serialize`].
    pub fn to_dot(&self) -> String {
        crate::graph::serialize(self).collect()
    }
}

impl<A, R> fmt::Debug for Blueprint<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
            .field("name", &self.name)
            .field("initial", &self.state_label(self.initial))
            .field("states", &self.registry.states().len())
            .field("inputs", &self.registry.inputs().len())
            .field("outputs", &self.registry.outputs().len())
            .field("transitions", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::BlueprintBuilder;

    #[test]
    fn reachability_follows_transitions() {
        let mut builder = BlueprintBuilder::<(), ()>::new("reach");
        let a = builder.declare_state("a", true).unwrap();
        let b = builder.declare_state("b", false).unwrap();
        let c = builder.declare_state("c", false).unwrap();
        let island = builder.declare_state("island", false).unwrap();
        let next = builder.declare_input("next").unwrap();
        builder.add_transition(a, next, b, []).unwrap();
        builder.add_transition(b, next, c, []).unwrap();
        builder.add_transition(island, next, a, []).unwrap();

        let blueprint = builder.freeze().unwrap();

        assert_eq!(blueprint.reachable_states(), vec![a, b, c]);
        assert_eq!(blueprint.unreachable_states(), vec![island]);
    }

    #[test]
    fn accepted_inputs_lists_outgoing_edges() {
        let mut builder = BlueprintBuilder::<(), ()>::new("inputs");
        let a = builder.declare_state("a", true).unwrap();
        let b = builder.declare_state("b", false).unwrap();
        let left = builder.declare_input("left").unwrap();
        let right = builder.declare_input("right").unwrap();
        builder.add_transition(a, right, b, []).unwrap();
        builder.add_transition(a, left, a, []).unwrap();

        let blueprint = builder.freeze().unwrap();

        assert_eq!(blueprint.accepted_inputs(a), vec![right, left]);
        assert!(blueprint.accepted_inputs(b).is_empty());
    }

    #[test]
    fn name_lookups_resolve_declarations() {
        let mut builder = BlueprintBuilder::<(), ()>::new("names");
        let a = builder.declare_state("a", true).unwrap();
        let go = builder.declare_input("go").unwrap();
        let out = builder.declare_output("out", |_: &()| Ok(())).unwrap();

        let blueprint = builder.freeze().unwrap();

        assert_eq!(blueprint.name(), "names");
        assert_eq!(blueprint.state_id("a"), Some(a));
        assert_eq!(blueprint.input_id("go"), Some(go));
        assert_eq!(blueprint.output_id("out"), Some(out));
        assert_eq!(blueprint.output(out).unwrap().name(), "out");
        assert!(blueprint.state_id("missing").is_none());
    }
}
