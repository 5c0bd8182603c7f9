//! Lazy Graphviz (DOT) rendering of a blueprint.

use crate::core::{Blueprint, StateId};
use crate::graph::config::{DotConfig, InitialMarker};
use std::iter::FusedIterator;

/// Node name of the anonymous start marker. State nodes are `s<index>`,
/// so this never collides with one.
const START_NODE: &str = "start";

/// Render `blueprint` with the default [`DotConfig`].
///
/// The returned iterator yields one DOT statement per item, each ending
/// in a newline; concatenating the items gives the whole document. Every
/// call starts a fresh, identical rendering.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::BlueprintBuilder;
/// use switchyard::graph;
///
/// let mut builder = BlueprintBuilder::<(), ()>::new("light");
/// let off = builder.declare_state("off", true).unwrap();
/// let on = builder.declare_state("on", false).unwrap();
/// let flip = builder.declare_input("flip").unwrap();
/// builder.add_transition(off, flip, on, []).unwrap();
/// builder.add_transition(on, flip, off, []).unwrap();
/// let blueprint = builder.freeze().unwrap();
///
/// let dot: String = graph::serialize(&blueprint).collect();
/// assert!(dot.starts_with("digraph \"light\" {"));
/// assert!(dot.contains("s0 -> s1 [label=\"flip\"];"));
/// ```
pub fn serialize<A, R>(blueprint: &Blueprint<A, R>) -> DotLines<'_, A, R> {
    serialize_with(blueprint, DotConfig::default())
}

/// Render `blueprint` with the given configuration.
pub fn serialize_with<A, R>(blueprint: &Blueprint<A, R>, config: DotConfig) -> DotLines<'_, A, R> {
    DotLines {
        blueprint,
        config,
        stage: Stage::Open,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Open,
    GraphDefaults,
    NodeDefaults,
    EdgeDefaults,
    StartNode,
    State(usize),
    StartEdge,
    Transition(usize),
    Unlabeled(usize),
    Close,
    Done,
}

/// Iterator over the lines of a DOT document. See [`serialize`].
pub struct DotLines<'a, A, R> {
    blueprint: &'a Blueprint<A, R>,
    config: DotConfig,
    stage: Stage,
}

impl<A, R> DotLines<'_, A, R> {
    /// Produce the line for the current stage, if it has one, and move on.
    fn step(&mut self) -> Option<String> {
        let blueprint = self.blueprint;
        let (line, next) = match self.stage {
            Stage::Open => {
                let name = self
                    .config
                    .graph_name
                    .as_deref()
                    .unwrap_or_else(|| blueprint.name());
                (Some(format!("digraph {} {{\n", quote(name))), Stage::GraphDefaults)
            }
            Stage::GraphDefaults => (
                Some(format!(
                    "  graph [rankdir={}{}];\n",
                    quote(self.config.rank_direction.as_dot()),
                    self.font_attribute()
                )),
                Stage::NodeDefaults,
            ),
            Stage::NodeDefaults => (
                Some(format!(
                    "  node [shape={}{}];\n",
                    quote(&self.config.state_shape),
                    self.font_attribute()
                )),
                Stage::EdgeDefaults,
            ),
            Stage::EdgeDefaults => (
                self.config
                    .font_name
                    .as_ref()
                    .map(|font| format!("  edge [fontname={}];\n", quote(font))),
                Stage::StartNode,
            ),
            Stage::StartNode => (
                self.uses_start_arrow()
                    .then(|| format!("  {START_NODE} [shape=\"point\", label=\"\"];\n")),
                Stage::State(0),
            ),
            Stage::State(index) => match blueprint.states().get(index) {
                Some(state) => {
                    let mut attributes = format!("label={}", quote(state.name()));
                    if state.is_initial() {
                        attributes.push_str(", style=\"bold\"");
                        if self.config.initial_marker == InitialMarker::DoubleBorder {
                            attributes.push_str(", peripheries=2");
                        }
                    }
                    (
                        Some(format!("  {} [{attributes}];\n", node(state.id()))),
                        Stage::State(index + 1),
                    )
                }
                None => (None, Stage::StartEdge),
            },
            Stage::StartEdge => (
                self.uses_start_arrow().then(|| {
                    format!("  {START_NODE} -> {};\n", node(blueprint.initial_state()))
                }),
                Stage::Transition(0),
            ),
            Stage::Transition(index) => match blueprint.transitions().get(index) {
                Some(transition) => {
                    let mut label = blueprint.input_label(transition.input());
                    let outputs: Vec<&str> = transition
                        .outputs()
                        .iter()
                        .map(|&id| blueprint.declared_output(id).name())
                        .collect();
                    if !outputs.is_empty() {
                        label.push_str(" / ");
                        label.push_str(&outputs.join(", "));
                    }
                    (
                        Some(format!(
                            "  {} -> {} [label={}];\n",
                            node(transition.source()),
                            node(transition.destination()),
                            quote(&label)
                        )),
                        Stage::Transition(index + 1),
                    )
                }
                None => (None, Stage::Unlabeled(0)),
            },
            Stage::Unlabeled(index) => {
                let inputs = blueprint.inputs();
                let outputs = blueprint.outputs();
                if let Some(input) = inputs.get(index) {
                    let used = blueprint
                        .transitions()
                        .iter()
                        .any(|t| t.input() == input.id());
                    (
                        (!used).then(|| format!("  // input {} labels no edge\n", quote(input.name()))),
                        Stage::Unlabeled(index + 1),
                    )
                } else if let Some(output) = outputs.get(index - inputs.len()) {
                    let used = blueprint
                        .transitions()
                        .iter()
                        .any(|t| t.outputs().contains(&output.id()));
                    (
                        (!used).then(|| format!("  // output {} labels no edge\n", quote(output.name()))),
                        Stage::Unlabeled(index + 1),
                    )
                } else {
                    (None, Stage::Close)
                }
            }
            Stage::Close => (Some("}\n".to_string()), Stage::Done),
            Stage::Done => (None, Stage::Done),
        };
        self.stage = next;
        line
    }

    fn uses_start_arrow(&self) -> bool {
        self.config.initial_marker == InitialMarker::StartArrow
    }

    fn font_attribute(&self) -> String {
        self.config
            .font_name
            .as_ref()
            .map(|font| format!(", fontname={}", quote(font)))
            .unwrap_or_default()
    }
}

impl<A, R> Iterator for DotLines<'_, A, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.stage != Stage::Done {
            if let Some(line) = self.step() {
                return Some(line);
            }
        }
        None
    }
}

impl<A, R> FusedIterator for DotLines<'_, A, R> {}

fn node(id: StateId) -> String {
    format!("s{}", id.index())
}

/// Quote `text` as a DOT string literal.
pub(crate) fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
