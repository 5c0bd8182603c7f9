//! Graphviz output checks.
//!
//! The validity test feeds the rendered text to the `dot` executable. It is
//! ignored by default; run it with `cargo test -- --ignored` where Graphviz
//! is installed.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;
use switchyard::graph::{self, DotConfig, InitialMarker, RankDirection};
use switchyard::{Blueprint, BlueprintBuilder};

fn sample() -> Arc<Blueprint<String, String>> {
    let mut builder = BlueprintBuilder::new("sample");
    let begin = builder.declare_state("begin", true).unwrap();
    let end = builder.declare_state("end", false).unwrap();
    let go = builder.declare_input("go").unwrap();
    let out = builder.declare_output("out", |s: &String| Ok(s.clone())).unwrap();
    builder.add_transition(begin, go, end, [out]).unwrap();
    builder.freeze().unwrap()
}

fn awkward_names() -> Arc<Blueprint<(), ()>> {
    let mut builder = BlueprintBuilder::new("say \"cheese\"");
    let quoted = builder.declare_state("\"quoted\"", true).unwrap();
    let slashed = builder.declare_state("back\\slash", false).unwrap();
    let multi = builder.declare_state("two\nlines", false).unwrap();
    let arrow = builder.declare_input("-> not an edge").unwrap();
    let brace = builder.declare_input("}").unwrap();
    let semi = builder.declare_output("a; b", |_: &()| Ok(())).unwrap();
    builder.declare_input("never used").unwrap();
    builder
        .add_transitions([
            (quoted, arrow, slashed, vec![semi]),
            (slashed, brace, multi, vec![]),
            (multi, arrow, quoted, vec![semi, semi]),
        ])
        .unwrap();
    builder.freeze().unwrap()
}

fn accepted_by_dot(text: &str) -> bool {
    let mut child = Command::new("dot")
        .arg("-Tcanon")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn dot");
    child
        .stdin
        .take()
        .expect("dot stdin")
        .write_all(text.as_bytes())
        .expect("write to dot");
    child.wait().expect("wait for dot").success()
}

#[test]
fn sample_names_every_declaration() {
    let dot = sample().to_dot();

    assert!(dot.starts_with("digraph \"sample\" {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("[label=\"begin\""));
    assert!(dot.contains("[label=\"end\"]"));
    assert!(dot.contains("[label=\"go / out\"]"));
}

#[test]
fn special_characters_are_escaped() {
    let dot = awkward_names().to_dot();

    assert!(dot.starts_with("digraph \"say \\\"cheese\\\"\" {\n"));
    assert!(dot.contains("[label=\"\\\"quoted\\\"\""));
    assert!(dot.contains("[label=\"back\\\\slash\"]"));
    assert!(dot.contains("[label=\"two\\nlines\"]"));
    assert!(dot.contains("[label=\"-> not an edge / a; b, a; b\"]"));
    assert!(dot.contains("// input \"never used\" labels no edge"));
}

#[test]
fn configured_rendering_differs_only_where_asked() {
    let blueprint = sample();
    let config = DotConfig::new()
        .rank_direction(RankDirection::TopToBottom)
        .initial_marker(InitialMarker::DoubleBorder)
        .state_shape("box");

    let plain = blueprint.to_dot();
    let styled: String = graph::serialize_with(&blueprint, config).collect();

    assert_ne!(plain, styled);
    assert!(styled.contains("node [shape=\"box\"];"));
    assert!(styled.contains("rankdir=\"TB\""));
    assert!(styled.contains("s0 -> s1 [label=\"go / out\"];"));
    assert!(!styled.contains("start ->"));
}

#[test]
fn names_differing_by_carriage_return_stay_distinct() {
    let mut builder = BlueprintBuilder::<(), ()>::new("cr");
    let plain = builder.declare_state("ab", true).unwrap();
    let carriage = builder.declare_state("a\rb", false).unwrap();
    let step = builder.declare_input("step").unwrap();
    builder.add_transition(plain, step, carriage, []).unwrap();
    let dot = builder.freeze().unwrap().to_dot();

    assert!(dot.contains("s0 [label=\"ab\", style=\"bold\"];"));
    assert!(dot.contains("s1 [label=\"a\\rb\"];"));
}

#[test]
#[ignore = "requires the Graphviz dot executable"]
fn graphviz_accepts_rendered_documents() {
    assert!(accepted_by_dot(&sample().to_dot()));
    assert!(accepted_by_dot(&awkward_names().to_dot()));

    let config = DotConfig::new()
        .initial_marker(InitialMarker::DoubleBorder)
        .font_name("Courier");
    let styled: String = graph::serialize_with(&awkward_names(), config).collect();
    assert!(accepted_by_dot(&styled));
}
