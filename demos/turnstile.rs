//! Coin-Operated Turnstile
//!
//! This demo declares the classic turnstile once and drives two
//! independent instances of it.
//!
//! Key concepts:
//! - Declaring states, inputs and outputs by name
//! - Outputs receiving the dispatch argument and returning results
//! - Rejected inputs leaving the instance where it was
//! - Rendering the blueprint as Graphviz text
//! - Checkpointing an instance and restoring it
//!
//! Run with: cargo run --example turnstile
//! Set RUST_LOG=switchyard=trace to see transitions as they happen.

use switchyard::checkpoint::Checkpoint;
use switchyard::{BlueprintBuilder, DispatchError, Instance};
use tracing_subscriber::EnvFilter;

/// Who is standing at the turnstile.
struct Visitor {
    name: &'static str,
    cents: u32,
}

const FARE: u32 = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Turnstile ===\n");

    let mut builder = BlueprintBuilder::<Visitor, String>::new("turnstile");
    let locked = builder.declare_state("locked", true)?;
    let unlocked = builder.declare_state("unlocked", false)?;
    let coin = builder.declare_input("coin")?;
    let push = builder.declare_input("push")?;

    let collect = builder.declare_output("collect_fare", |v: &Visitor| {
        if v.cents < FARE {
            return Err(format!("{} has {} cents, fare is {FARE}", v.name, v.cents).into());
        }
        Ok(format!("collected {FARE} cents from {}", v.name))
    })?;
    let unlock = builder.declare_output("unlock", |v: &Visitor| Ok(format!("unlocked for {}", v.name)))?;
    let lock = builder.declare_output("lock", |v: &Visitor| Ok(format!("locked behind {}", v.name)))?;
    let refund = builder.declare_output("refund", |v: &Visitor| Ok(format!("returned coin to {}", v.name)))?;

    builder.add_transitions([
        (locked, coin, unlocked, vec![collect, unlock]),
        (unlocked, push, locked, vec![lock]),
        (unlocked, coin, unlocked, vec![refund]),
    ])?;
    let blueprint = builder.freeze()?;

    let alice = Visitor { name: "alice", cents: 100 };
    let bob = Visitor { name: "bob", cents: 10 };

    let mut north = Instance::new(blueprint.clone());
    let mut south = Instance::new(blueprint.clone());

    println!("North gate:");
    for (input, visitor) in [(coin, &alice), (coin, &alice), (push, &alice)] {
        report(&mut north, input, visitor);
    }

    println!("\nSouth gate:");
    for (input, visitor) in [(push, &bob), (coin, &bob)] {
        report(&mut south, input, visitor);
    }

    south.dispatch(coin, &alice)?;
    let saved = Checkpoint::capture(&south).to_json()?;
    println!("\nSaved south gate: {saved}");
    let restored = Checkpoint::from_json(&saved)?.restore(blueprint.clone())?;
    println!("Restored south gate in state '{}'", restored.current_state_name());

    println!("\nGraphviz:\n");
    print!("{}", blueprint.to_dot());

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn report(gate: &mut Instance<Visitor, String>, input: switchyard::InputId, visitor: &Visitor) {
    let from = gate.current_state_name().to_string();
    match gate.dispatch(input, visitor) {
        Ok(results) => println!("  {from} -> {}: {}", gate.current_state_name(), results.join("; ")),
        Err(DispatchError::NoTransition { state, input }) => {
            println!("  {state} ignores {input}")
        }
        Err(e) => println!("  {from} stays put: {e}"),
    }
}
