//! Gearbox State Machine
//!
//! This example drives a car through ignition and gear changes.
//!
//! Key concepts:
//! - Event-keyed transitions registered with `when`
//! - Entry callbacks receiving a payload
//! - A wildcard "tow" event that works from every state
//! - Failed triggers returning `false` instead of erroring
//!
//! Run with: RUST_LOG=switchyard=debug cargo run --example gearbox

use switchyard::{transitions, StateMachine, ANY};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Gearbox State Machine ===\n");

    let mut car: StateMachine<&'static str> = StateMachine::new("off");
    car.when("ignition", transitions! { "off" => "park" });
    car.when(
        "shift_up",
        transitions! {
            "park" => "reverse",
            "reverse" => "neutral",
            "neutral" => "drive",
        },
    );
    car.when(
        "shift_down",
        transitions! {
            "drive" => "neutral",
            "neutral" => "reverse",
            "reverse" => "park",
        },
    );
    car.when("tow", transitions! { ANY => "off" });

    car.on("drive", |_, driver| {
        println!("  {} is driving", driver.copied().unwrap_or("Nobody"));
    });
    car.any(|m, _| println!("  now in {}", m.state()));

    println!("{car}\n");

    let steps: [(&str, Option<&'static str>); 7] = [
        ("ignition", None),
        ("shift_up", None),
        ("shift_up", None),
        ("shift_up", Some("Jack")),
        ("shift_up", None),
        ("shift_down", None),
        ("tow", None),
    ];

    for (event, driver) in steps {
        println!("{event}:");
        let moved = match driver {
            Some(name) => car.trigger_with(event, &name),
            None => car.trigger(event),
        };
        if !moved {
            println!("  no transition from {}", car.state());
        }
    }

    println!("\nPath: {}", car.history().path().join(" -> "));

    println!("\n=== Example Complete ===");
}
