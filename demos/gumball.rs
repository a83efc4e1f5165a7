//! Gumball Machine
//!
//! Drives a five-unit device through repeated purchases with a seeded
//! bonus draw, printing the remaining count after each one.
//!
//! Run with: cargo run --example gumball

use dispenser::{Device, DeviceConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = DeviceConfig {
        seed: Some(2024),
        ..DeviceConfig::new(5)
    };
    let mut machine = Device::from_config(&config)?;

    info!(device_id = %machine.id(), total = machine.resource_count(), "machine loaded");

    while !machine.is_depleted() {
        machine.deposit();
        machine.trigger();
        println!("Remaining units: {}", machine.resource_count());
    }

    // Everything is refused once the machine is sold out.
    machine.deposit();
    machine.trigger();

    println!(
        "Path: {}",
        machine
            .history()
            .get_path()
            .iter()
            .map(|state| state.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    Ok(())
}
