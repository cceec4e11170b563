//! # List Command
//!
//! Prints the fixture services without contacting Ranger.

use anyhow::Result;
use ranger_fixtures::fixtures::fixture_services;

/// Print the fixture service table
pub fn list_command() -> Result<()> {
    let fixtures = fixture_services();

    println!("{:<12} {:<8} CONFIG KEYS", "NAME", "TYPE");
    println!("{}", "-".repeat(72));

    for descriptor in &fixtures {
        let keys: Vec<&str> = descriptor.configs.keys().map(String::as_str).collect();
        println!(
            "{:<12} {:<8} {}",
            descriptor.name,
            descriptor.service_type,
            keys.join(", ")
        );
    }

    println!("\n{} fixture services", fixtures.len());
    Ok(())
}
