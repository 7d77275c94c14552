//! Full-sequence demonstration.
//!
//! Builds a handful of full Farey sequences, prints the small ones, and
//! reports term counts and wall-clock timing for the larger ones.
//!
//! Usage:
//! ```bash
//! cargo run --example print_sequence
//! ```

use farey_sequence::{FareySequence, SequenceValidator};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Farey sequence demonstration");
    println!("{}", "=".repeat(70));

    // Small orders in full
    for limit in [1_i64, 5, 8] {
        let seq = FareySequence::full(limit)?;
        println!("\nF({limit}) — {} terms:", seq.len());
        println!("  {seq}");
    }

    // Larger orders: counts and timing only
    println!("\n{}", "=".repeat(70));
    println!("Term counts (|F(n)| ~ 3n²/π²):\n");

    let validator = SequenceValidator::new();
    for limit in [100_i64, 500, 1000] {
        let start = Instant::now();
        let seq = FareySequence::full(limit)?;
        let elapsed = start.elapsed();

        let result = validator.validate(&seq);
        println!(
            "  F({limit:>5}): {:>8} terms in {elapsed:>10.2?}  (invariants: {})",
            seq.len(),
            if result.is_valid() { "ok" } else { "VIOLATED" }
        );
    }

    Ok(())
}
