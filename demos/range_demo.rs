//! Ranged-build demonstration.
//!
//! Builds a sub-range of a Farey sequence through the fluent builder and
//! shows how invalid inputs come back as typed errors instead of killing
//! the process.
//!
//! Usage:
//! ```bash
//! cargo run --example range_demo
//! ```

use farey_sequence::FareySequenceBuilder;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    println!("Ranged build: F(5) from 1/3 to 2/3");
    match FareySequenceBuilder::new(5)
        .lower_bound(1, 3)
        .upper_bound(2, 3)
        .build()
    {
        Ok(seq) => println!("  {seq}"),
        Err(e) => println!("  error: {e}"),
    }

    println!("\nInvalid inputs are recoverable errors:");
    let cases = [
        ("swapped bounds", FareySequenceBuilder::new(5).lower_bound(2, 3).upper_bound(1, 3)),
        ("negative lower bound", FareySequenceBuilder::new(5).lower_bound(-1, 2)),
        ("zero denominator", FareySequenceBuilder::new(5).upper_bound(1, 0)),
        ("denominator over limit", FareySequenceBuilder::new(5).lower_bound(1, 7)),
    ];
    for (label, builder) in cases {
        match builder.build() {
            Ok(_) => println!("  {label}: unexpectedly succeeded"),
            Err(e) => println!("  {label}: {e}"),
        }
    }
}
