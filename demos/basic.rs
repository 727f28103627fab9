//! Basic card classification example.
//!
//! Run with: `cargo run --example basic`

use cardcheck::{is_valid, registry, validate, Brand};

/// The classic demonstration list: valid numbers mixed with a bad checksum,
/// a wrong length, and strings no pattern recognizes.
const SAMPLE_NUMBERS: [&str; 10] = [
    "4532015112830366",
    "5425233010103442",
    "374245455400126",
    "36148906313152",
    "6011111111111117",
    "3530111333300000",
    "8699999999999999",
    "5078601200000000",
    "5067123456789012",
    "1234567890123456",
];

fn main() {
    println!("=== Card Number Classification ===\n");

    // Example 1: the demonstration list, one line per number
    for number in SAMPLE_NUMBERS {
        println!("{}", validate(number));
    }
    println!();

    // Example 2: inspecting a single result
    let input = "4532-0151-1283-0366";
    let result = validate(input);
    println!("Inspecting {:?}:", input);
    println!("  Number: {}", result.number());
    println!("  Brand:  {}", result.brand());
    println!("  Valid:  {}", result.is_valid());
    println!();

    // Example 3: every outcome is a result, never an error
    println!("Degenerate inputs:");
    for input in ["", "   ", "garbage", "5425233010103442", "40000000000002"] {
        let result = validate(input);
        println!(
            "  {:>20} -> brand {}, valid {}",
            format!("{:?}", input),
            result.brand(),
            result.is_valid()
        );
    }
    println!();

    // Example 4: quick boolean check
    println!("Quick checks:");
    for number in ["4111111111111111", "4111111111111112"] {
        println!(
            "  {} : {}",
            number,
            if is_valid(number) { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 5: the brand registry in match-priority order
    println!("Registered brands:");
    for def in registry::all() {
        let lengths: Vec<String> = def
            .accepted_lengths()
            .iter()
            .map(|l| l.to_string())
            .collect();
        println!(
            "  {:18} lengths {:8} {}",
            def.name(),
            lengths.join(", "),
            def.pattern()
        );
    }
    println!();
    println!(
        "Unknown is a brand too: {}",
        Brand::Unknown.name()
    );
}
