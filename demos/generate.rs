//! Test number generation example.
//!
//! Run with: `cargo run --example generate --features generate`

use cardcheck::{generate, is_valid, validate, Brand};

fn main() {
    println!("=== Test Number Generation ===\n");

    // -------------------------------------------------------------------------
    // Generate a number for each registered brand
    // -------------------------------------------------------------------------
    println!("--- Random Generation by Brand ---\n");

    for brand in Brand::REGISTERED {
        let number = generate::generate(brand);
        let result = validate(&number);
        println!(
            "  {:18}: {:20} (classified {}, valid: {})",
            brand.name(),
            number,
            result.brand(),
            if result.is_valid() { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Deterministic generation (for reproducible tests)
    // -------------------------------------------------------------------------
    println!("--- Deterministic Generation ---\n");

    println!("  Generating the same number multiple times:");
    for i in 0..3 {
        let number = generate::generate_deterministic(Brand::Visa);
        println!("    Run {}: {}", i + 1, number);
    }
    println!("  (All identical - deterministic)\n");

    // -------------------------------------------------------------------------
    // The Unknown prefix makes a Luhn-valid negative fixture
    // -------------------------------------------------------------------------
    println!("--- Negative Fixture ---\n");

    let fixture = generate::generate_deterministic(Brand::Unknown);
    let result = validate(&fixture);
    println!("  Generated: {}", fixture);
    println!("  Passes Luhn: {}", cardcheck::passes_luhn(&fixture));
    println!("  Classifies:  {} (valid: {})", result.brand(), result.is_valid());
    println!();

    // -------------------------------------------------------------------------
    // Generate with a custom prefix
    // -------------------------------------------------------------------------
    println!("--- Custom Prefix Generation ---\n");

    let prefixes = [
        ("453201", 16, "Visa with a specific BIN"),
        ("510000", 16, "MasterCard with a specific BIN"),
        ("37", 15, "Amex"),
        ("606282", 16, "HiperCard"),
    ];

    for (prefix, length, description) in prefixes {
        let number = generate::generate_with_prefix(prefix, length);
        println!("  {} (prefix {}, length {})", description, prefix, length);
        println!("    Generated: {}", number);
        println!("    Valid: {}", if is_valid(&number) { "yes" } else { "no" });
        println!();
    }

    // -------------------------------------------------------------------------
    // Verify generated numbers classify and validate
    // -------------------------------------------------------------------------
    println!("--- Validation Check ---\n");

    let test_count = 1000;
    let mut all_valid = true;

    for brand in Brand::REGISTERED {
        let valid_count = generate::generate_many(brand, test_count)
            .iter()
            .filter(|n| is_valid(n))
            .count();
        let success = valid_count == test_count;
        if !success {
            all_valid = false;
        }
        println!(
            "  {:18}: {}/{} valid ({})",
            brand.name(),
            valid_count,
            test_count,
            if success { "PASS" } else { "FAIL" }
        );
    }
    println!();

    if all_valid {
        println!("  All generated numbers validate!");
    } else {
        println!("  WARNING: some generated numbers failed validation!");
    }
}
