//! Batch classification example.
//!
//! Run with: `cargo run --example batch`

use cardcheck::batch;

fn main() {
    println!("=== Batch Card Classification ===\n");

    // Sample numbers (mix of valid and invalid)
    let numbers = vec![
        "4111111111111111", // Valid Visa
        "5500000000000004", // Valid MasterCard
        "378282246310005",  // Valid Amex
        "6011111111111117", // Valid Discover
        "4111111111111112", // Bad checksum
        "invalid",          // No digits
        "30569309025904",   // Valid Diners Club
        "3530111333300000", // Valid JCB
    ];

    // All results, in input order
    let results = batch::validate_all(&numbers);
    println!("All results:");
    for result in &results {
        println!("  {}", result);
    }
    println!();

    // Only the valid ones
    let valid = batch::valid_only(&numbers);
    println!("Valid numbers:");
    for result in &valid {
        println!("  {} - {}", result.number(), result.brand());
    }
    println!();

    // Allocation-free counting
    let (valid_count, invalid_count) = batch::count_valid(&numbers);
    println!("Counts: {} valid, {} invalid", valid_count, invalid_count);
    println!();

    // Standard iterator combinators work on the results
    let brands: Vec<_> = valid.iter().map(|r| r.brand().name()).collect();
    println!("Brands found: {:?}", brands);
    println!();

    // Throughput demonstration with a larger dataset
    println!("Throughput test:");
    let large_dataset: Vec<&str> = numbers.iter().copied().cycle().take(10000).collect();

    let start = std::time::Instant::now();
    let (count, _) = batch::count_valid(&large_dataset);
    let elapsed = start.elapsed();

    println!("  Classified {} numbers in {:?}", large_dataset.len(), elapsed);
    println!("  Valid: {}", count);
    println!(
        "  Rate: {:.2} numbers/sec",
        large_dataset.len() as f64 / elapsed.as_secs_f64()
    );

    #[cfg(feature = "parallel")]
    {
        let start = std::time::Instant::now();
        let (count, _) = batch::count_valid_parallel(&large_dataset);
        let elapsed = start.elapsed();
        println!(
            "  Parallel: {} valid in {:?} ({:.2} numbers/sec)",
            count,
            elapsed,
            large_dataset.len() as f64 / elapsed.as_secs_f64()
        );
    }
}
