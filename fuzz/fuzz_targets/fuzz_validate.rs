//! Fuzz target for card classification.
//!
//! Tests that validate() never panics on arbitrary input and that its result
//! invariants hold.

#![no_main]

use cardcheck::{is_valid, normalize, passes_luhn, validate, Brand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let result = validate(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    // The raw input survives in the result unchanged
    assert_eq!(result.number(), data);

    // A valid verdict always names a registered brand
    if result.is_valid() {
        assert!(result.brand() != Brand::Unknown);
    }

    // Classification depends only on the embedded digits
    let digits = normalize(data);
    let clean = validate(&digits);
    assert_eq!(result.brand(), clean.brand());
    assert_eq!(result.is_valid(), clean.is_valid());
});
