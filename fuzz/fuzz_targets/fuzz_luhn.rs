//! Fuzz target for the Luhn algorithm.
//!
//! Tests that the luhn functions never panic and maintain invariants.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp the raw bytes into a digit string
    let number: String = data.iter().map(|&b| char::from(b'0' + (b % 10))).collect();

    // Validation agrees with the raw checksum wherever digits exist
    let _ = luhn::validate(&number);
    if !number.is_empty() {
        assert_eq!(
            luhn::validate(&number),
            luhn::checksum(&number) % 10 == 0,
            "validate/checksum mismatch for {}",
            number
        );
    }

    // Check digit generation: in range, and appending it validates
    if number.len() <= 18 {
        let check = luhn::check_digit(&number);
        assert!(check <= 9, "Check digit should be 0-9");

        let with_check = format!("{}{}", number, check);
        assert!(
            luhn::validate(&with_check),
            "Adding check digit should make valid"
        );
    }

    // Interleaved separators never change the sum
    let with_junk: String = number.chars().flat_map(|c| [c, '-']).collect();
    assert_eq!(luhn::checksum(&number), luhn::checksum(&with_junk));
});
