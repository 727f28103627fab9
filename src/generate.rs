//! Card number generation for testing purposes.
//!
//! This module generates numbers that match a brand's recognition pattern,
//! carry an accepted length, and pass Luhn validation. Deterministic
//! generation (zero fill) is always available; random fill requires the
//! `generate` feature.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::generate_deterministic;
//! use cardcheck::{is_valid, Brand};
//!
//! let number = generate_deterministic(Brand::Visa);
//! assert!(number.starts_with('4'));
//! assert!(is_valid(&number));
//! ```
//!
//! Generated numbers are mathematically well-formed but are not connected to
//! real accounts; they exist for tests and demos.

use crate::brand::Brand;
use crate::luhn;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns a prefix inside the brand's recognition range.
///
/// [`Brand::Unknown`] maps to `"9999"`, which sits outside every registered
/// range; numbers built from it pass Luhn but classify as `Unknown`, which
/// makes them handy negative fixtures.
pub const fn sample_prefix(brand: Brand) -> &'static str {
    match brand {
        Brand::Visa => "4",
        Brand::MasterCard => "51",
        Brand::Amex => "34",
        Brand::DinersClub => "36",
        Brand::Discover => "6011",
        Brand::EnRoute => "2014",
        Brand::Jcb => "3528",
        Brand::Voyager => "8699",
        Brand::HiperCard => "606282",
        Brand::Aura => "50",
        Brand::Unknown => "9999",
    }
}

/// Returns a length from the brand's accepted set (16 for `Unknown`).
pub const fn default_length(brand: Brand) -> usize {
    match brand {
        Brand::Visa => 16,
        Brand::MasterCard => 16,
        Brand::Amex => 15,
        Brand::DinersClub => 14,
        Brand::Discover => 16,
        Brand::EnRoute => 15,
        Brand::Jcb => 16,
        Brand::Voyager => 15,
        Brand::HiperCard => 16,
        Brand::Aura => 16,
        Brand::Unknown => 16,
    }
}

/// Generates a well-formed number for the brand deterministically.
///
/// The brand's sample prefix is padded with zeros and finished with the Luhn
/// check digit; the same brand always yields the same number. Needs no
/// feature flag.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_deterministic;
/// use cardcheck::{validate, Brand};
///
/// let number = generate_deterministic(Brand::Voyager);
/// let result = validate(&number);
/// assert_eq!(result.brand(), Brand::Voyager);
/// assert!(result.is_valid());
/// ```
pub fn generate_deterministic(brand: Brand) -> String {
    generate_deterministic_with_prefix(sample_prefix(brand), default_length(brand))
}

/// Generates a Luhn-valid number deterministically from a custom prefix.
///
/// Fills the middle digits with zeros and appends the check digit. The
/// result passes Luhn by construction; whether it classifies depends on the
/// prefix and length.
///
/// # Panics
///
/// Panics if the prefix does not leave room for at least the check digit.
pub fn generate_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut number = String::with_capacity(length);
    number.push_str(prefix);
    while number.len() < length - 1 {
        number.push('0');
    }

    let check = luhn::check_digit(&number);
    number.push((b'0' + check) as char);
    number
}

/// Generates a well-formed number for the brand with random middle digits.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate;
/// use cardcheck::{is_valid, Brand};
///
/// let number = generate(Brand::MasterCard);
/// assert!(number.starts_with("51"));
/// assert!(is_valid(&number));
/// ```
#[cfg(feature = "generate")]
pub fn generate(brand: Brand) -> String {
    generate_with_prefix(sample_prefix(brand), default_length(brand))
}

/// Generates a Luhn-valid number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Panics
///
/// Panics if the prefix does not leave room for at least the check digit.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_with_prefix;
///
/// let number = generate_with_prefix("453201", 16);
/// assert!(number.starts_with("453201"));
/// assert_eq!(number.len(), 16);
/// assert!(cardcheck::is_valid(&number));
/// ```
#[cfg(feature = "generate")]
pub fn generate_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_with_rng(prefix, length, &mut rng)
}

/// Generates a Luhn-valid number using a provided RNG.
///
/// Useful for reproducible generation with seeded RNGs.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut number = String::with_capacity(length);
    number.push_str(prefix);
    while number.len() < length - 1 {
        number.push((b'0' + rng.gen_range(0..10)) as char);
    }

    let check = luhn::check_digit(&number);
    number.push((b'0' + check) as char);
    number
}

/// Generates multiple numbers for the given brand.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_many(brand: Brand, count: usize) -> Vec<String> {
    (0..count).map(|_| generate(brand)).collect()
}
