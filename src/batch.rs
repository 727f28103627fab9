//! Batch processing for high-throughput card classification.
//!
//! This module validates many card numbers at once, with optional parallel
//! processing using rayon. Since [`validate`](crate::validate()) is total,
//! batch results are plain vectors of [`ValidationResult`] with no error
//! channel to merge.

use crate::validate::{validate, ValidationResult};

/// Validates a batch of card numbers.
///
/// Returns a vector of results in the same order as the input.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_all;
///
/// let numbers = ["4532015112830366", "5500000000000004", "1234567890123456"];
/// let results = validate_all(&numbers);
/// assert!(results[0].is_valid());
/// assert!(results[1].is_valid());
/// assert!(!results[2].is_valid());
/// ```
#[inline]
pub fn validate_all<S: AsRef<str>>(numbers: &[S]) -> Vec<ValidationResult> {
    numbers.iter().map(|n| validate(n.as_ref())).collect()
}

/// Validates a batch and keeps only the valid results.
///
/// Invalid numbers are silently filtered out; input order is preserved for
/// the survivors.
///
/// # Example
///
/// ```
/// use cardcheck::batch::valid_only;
///
/// let numbers = ["4532015112830366", "1234567890123456", "5500000000000004"];
/// let valid = valid_only(&numbers);
/// assert_eq!(valid.len(), 2);
/// ```
#[inline]
pub fn valid_only<S: AsRef<str>>(numbers: &[S]) -> Vec<ValidationResult> {
    numbers
        .iter()
        .map(|n| validate(n.as_ref()))
        .filter(ValidationResult::is_valid)
        .collect()
}

/// Counts valid and invalid numbers in a batch.
///
/// Faster than validating all and then counting, as it doesn't allocate
/// for results.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count).
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let numbers = ["4532015112830366", "1234567890123456", "5500000000000004"];
/// let (valid, invalid) = count_valid(&numbers);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(numbers: &[S]) -> (usize, usize) {
    let mut valid = 0;
    let mut invalid = 0;

    for number in numbers {
        if validate(number.as_ref()).is_valid() {
            valid += 1;
        } else {
            invalid += 1;
        }
    }

    (valid, invalid)
}

/// Validates a batch in parallel using rayon.
///
/// Typically faster than [`validate_all`] for large batches (>1000 numbers)
/// on multi-core systems; results are identical and in input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_all_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<ValidationResult> {
    use rayon::prelude::*;
    numbers.par_iter().map(|n| validate(n.as_ref())).collect()
}

/// Counts valid and invalid numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid: usize = numbers
        .par_iter()
        .filter(|n| validate(n.as_ref()).is_valid())
        .count();

    (valid, numbers.len() - valid)
}
