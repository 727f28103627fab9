//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate card numbers and other identification numbers.
//!
//! All functions here operate on strings and ignore non-digit bytes, so they
//! accept either normalized digit strings or raw user input with separators.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// This avoids the branch and division in the inner loop.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a card number using the Luhn algorithm.
///
/// # Arguments
///
/// * `number` - The card number; non-digit characters are ignored.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` if it is not or if the input
/// contains no digits at all.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// An all-zero number sums to zero and therefore passes; callers wanting to
/// reject such numbers must do so with their own prefix rules.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::validate;
///
/// assert!(validate("4532015112830366"));
/// assert!(validate("4532-0151-1283-0366"));
///
/// // Changed last digit
/// assert!(!validate("4532015112830367"));
/// ```
#[inline]
pub fn validate(number: &str) -> bool {
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }

    checksum(number) % 10 == 0
}

/// Computes the Luhn sum for a card number.
///
/// This is the core traversal used by both validation and check digit
/// generation: right to left, doubling every second digit, with non-digit
/// bytes skipped.
///
/// # Arguments
///
/// * `number` - The card number; non-digit characters are ignored.
///
/// # Returns
///
/// The Luhn sum (not modulo 10).
#[inline]
pub fn checksum(number: &str) -> u32 {
    let mut sum: u32 = 0;
    // The rightmost digit is not doubled; the flag toggles once per digit.
    let mut double = false;

    for &b in number.as_bytes().iter().rev() {
        if !b.is_ascii_digit() {
            continue;
        }
        let digit = (b - b'0') as usize;
        if double {
            sum += DOUBLE_TABLE[digit] as u32;
        } else {
            sum += digit as u32;
        }
        double = !double;
    }

    sum
}

/// Generates the check digit for a partial card number.
///
/// Given a number without its final digit, computes the digit that makes the
/// full number pass Luhn validation.
///
/// # Arguments
///
/// * `partial` - The card number without the check digit; non-digit
///   characters are ignored.
///
/// # Returns
///
/// The check digit (0-9) to append.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::{check_digit, validate};
///
/// let partial = "453201511283036";
/// assert_eq!(check_digit(partial), 6);
/// assert!(validate("4532015112830366"));
/// ```
#[inline]
pub fn check_digit(partial: &str) -> u8 {
    let mut sum: u32 = 0;
    // The appended check digit will occupy the rightmost (undoubled) slot,
    // shifting every existing digit one position left: the flag starts true.
    let mut double = true;

    for &b in partial.as_bytes().iter().rev() {
        if !b.is_ascii_digit() {
            continue;
        }
        let digit = (b - b'0') as usize;
        if double {
            sum += DOUBLE_TABLE[digit] as u32;
        } else {
            sum += digit as u32;
        }
        double = !double;
    }

    ((10 - (sum % 10)) % 10) as u8
}
