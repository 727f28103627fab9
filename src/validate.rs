//! Main validation orchestration for card numbers.
//!
//! This module provides the primary `validate` function that combines input
//! normalization, brand matching against the registry, the per-brand length
//! check, and Luhn validation into a single operation.
//!
//! Classification is total: there is no error type, and `validate` never
//! panics. Malformed input, an unrecognized pattern, a wrong length, and a
//! failed checksum all come back as an ordinary [`ValidationResult`] with
//! `is_valid() == false`.

use std::fmt;

use crate::brand::Brand;
use crate::luhn;
use crate::registry;

/// The outcome of classifying one card number.
///
/// Carries the raw input exactly as supplied (not the normalized digits), the
/// matched brand or [`Brand::Unknown`], and the overall verdict. A `true`
/// verdict implies a registered brand: Luhn only runs after a pattern match
/// and a length check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    /// The input exactly as supplied.
    number: String,
    /// The matched brand, or `Unknown`.
    brand: Brand,
    /// Whether brand, length, and checksum all passed.
    is_valid: bool,
}

impl ValidationResult {
    #[inline]
    pub(crate) fn new(number: String, brand: Brand, is_valid: bool) -> Self {
        Self {
            number,
            brand,
            is_valid,
        }
    }

    /// Returns the input string exactly as it was supplied.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the matched brand, or [`Brand::Unknown`].
    #[inline]
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    /// Returns true if the number matched a brand, had an accepted length,
    /// and passed the Luhn check.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl fmt::Display for ValidationResult {
    /// Renders the classification line: `<number> - <brand> - <verdict>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_valid {
            "\u{2713} VALID"
        } else {
            "\u{2717} INVALID"
        };
        write!(f, "{} - {} - {}", self.number, self.brand, verdict)
    }
}

/// Strips every character that is not an ASCII digit.
///
/// Deliberately permissive: separators, letters, and any other garbage are
/// discarded wherever they appear, so `"abc4532015112830366xyz"` normalizes
/// to a well-formed Visa number. Callers needing stricter input handling
/// should reject such strings before validating.
#[inline]
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Classifies a card number.
///
/// Steps, in order, each failure short-circuiting to an invalid result:
///
/// 1. Empty or whitespace-only input classifies as `Unknown`.
/// 2. The input is normalized to its digits (see [`normalize`]).
/// 3. No digits at all classifies as `Unknown`.
/// 4. The digits are matched against the registry; no match classifies as
///    `Unknown`, and the checksum is not consulted.
/// 5. A digit count outside the brand's accepted lengths reports the brand
///    with `is_valid() == false`.
/// 6. Otherwise the verdict is the Luhn check over the digits.
///
/// The returned result always carries the raw input, never the normalized
/// form.
///
/// # Example
///
/// ```
/// use cardcheck::{validate, Brand};
///
/// let result = validate("4532-0151-1283-0366");
/// assert_eq!(result.brand(), Brand::Visa);
/// assert!(result.is_valid());
/// assert_eq!(result.number(), "4532-0151-1283-0366");
///
/// let result = validate("1234567890123456");
/// assert_eq!(result.brand(), Brand::Unknown);
/// assert!(!result.is_valid());
/// ```
pub fn validate(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::new(input.to_string(), Brand::Unknown, false);
    }

    let normalized = normalize(input);
    if normalized.is_empty() {
        return ValidationResult::new(input.to_string(), Brand::Unknown, false);
    }

    let definition = match registry::match_brand(&normalized) {
        Some(def) => def,
        None => return ValidationResult::new(input.to_string(), Brand::Unknown, false),
    };

    let brand = definition.brand();
    if !brand.is_accepted_length(normalized.len()) {
        return ValidationResult::new(input.to_string(), brand, false);
    }

    ValidationResult::new(input.to_string(), brand, luhn::validate(&normalized))
}

/// Quickly checks a card number when only the verdict matters.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4532-0151-1283-0366"));
/// assert!(!is_valid("4532015112830367"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

/// Checks the Luhn checksum only, with no brand or length constraints.
///
/// Non-digit characters are ignored; input without any digit fails.
///
/// # Example
///
/// ```
/// use cardcheck::passes_luhn;
///
/// assert!(passes_luhn("4532015112830366"));
/// assert!(!passes_luhn("4532015112830367"));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    luhn::validate(input)
}
