//! # cardcheck
//!
//! Payment-card number classification: brand identification from digit
//! patterns plus Luhn checksum validation.
//!
//! Classification is a total function. Any string, including garbage, comes
//! back as an ordinary [`ValidationResult`]; there is no error type to
//! handle. An unrecognized number simply reports [`Brand::Unknown`] and an
//! invalid verdict. The crate performs no I/O and keeps no state beyond a
//! registry of compiled patterns, built once on first use.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate, is_valid, Brand};
//!
//! let result = validate("4532-0151-1283-0366");
//! assert_eq!(result.brand(), Brand::Visa);
//! assert!(result.is_valid());
//! println!("{result}"); // 4532-0151-1283-0366 - Visa - ✓ VALID
//!
//! // Quick boolean check
//! assert!(is_valid("4532015112830366"));
//! assert!(!is_valid("4532015112830367"));
//!
//! // Unrecognized input is a result, not an error
//! let result = validate("not a card");
//! assert_eq!(result.brand(), Brand::Unknown);
//! assert!(!result.is_valid());
//! ```
//!
//! ## The Registry
//!
//! Brands are recognized by an ordered table of compiled patterns; the first
//! match wins, and the order is part of the contract.
//!
//! ```rust
//! use cardcheck::registry;
//!
//! for def in registry::all() {
//!     println!("{} (lengths {:?}): {}", def.name(), def.accepted_lengths(), def.pattern());
//! }
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardcheck::batch;
//!
//! let numbers = vec!["4111111111111111", "5500000000000004", "invalid"];
//!
//! let results = batch::validate_all(&numbers);
//! assert_eq!(results.len(), 3);
//!
//! let (valid, invalid) = batch::count_valid(&numbers);
//! assert_eq!((valid, invalid), (2, 1));
//! ```
//!
//! ## Test Number Generation
//!
//! ```rust
//! use cardcheck::{generate, is_valid, Brand};
//!
//! // Deterministic, no feature flag required
//! let number = generate::generate_deterministic(Brand::Discover);
//! assert!(number.starts_with("6011"));
//! assert!(is_valid(&number));
//! ```
//!
//! ## Recognized Brands
//!
//! In match-priority order:
//!
//! | Brand | Prefixes | Length |
//! |-------|----------|--------|
//! | Visa | 4 | 12, 16 |
//! | MasterCard | 51-55, 22-27 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | Discover | 6011, 65 | 16 |
//! | EnRoute | 2014 | 15 |
//! | JCB | 2131, 1800, 35 | 16 |
//! | Voyager | 8699 | 15 |
//! | HiperCard | 606282 and other 6-digit ranges (prefix match) | 16 |
//! | Aura | 50 | 16 |
//!
//! The HiperCard pattern matches on prefix alone; longer digit strings
//! starting with one of its prefixes classify as HiperCard and then fail the
//! length check. Every other pattern is anchored at both ends.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for results and brands |
//! | `parallel` | Rayon-based batch parallelism |
//! | `generate` | Random test number generation |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly bindings |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod brand;
pub mod generate;
pub mod luhn;
pub mod registry;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use brand::Brand;
pub use registry::BrandDefinition;
pub use validate::{is_valid, normalize, passes_luhn, validate, ValidationResult};
