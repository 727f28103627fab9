//! WebAssembly bindings for card number classification.
//!
//! JavaScript-friendly bindings for checkout and form-validation front-ends.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { validate_card, is_valid, detect_brand } from 'cardcheck';
//!
//! await init();
//!
//! const result = validate_card("4532-0151-1283-0366");
//! console.log(result.valid);   // true
//! console.log(result.brand);   // "Visa"
//! console.log(result.number);  // "4532-0151-1283-0366"
//!
//! // Quick validation check
//! if (is_valid("4532015112830366")) {
//!     console.log("Card is valid!");
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

/// Classification outcome returned to JavaScript.
///
/// Always fully populated: an unrecognized number carries the brand name
/// `"Unknown"` rather than an error.
#[wasm_bindgen]
pub struct CardCheckResult {
    valid: bool,
    brand: String,
    number: String,
}

#[wasm_bindgen]
impl CardCheckResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.brand.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn number(&self) -> String {
        self.number.clone()
    }
}

impl From<crate::ValidationResult> for CardCheckResult {
    fn from(result: crate::ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            brand: result.brand().name().to_string(),
            number: result.number().to_string(),
        }
    }
}

/// Classifies a card number and returns brand plus verdict.
///
/// Accepts numbers with spaces, dashes, or no separators.
///
/// # Example
/// ```javascript
/// const result = validate_card("4532-0151-1283-0366");
/// console.log(result.valid);  // true
/// console.log(result.brand);  // "Visa"
/// ```
#[wasm_bindgen]
pub fn validate_card(card_number: &str) -> CardCheckResult {
    crate::validate(card_number).into()
}

/// Quick check if a card number is valid.
///
/// # Example
/// ```javascript
/// if (is_valid("4532015112830366")) {
///     console.log("Valid!");
/// }
/// ```
#[wasm_bindgen]
pub fn is_valid(card_number: &str) -> bool {
    crate::is_valid(card_number)
}

/// Checks if a card number passes the Luhn algorithm.
#[wasm_bindgen]
pub fn passes_luhn(card_number: &str) -> bool {
    crate::passes_luhn(card_number)
}

/// Returns the brand name when the digits match a registered pattern.
///
/// The full number is required; prefixes alone do not match the anchored
/// patterns.
///
/// # Example
/// ```javascript
/// const brand = detect_brand("4532015112830366");  // "Visa"
/// ```
#[wasm_bindgen]
pub fn detect_brand(card_number: &str) -> Option<String> {
    let normalized = crate::normalize(card_number);
    crate::registry::match_brand(&normalized).map(|def| def.name().to_string())
}

/// Batch classifies multiple card numbers.
///
/// Returns an array of results, one per string entry.
///
/// # Example
/// ```javascript
/// const results = validate_batch(["4532015112830366", "5425233010103442"]);
/// results.forEach(r => console.log(`${r.brand}: ${r.valid}`));
/// ```
#[wasm_bindgen]
pub fn validate_batch(card_numbers: js_sys::Array) -> js_sys::Array {
    let results = js_sys::Array::new();

    for number in card_numbers.iter() {
        if let Some(number_str) = number.as_string() {
            results.push(&JsValue::from(validate_card(&number_str)));
        }
    }

    results
}
