//! Ordered brand recognition registry.
//!
//! Each entry pairs a [`Brand`] with a recognition pattern over the
//! normalized (all-digit) form of a card number. Matching walks the table in
//! declaration order and stops at the first hit, so the order is part of the
//! classification contract, not an implementation detail.
//!
//! Patterns are compiled once, on first use, into a process-wide immutable
//! table. There is no mutation API; concurrent lookups need no locking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::brand::Brand;

/// Recognition patterns in match-priority order.
///
/// Every pattern is anchored at both ends except HiperCard's, which is a
/// bare prefix match. The asymmetry is deliberate: HiperCard behaves as a
/// prefix-range brand, so longer digit strings starting with one of its
/// prefixes still classify as HiperCard (and then fail the length check).
const PATTERNS: [(Brand, &str); 10] = [
    (Brand::Visa, r"^4[0-9]{11,15}$"),
    (Brand::MasterCard, r"^5[1-5][0-9]{14}$|^2[2-7][0-9]{14}$"),
    (Brand::Amex, r"^3[47][0-9]{13}$"),
    (Brand::DinersClub, r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$"),
    (Brand::Discover, r"^6(?:011|5[0-9]{2})[0-9]{12}$"),
    (Brand::EnRoute, r"^2014[0-9]{11}$"),
    (Brand::Jcb, r"^(?:2131|1800|35\d{3})\d{11}$"),
    (Brand::Voyager, r"^8699[0-9]{11}$"),
    (
        Brand::HiperCard,
        r"^(384100|384140|384160|606282|637095|637612|637613|637649|637650|639047|639348|639599|639947|640337|640355|640356|640357|640358|640359|640360|640361|640362|640363|640364|640365|640366|640367|640368|640369)",
    ),
    (Brand::Aura, r"^50[0-9]{14}$"),
];

static REGISTRY: Lazy<Vec<BrandDefinition>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .map(|&(brand, pattern)| BrandDefinition {
            brand,
            pattern,
            regex: Regex::new(pattern)
                .unwrap_or_else(|err| panic!("bad pattern for {brand}: {pattern}: {err}")),
        })
        .collect()
});

/// A registry entry: a brand together with its compiled recognition pattern.
#[derive(Debug)]
pub struct BrandDefinition {
    brand: Brand,
    pattern: &'static str,
    regex: Regex,
}

impl BrandDefinition {
    /// Returns the brand this entry recognizes.
    #[inline]
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Returns the brand's display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.brand.name()
    }

    /// Returns the digit counts accepted for this brand.
    #[inline]
    pub fn accepted_lengths(&self) -> &'static [u8] {
        self.brand.accepted_lengths()
    }

    /// Returns the source pattern string.
    #[inline]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Returns true if this entry's pattern matches the digit string.
    ///
    /// Expects normalized input: separators are not stripped here, and the
    /// anchored patterns will reject anything containing them.
    #[inline]
    pub fn matches(&self, number: &str) -> bool {
        self.regex.is_match(number)
    }
}

/// Returns the full registry in match-priority order.
#[inline]
pub fn all() -> &'static [BrandDefinition] {
    &REGISTRY
}

/// Returns the first registry entry whose pattern matches the digit string.
///
/// Declaration order is the tie-break when several patterns match: a
/// 14-digit `384100...` string satisfies both the Diners Club pattern and
/// the HiperCard prefix, and reports Diners Club.
///
/// # Example
///
/// ```
/// use cardcheck::{registry, Brand};
///
/// let def = registry::match_brand("4532015112830366").unwrap();
/// assert_eq!(def.brand(), Brand::Visa);
///
/// assert!(registry::match_brand("9999999999999999").is_none());
/// ```
#[inline]
pub fn match_brand(number: &str) -> Option<&'static BrandDefinition> {
    REGISTRY.iter().find(|def| def.matches(number))
}
