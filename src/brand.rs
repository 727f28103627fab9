//! Card brand identification.
//!
//! This module provides the `Brand` enum for naming the payment networks the
//! registry recognizes, along with their accepted number lengths.

use std::fmt;

/// Payment-card brands recognized by the registry.
///
/// `Unknown` is the classification for any input that matches no registered
/// pattern; it is a first-class outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brand {
    /// Visa - Prefix 4, lengths 12, 16
    Visa,
    /// MasterCard - Prefix 51-55 or 22-27, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    #[cfg_attr(feature = "serde", serde(rename = "American Express"))]
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    #[cfg_attr(feature = "serde", serde(rename = "Diners Club"))]
    DinersClub,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// EnRoute - Prefix 2014, length 15
    EnRoute,
    /// JCB - Prefix 2131, 1800, 35xxx, length 16
    #[cfg_attr(feature = "serde", serde(rename = "JCB"))]
    Jcb,
    /// Voyager - Prefix 8699, length 15
    Voyager,
    /// HiperCard - Brazilian network, 6-digit prefix ranges, length 16
    HiperCard,
    /// Aura - Brazilian network, Prefix 50, length 16
    Aura,
    /// No registered pattern matched.
    Unknown,
}

impl Brand {
    /// The registered brands in registry (match-priority) order.
    ///
    /// Excludes `Unknown`, which is the absence of a match.
    pub const REGISTERED: [Brand; 10] = [
        Self::Visa,
        Self::MasterCard,
        Self::Amex,
        Self::DinersClub,
        Self::Discover,
        Self::EnRoute,
        Self::Jcb,
        Self::Voyager,
        Self::HiperCard,
        Self::Aura,
    ];

    /// Returns the lengths (in digits) accepted for this brand.
    ///
    /// `Unknown` accepts no length: an unrecognized number can never be valid.
    #[inline]
    pub const fn accepted_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[12, 16],
            Self::MasterCard => &[16],
            Self::Amex => &[15],
            Self::DinersClub => &[14],
            Self::Discover => &[16],
            Self::EnRoute => &[15],
            Self::Jcb => &[16],
            Self::Voyager => &[15],
            Self::HiperCard => &[16],
            Self::Aura => &[16],
            Self::Unknown => &[],
        }
    }

    /// Returns true if the given digit count is accepted for this brand.
    #[inline]
    pub const fn is_accepted_length(&self, length: usize) -> bool {
        let accepted = self.accepted_lengths();
        let mut i = 0;
        while i < accepted.len() {
            if accepted[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the brand's display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::EnRoute => "EnRoute",
            Self::Jcb => "JCB",
            Self::Voyager => "Voyager",
            Self::HiperCard => "HiperCard",
            Self::Aura => "Aura",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for any brand other than `Unknown`.
    #[inline]
    pub const fn is_registered(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
