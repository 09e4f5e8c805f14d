// ============================================================================
// Scale Table
// Base-1000 magnitudes shared by shorthand suffixes and words chunks
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A base-1000 magnitude with its shorthand suffix and English scale word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// 10^3, "K"
    Thousand,
    /// 10^6, "M"
    Million,
    /// 10^9, "B"
    Billion,
    /// 10^12, "T"
    Trillion,
}

impl Scale {
    /// Ordered by chunk index: `ASCENDING[i]` names the chunk at index `i + 1`.
    pub const ASCENDING: [Scale; 4] = [
        Scale::Thousand,
        Scale::Million,
        Scale::Billion,
        Scale::Trillion,
    ];

    /// Order in which the shorthand formatter tries scales.
    pub const DESCENDING: [Scale; 4] = [
        Scale::Trillion,
        Scale::Billion,
        Scale::Million,
        Scale::Thousand,
    ];

    /// Uppercase shorthand suffix letter.
    #[inline]
    pub const fn suffix(self) -> char {
        match self {
            Scale::Thousand => 'K',
            Scale::Million => 'M',
            Scale::Billion => 'B',
            Scale::Trillion => 'T',
        }
    }

    /// Power of ten as an exponent.
    #[inline]
    pub const fn exponent(self) -> u32 {
        match self {
            Scale::Thousand => 3,
            Scale::Million => 6,
            Scale::Billion => 9,
            Scale::Trillion => 12,
        }
    }

    /// Multiplier as an integer.
    #[inline]
    pub const fn multiplier(self) -> u64 {
        10u64.pow(self.exponent())
    }

    /// Multiplier as a float.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.multiplier() as f64
    }

    /// English scale word appended to a words chunk.
    #[inline]
    pub const fn word(self) -> &'static str {
        match self {
            Scale::Thousand => "thousand",
            Scale::Million => "million",
            Scale::Billion => "billion",
            Scale::Trillion => "trillion",
        }
    }

    /// Look up a suffix letter, case-insensitively.
    pub fn from_suffix(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        Self::ASCENDING.into_iter().find(|s| s.suffix() == upper)
    }

    /// True if `c` is one of `KMBTkmbt`.
    #[inline]
    pub fn is_suffix(c: char) -> bool {
        Self::from_suffix(c).is_some()
    }

    /// Scale for a words chunk index (1 = thousand). Index 0 has no word.
    #[inline]
    pub fn for_chunk(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ASCENDING.get(i).copied())
    }
}
