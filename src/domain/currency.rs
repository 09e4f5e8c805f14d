// ============================================================================
// Currency Symbols
// Ordered symbol table and first-match extraction
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recognized single-glyph currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    #[cfg_attr(feature = "serde", serde(rename = "$"))]
    Dollar,
    #[cfg_attr(feature = "serde", serde(rename = "€"))]
    Euro,
    #[cfg_attr(feature = "serde", serde(rename = "£"))]
    Pound,
    #[cfg_attr(feature = "serde", serde(rename = "¥"))]
    Yen,
    #[cfg_attr(feature = "serde", serde(rename = "₹"))]
    Rupee,
    #[cfg_attr(feature = "serde", serde(rename = "₽"))]
    Ruble,
    #[cfg_attr(feature = "serde", serde(rename = "₩"))]
    Won,
    #[cfg_attr(feature = "serde", serde(rename = "¢"))]
    Cent,
}

impl Currency {
    /// Scan order. When several symbols appear in the input, the earliest
    /// entry here wins regardless of where the symbols sit in the text.
    pub const ALL: [Currency; 8] = [
        Currency::Dollar,
        Currency::Euro,
        Currency::Pound,
        Currency::Yen,
        Currency::Rupee,
        Currency::Ruble,
        Currency::Won,
        Currency::Cent,
    ];

    /// The glyph as it appears in input and in the shorthand prefix.
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Pound => "£",
            Currency::Yen => "¥",
            Currency::Rupee => "₹",
            Currency::Ruble => "₽",
            Currency::Won => "₩",
            Currency::Cent => "¢",
        }
    }

    /// Spoken name appended to the words form.
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Dollar => "dollars",
            Currency::Euro => "euros",
            Currency::Pound => "pounds",
            Currency::Yen => "yen",
            Currency::Rupee => "rupees",
            Currency::Ruble => "rubles",
            Currency::Won => "won",
            Currency::Cent => "cents",
        }
    }

    /// Look up a currency by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Find the first symbol in table order that occurs anywhere in `input`.
    pub fn extract(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| input.contains(c.symbol()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Free-function form of [`Currency::extract`].
///
/// # Examples
/// ```
/// use shorthand_converter::{extract_currency, Currency};
///
/// assert_eq!(extract_currency("$1.5K"), Some(Currency::Dollar));
/// assert_eq!(extract_currency("no symbol"), None);
/// ```
pub fn extract_currency(input: &str) -> Option<Currency> {
    Currency::extract(input)
}
