// ============================================================================
// Conversion Result
// ============================================================================

use super::currency::Currency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shorthand form used whenever no value was decoded.
pub const SENTINEL_SHORTHAND: &str = "0";

/// Words form for empty input.
pub const EMPTY_WORDS: &str = "zero";

/// Words form for input that could not be decoded.
pub const INVALID_WORDS: &str = "invalid input";

/// Words form for a decoded value beyond the largest scale word.
pub const OVERFLOW_WORDS: &str = "number too large";

/// Outcome of converting one input string.
///
/// Invalid results always carry `numeric_value == 0.0` and
/// `shorthand_form == "0"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConversionResult {
    /// Input exactly as received
    pub original_input: String,

    /// Decoded magnitude, 0 when invalid
    pub numeric_value: f64,

    /// Compact rendering, currency-prefixed when a symbol was found
    pub shorthand_form: String,

    /// Lowercase English spelling, currency-suffixed when a symbol was found
    pub words_form: String,

    /// Detected currency symbol
    pub currency: Option<Currency>,

    /// True iff a number was decoded from non-empty input
    pub is_valid: bool,
}

impl ConversionResult {
    /// Result for empty or whitespace-only input.
    pub fn empty(input: &str) -> Self {
        Self {
            original_input: input.to_string(),
            numeric_value: 0.0,
            shorthand_form: SENTINEL_SHORTHAND.to_string(),
            words_form: EMPTY_WORDS.to_string(),
            currency: None,
            is_valid: false,
        }
    }

    /// Result for input that did not decode to a finite number.
    pub fn invalid(input: &str, currency: Option<Currency>) -> Self {
        Self {
            original_input: input.to_string(),
            numeric_value: 0.0,
            shorthand_form: SENTINEL_SHORTHAND.to_string(),
            words_form: INVALID_WORDS.to_string(),
            currency,
            is_valid: false,
        }
    }

    /// Result for a decoded value with its rendered forms.
    pub fn valid(
        input: &str,
        numeric_value: f64,
        shorthand_form: String,
        words_form: String,
        currency: Option<Currency>,
    ) -> Self {
        Self {
            original_input: input.to_string(),
            numeric_value,
            shorthand_form,
            words_form,
            currency,
            is_valid: true,
        }
    }

    /// Currency glyph, if any.
    pub fn currency_symbol(&self) -> Option<&'static str> {
        self.currency.map(Currency::symbol)
    }
}
