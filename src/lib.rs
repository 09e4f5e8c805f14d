// ============================================================================
// Shorthand Converter Library
// Shorthand numeric notation to numeric, compact and English-words forms
// ============================================================================

//! # Shorthand Converter
//!
//! Converts human shorthand such as `"$1.5K"` or `"€2.5M"` into a full
//! numeric value, a compact shorthand string and an English-words spelling.
//!
//! ## Features
//!
//! - **Shorthand grammar** `<digits>[.<digits>][K|M|B|T]`, case-insensitive
//! - **Plain number fallback** for anything the grammar rejects
//! - **Currency detection** for `$ € £ ¥ ₹ ₽ ₩ ¢`
//! - **Pluggable parser stages** and event handlers
//!
//! ## Example
//!
//! ```rust
//! use shorthand_converter::prelude::*;
//!
//! let result = convert_number("$1.5K");
//! assert!(result.is_valid);
//! assert_eq!(result.numeric_value, 1500.0);
//! assert_eq!(result.shorthand_form, "$1.5K");
//! assert_eq!(result.words_form, "one thousand five hundred dollars");
//! assert_eq!(result.currency, Some(Currency::Dollar));
//! ```

use std::sync::LazyLock;

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use domain::{extract_currency, ConversionResult, Currency};
pub use engine::Converter;
pub use numeric::{hundreds_to_words, number_to_shorthand, number_to_words, parse_shorthand};

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::default);

/// Convert one input string with the default configuration.
///
/// Equivalent to `Converter::default().convert(input)` without rebuilding
/// the parser chain on every call.
pub fn convert_number(input: &str) -> ConversionResult {
    DEFAULT_CONVERTER.convert(input)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert_number;
    pub use crate::domain::{
        extract_currency, ConfigError, ConversionResult, ConverterConfig, Currency,
    };
    pub use crate::engine::{create_from_config, Converter, ConverterBuilder};
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RejectReason,
        ValueParser,
    };
    pub use crate::numeric::{
        number_to_shorthand, number_to_words, parse_shorthand, FractionMode, NumericError, Scale,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;

    #[test]
    fn test_end_to_end_dollar_shorthand() {
        let result = convert_number("$1.5K");
        assert_eq!(result.original_input, "$1.5K");
        assert_eq!(result.numeric_value, 1500.0);
        assert_eq!(result.shorthand_form, "$1.5K");
        assert_eq!(result.words_form, "one thousand five hundred dollars");
        assert_eq!(result.currency, Some(Currency::Dollar));
        assert!(result.is_valid);
    }

    #[test]
    fn test_end_to_end_empty() {
        let result = convert_number("");
        assert_eq!(result.numeric_value, 0.0);
        assert_eq!(result.shorthand_form, "0");
        assert_eq!(result.words_form, "zero");
        assert_eq!(result.currency, None);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_end_to_end_not_a_number() {
        let result = convert_number("not a number");
        assert!(!result.is_valid);
        assert_eq!(result.words_form, "invalid input");
        assert_eq!(result.numeric_value, 0.0);
        assert_eq!(result.shorthand_form, "0");
    }

    #[test]
    fn test_end_to_end_currencies() {
        let cases = [
            ("€2.5M", "€2.5M", "two million five hundred thousand euros"),
            ("£750", "£750", "seven hundred fifty pounds"),
            ("¥3B", "¥3B", "three billion yen"),
            ("₹1,200", "₹1.2K", "one thousand two hundred rupees"),
            ("₽21", "₽21", "twenty-one rubles"),
            ("₩1T", "₩1T", "one trillion won"),
            ("99¢", "¢99", "ninety-nine cents"),
        ];
        for (input, shorthand, words) in cases {
            let result = convert_number(input);
            assert!(result.is_valid, "{}", input);
            assert_eq!(result.shorthand_form, shorthand, "{}", input);
            assert_eq!(result.words_form, words, "{}", input);
        }
    }

    #[test]
    fn test_end_to_end_plain_numbers() {
        let result = convert_number("1,000,000,001");
        assert_eq!(result.numeric_value, 1_000_000_001.0);
        assert_eq!(result.shorthand_form, "1.0B");
        assert_eq!(result.words_form, "one billion one");
    }

    #[test]
    fn test_end_to_end_negative_shorthand_loses_sign() {
        let result = convert_number("-2.5M");
        assert!(result.is_valid);
        assert_eq!(result.numeric_value, 2_500_000.0);
        assert_eq!(result.shorthand_form, "2.5M");
    }

    #[test]
    fn test_invalid_results_are_zeroed() {
        for input in ["", " ", "abc", "$", "K", "..."] {
            let result = convert_number(input);
            assert!(!result.is_valid, "{:?}", input);
            assert_eq!(result.numeric_value, 0.0);
            assert_eq!(result.shorthand_form, "0");
        }
    }

    #[test]
    fn test_standalone_functions() {
        assert_eq!(parse_shorthand("2.5M"), Some(2_500_000.0));
        assert_eq!(parse_shorthand("1K"), Some(1_000.0));
        assert_eq!(parse_shorthand("abc"), None);
        assert_eq!(parse_shorthand("1.5"), Some(1.5));

        assert_eq!(number_to_shorthand(1500.0), "1.5K");
        assert_eq!(number_to_shorthand(1000.0), "1K");
        assert_eq!(number_to_shorthand(999.0), "999");
        assert_eq!(number_to_shorthand(-2_500_000.0), "-2.5M");

        assert_eq!(extract_currency("$1.5K"), Some(Currency::Dollar));
        assert_eq!(extract_currency("no symbol"), None);

        assert_eq!(number_to_words(0.0).unwrap(), "zero");
        assert_eq!(number_to_words(-5.0).unwrap(), "negative five");
        assert_eq!(number_to_words(1_000_000.0).unwrap(), "one million");
        assert!(!number_to_words(1_000_000_001.0).unwrap().contains("thousand"));
    }

    fn scale_multiple() -> impl Strategy<Value = f64> {
        prop_oneof![
            (0u64..1000).prop_map(|n| n as f64),
            (1u64..1000, prop_oneof![Just(1e3), Just(1e6), Just(1e9)])
                .prop_map(|(k, scale)| k as f64 * scale),
        ]
    }

    proptest! {
        #[test]
        fn prop_shorthand_round_trip(n in scale_multiple()) {
            let shorthand = number_to_shorthand(n);
            prop_assert_eq!(parse_shorthand(&shorthand), Some(n));
        }

        #[test]
        fn prop_invalid_implies_sentinels(input in "\\PC{0,12}") {
            let result = convert_number(&input);
            if !result.is_valid {
                prop_assert_eq!(result.numeric_value, 0.0);
                prop_assert_eq!(result.shorthand_form.as_str(), "0");
            }
            prop_assert_eq!(result.original_input.as_str(), input.as_str());
        }

        #[test]
        fn prop_words_are_lowercase_ascii(n in -999_999_999_999_999i64..=999_999_999_999_999) {
            let words = number_to_words(n as f64).unwrap();
            prop_assert!(words.chars().all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-'));
            prop_assert!(!words.contains("  "));
            prop_assert_eq!(words.starts_with("negative "), n < 0);
        }

        #[test]
        fn prop_currency_does_not_affect_validity(n in 0u32..1_000_000, idx in 0usize..8) {
            let currency = Currency::ALL[idx];
            let bare = convert_number(&n.to_string());
            let priced = convert_number(&format!("{}{}", currency.symbol(), n));
            prop_assert_eq!(bare.is_valid, priced.is_valid);
            prop_assert_eq!(bare.numeric_value, priced.numeric_value);
            prop_assert_eq!(priced.currency, Some(currency));
        }
    }
}
