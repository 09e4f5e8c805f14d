// ============================================================================
// Words Formatter
// English spelling of integer values, composed chunk by chunk
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scale::Scale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// How a fractional value is reduced to an integer before spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FractionMode {
    /// Drop the fractional part (toward zero)
    #[default]
    Truncate,
    /// Round half away from zero
    Round,
}

impl FractionMode {
    #[inline]
    fn apply(self, value: f64) -> f64 {
        match self {
            FractionMode::Truncate => value.trunc(),
            FractionMode::Round => value.round(),
        }
    }
}

/// Spell a value in 0..=999. Zero yields an empty string.
///
/// | n   | words                  |
/// |-----|------------------------|
/// | 5   | five                   |
/// | 15  | fifteen                |
/// | 21  | twenty-one             |
/// | 142 | one hundred forty-two  |
///
/// Values above 999 are reduced modulo 1000.
pub fn hundreds_to_words(n: u16) -> String {
    let mut rest = (n % 1000) as usize;
    let mut words = String::new();

    if rest >= 100 {
        words.push_str(ONES[rest / 100]);
        words.push_str(" hundred");
        rest %= 100;
        if rest > 0 {
            words.push(' ');
        }
    }

    if rest >= 20 {
        words.push_str(TENS[rest / 10]);
        if rest % 10 > 0 {
            words.push('-');
            words.push_str(ONES[rest % 10]);
        }
    } else if rest >= 10 {
        words.push_str(TEENS[rest - 10]);
    } else if rest > 0 {
        words.push_str(ONES[rest]);
    }

    words
}

/// Spell a non-negative integer, most significant chunk first.
fn integer_to_words(mut n: u64, original: f64) -> NumericResult<String> {
    if n == 0 {
        return Ok("zero".to_string());
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut index = 0usize;

    while n > 0 {
        let chunk = (n % 1000) as u16;
        if chunk != 0 {
            let mut phrase = hundreds_to_words(chunk);
            if index > 0 {
                let scale = Scale::for_chunk(index)
                    .ok_or(NumericError::ScaleOverflow { value: original })?;
                phrase.push(' ');
                phrase.push_str(scale.word());
            }
            chunks.push(phrase);
        }
        n /= 1000;
        index += 1;
    }

    chunks.reverse();
    Ok(chunks.join(" "))
}

/// Spell a value in English words, reducing fractions with `mode`.
///
/// # Errors
/// - `InvalidInput` for NaN
/// - `NonFinite` for infinities
/// - `ScaleOverflow` when the integer magnitude reaches 10^15
pub fn number_to_words_with(value: f64, mode: FractionMode) -> NumericResult<String> {
    if value.is_nan() {
        return Err(NumericError::InvalidInput);
    }
    if value.is_infinite() {
        return Err(NumericError::NonFinite);
    }

    let integral = mode.apply(value);
    if integral == 0.0 {
        return Ok("zero".to_string());
    }

    // `as u64` saturates; anything that large overflows the scale table anyway.
    let words = integer_to_words(integral.abs() as u64, value)?;
    if integral < 0.0 {
        Ok(format!("negative {}", words))
    } else {
        Ok(words)
    }
}

/// Spell a value in English words. Fractional parts are truncated.
///
/// # Examples
/// ```
/// use shorthand_converter::number_to_words;
///
/// assert_eq!(number_to_words(1500.0).unwrap(), "one thousand five hundred");
/// assert_eq!(number_to_words(-5.0).unwrap(), "negative five");
/// ```
pub fn number_to_words(value: f64) -> NumericResult<String> {
    number_to_words_with(value, FractionMode::Truncate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundreds_table() {
        let cases = [
            (0, ""),
            (5, "five"),
            (10, "ten"),
            (15, "fifteen"),
            (19, "nineteen"),
            (20, "twenty"),
            (21, "twenty-one"),
            (99, "ninety-nine"),
            (100, "one hundred"),
            (105, "one hundred five"),
            (110, "one hundred ten"),
            (142, "one hundred forty-two"),
            (999, "nine hundred ninety-nine"),
        ];
        for (n, expected) in cases {
            assert_eq!(hundreds_to_words(n), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(number_to_words(0.0).unwrap(), "zero");
        assert_eq!(number_to_words(-5.0).unwrap(), "negative five");
        assert_eq!(number_to_words(-1_000.0).unwrap(), "negative one thousand");
    }

    #[test]
    fn test_scales() {
        assert_eq!(number_to_words(1_000.0).unwrap(), "one thousand");
        assert_eq!(number_to_words(1_000_000.0).unwrap(), "one million");
        assert_eq!(number_to_words(2_000_000_000.0).unwrap(), "two billion");
        assert_eq!(
            number_to_words(999_000_000_000_000.0).unwrap(),
            "nine hundred ninety-nine trillion"
        );
    }

    #[test]
    fn test_zero_chunks_are_omitted() {
        let words = number_to_words(1_000_000_001.0).unwrap();
        assert_eq!(words, "one billion one");
        assert!(!words.contains("thousand"));
        assert!(!words.contains("million"));
    }

    #[test]
    fn test_mixed_chunks() {
        assert_eq!(
            number_to_words(1_234_567.0).unwrap(),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
        assert_eq!(
            number_to_words(1_500.0).unwrap(),
            "one thousand five hundred"
        );
    }

    #[test]
    fn test_fraction_truncated_by_default() {
        assert_eq!(number_to_words(1.5).unwrap(), "one");
        assert_eq!(number_to_words(1_500.7).unwrap(), "one thousand five hundred");
        assert_eq!(number_to_words(-0.5).unwrap(), "zero");
        assert_eq!(number_to_words(-2.9).unwrap(), "negative two");
    }

    #[test]
    fn test_fraction_rounded() {
        assert_eq!(number_to_words_with(1.5, FractionMode::Round).unwrap(), "two");
        assert_eq!(number_to_words_with(2.4, FractionMode::Round).unwrap(), "two");
        assert_eq!(
            number_to_words_with(-0.5, FractionMode::Round).unwrap(),
            "negative one"
        );
    }

    #[test]
    fn test_scale_overflow() {
        assert_eq!(
            number_to_words(1e15),
            Err(NumericError::ScaleOverflow { value: 1e15 })
        );
        assert_eq!(
            number_to_words(-2.5e18),
            Err(NumericError::ScaleOverflow { value: -2.5e18 })
        );
        assert!(number_to_words(1e300).is_err());
    }

    #[test]
    fn test_non_numbers() {
        assert_eq!(number_to_words(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(number_to_words(f64::INFINITY), Err(NumericError::NonFinite));
    }
}
