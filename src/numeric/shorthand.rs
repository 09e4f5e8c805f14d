// ============================================================================
// Shorthand Notation
// Parsing "2.5M"-style input and rendering values back into compact form
// ============================================================================

use super::scale::Scale;
use regex::Regex;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;

/// Decimal places used when a scaled value is not a whole number.
pub const DEFAULT_SHORTHAND_DECIMALS: u32 = 1;

/// `<digits>[.<digits>]<suffix?>`, anchored at both ends.
static SHORTHAND_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+\.?\d*)([KMBT])?$").expect("Invalid shorthand regex")
});

// ============================================================================
// Parsing
// ============================================================================

/// Keep only ASCII digits, `.` and suffix letters.
///
/// Currency symbols, separators, whitespace and a leading `-` are discarded.
fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == '.' || Scale::is_suffix(c))
        .collect()
}

/// Multiply the numeric portion by the suffix multiplier.
///
/// The product is computed in `Decimal` so that e.g. "1.1K" is exactly 1100.
/// Digit strings `Decimal` cannot hold are multiplied as `f64`.
fn expand(digits: &str, scale: Option<Scale>) -> Option<f64> {
    let multiplier = scale.map_or(1, Scale::multiplier);

    let exact = Decimal::from_str(digits)
        .ok()
        .and_then(|number| number.checked_mul(Decimal::from(multiplier)))
        .and_then(|product| product.to_f64());
    if exact.is_some() {
        return exact;
    }

    let number: f64 = digits.parse().ok()?;
    Some(number * multiplier as f64)
}

/// Decode shorthand notation into a number.
///
/// Returns `None` when the cleaned input does not match the grammar, so the
/// caller can fall back to plain parsing.
///
/// # Examples
/// ```
/// use shorthand_converter::parse_shorthand;
///
/// assert_eq!(parse_shorthand("2.5M"), Some(2_500_000.0));
/// assert_eq!(parse_shorthand("$1,200"), Some(1200.0));
/// assert_eq!(parse_shorthand("abc"), None);
/// ```
pub fn parse_shorthand(input: &str) -> Option<f64> {
    let cleaned = clean(input);
    let captures = SHORTHAND_GRAMMAR.captures(&cleaned)?;

    let digits = captures.get(1)?.as_str();
    let scale = captures
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Scale::from_suffix);

    expand(digits, scale)
}

// ============================================================================
// Formatting
// ============================================================================

/// Render `abs / scale` with `decimals` places, rounding half away from zero.
fn render_fraction(scaled: f64, decimals: u32) -> String {
    match Decimal::from_f64(scaled) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        },
        None => format!("{:.*}", decimals as usize, scaled),
    }
}

/// Render a value in compact form with a custom number of decimal places.
///
/// Whole multiples of a scale render without decimals ("1K"); anything else
/// gets exactly `decimals` places ("1.5K", "1.0M" for 1,000,050).
pub fn format_shorthand(value: f64, decimals: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    for scale in Scale::DESCENDING {
        let magnitude = scale.magnitude();
        if abs >= magnitude {
            let scaled = abs / magnitude;
            let body = if abs % magnitude == 0.0 {
                format!("{}", scaled)
            } else {
                render_fraction(scaled, decimals)
            };
            return format!("{}{}{}", sign, body, scale.suffix());
        }
    }

    format!("{}{}", sign, abs)
}

/// Render a value in compact form ("1.5K", "-2.5M", "999").
///
/// # Examples
/// ```
/// use shorthand_converter::number_to_shorthand;
///
/// assert_eq!(number_to_shorthand(1500.0), "1.5K");
/// assert_eq!(number_to_shorthand(1000.0), "1K");
/// assert_eq!(number_to_shorthand(-2_500_000.0), "-2.5M");
/// ```
pub fn number_to_shorthand(value: f64) -> String {
    format_shorthand(value, DEFAULT_SHORTHAND_DECIMALS)
}

// ============================================================================
// Tests
// ============================================================================
