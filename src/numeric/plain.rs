// ============================================================================
// Plain Number Fallback
// ============================================================================

use regex::Regex;
use std::sync::LazyLock;

/// Longest leading decimal number, optionally signed.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("Invalid plain number regex")
});

/// Parse input as a plain decimal number after stripping everything except
/// digits, `.` and `-`.
///
/// The longest numeric prefix of the stripped text is used, so "1.2.3" gives
/// 1.2 and "5-3" gives 5. Returns `None` when nothing numeric remains.
pub fn parse_plain_number(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == '.' || c == '-')
        .collect();

    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
}
