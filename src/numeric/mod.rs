// ============================================================================
// Numeric Module
// Pure parsing and formatting functions for shorthand numbers
// ============================================================================
//
// This module provides:
// - Scale: the ordered K/M/B/T table shared by parser and formatters
// - parse_shorthand / parse_plain_number: decoding user input
// - number_to_shorthand / number_to_words: rendering decoded values
// - NumericError: Error types for the rendering functions
//
// Nothing here holds state; every function is safe to call from any thread.

mod errors;
mod plain;
mod scale;
mod shorthand;
mod words;

pub use errors::{NumericError, NumericResult};
pub use plain::parse_plain_number;
pub use scale::Scale;
pub use shorthand::{
    format_shorthand, number_to_shorthand, parse_shorthand, DEFAULT_SHORTHAND_DECIMALS,
};
pub use words::{hundreds_to_words, number_to_words, number_to_words_with, FractionMode};
