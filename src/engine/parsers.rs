// ============================================================================
// Parser Stages
// Default ValueParser implementations used by the converter
// ============================================================================

use crate::interfaces::ValueParser;
use crate::numeric::{parse_plain_number, parse_shorthand};

/// Shorthand grammar stage ("2.5M", "$1,200", "3k").
#[derive(Debug, Default, Clone, Copy)]
pub struct ShorthandParser;

impl ShorthandParser {
    pub fn new() -> Self {
        Self
    }
}

impl ValueParser for ShorthandParser {
    fn parse(&self, input: &str) -> Option<f64> {
        parse_shorthand(input)
    }

    fn name(&self) -> &str {
        "shorthand"
    }
}

/// Plain decimal fallback stage; keeps a leading minus sign.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainNumberParser;

impl PlainNumberParser {
    pub fn new() -> Self {
        Self
    }
}

impl ValueParser for PlainNumberParser {
    fn parse(&self, input: &str) -> Option<f64> {
        parse_plain_number(input)
    }

    fn name(&self) -> &str {
        "plain"
    }
}

/// The standard chain: shorthand first, plain number as fallback.
pub fn default_parsers() -> Vec<Box<dyn ValueParser>> {
    vec![
        Box::new(ShorthandParser::new()),
        Box::new(PlainNumberParser::new()),
    ]
}
