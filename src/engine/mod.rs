// ============================================================================
// Engine Module
// Contains the conversion pipeline and its parser stages
// ============================================================================

mod converter;
mod parsers;

pub mod factory;

pub use converter::Converter;
pub use factory::{create_from_config, ConverterBuilder};
pub use parsers::{default_parsers, PlainNumberParser, ShorthandParser};
