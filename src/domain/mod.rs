// ============================================================================
// Domain Models Module
// Contains the currency table, the conversion result and configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod result;

pub use config::{ConfigError, ConverterConfig, MAX_SHORTHAND_DECIMALS};
pub use currency::{extract_currency, Currency};
pub use result::ConversionResult;
