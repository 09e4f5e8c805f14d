// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging enabled:
//   RUST_LOG=debug cargo run --example basic_usage --features logging

use shorthand_converter::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Shorthand Converter Example ===\n");

    // Default converter via the free function
    for input in ["$1.5K", "€2.5M", "1,234,567", "-1.5KK", "", "not a number"] {
        let result = convert_number(input);
        println!("{:?} -> valid={}", input, result.is_valid);
        println!("  numeric:   {}", result.numeric_value);
        println!("  shorthand: {}", result.shorthand_form);
        println!("  words:     {}", result.words_form);
        if let Some(currency) = result.currency {
            println!("  currency:  {} ({})", currency, currency.name());
        }
    }

    // Custom converter with logging events
    println!("\n=== Custom Converter ===");
    let converter = ConverterBuilder::new()
        .round_fractions()
        .with_shorthand_decimals(2)
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("valid configuration");

    for input in ["£1,234", "¥2.5", "₹9999T"] {
        let result = converter.convert(input);
        println!("{:>8} -> {} / {}", input, result.shorthand_form, result.words_form);
    }

    // Standalone functions
    println!("\n=== Standalone Functions ===");
    println!("parse_shorthand(\"3.2B\")    = {:?}", parse_shorthand("3.2B"));
    println!("number_to_shorthand(42000) = {}", number_to_shorthand(42_000.0));
    match number_to_words(1_000_000_001.0) {
        Ok(words) => println!("number_to_words(1000000001) = {}", words),
        Err(err) => println!("number_to_words failed: {}", err),
    }
    println!("extract_currency(\"₩500\")  = {:?}", extract_currency("₩500"));
}
