// ============================================================================
// Converter Factory
// Creates converters with validated configuration
// ============================================================================

use crate::domain::config::{ConfigError, ConverterConfig};
use crate::engine::parsers::default_parsers;
use crate::engine::Converter;
use crate::interfaces::{EventHandler, NoOpEventHandler, ValueParser};
use crate::numeric::FractionMode;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use shorthand_converter::prelude::*;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::default().with_shorthand_decimals(2);
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.convert("1234").shorthand_form, "1.23K");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Converter, ConfigError> {
    config.validate()?;
    Ok(Converter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use shorthand_converter::prelude::*;
///
/// let converter = ConverterBuilder::new()
///     .round_fractions()
///     .with_shorthand_decimals(0)
///     .build()
///     .unwrap();
///
/// let result = converter.convert("1.5K");
/// assert_eq!(result.shorthand_form, "2K");
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
    extra_parsers: Vec<Box<dyn ValueParser>>,
    event_handler: Arc<dyn EventHandler>,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// Create a builder with default configuration and no event handler
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
            extra_parsers: Vec::new(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    // ========================================================================
    // Rendering Configuration
    // ========================================================================

    /// Truncate fractions before spelling (default)
    pub fn truncate_fractions(mut self) -> Self {
        self.config.fraction_mode = FractionMode::Truncate;
        self
    }

    /// Round fractions half away from zero before spelling
    pub fn round_fractions(mut self) -> Self {
        self.config.fraction_mode = FractionMode::Round;
        self
    }

    /// Set shorthand decimal places
    pub fn with_shorthand_decimals(mut self, decimals: u32) -> Self {
        self.config.shorthand_decimals = decimals;
        self
    }

    // ========================================================================
    // Pipeline Configuration
    // ========================================================================

    /// Append a parser stage after the shorthand and plain-number stages
    pub fn with_parser(mut self, parser: impl ValueParser + 'static) -> Self {
        self.extra_parsers.push(Box::new(parser));
        self
    }

    /// Set the event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> Result<Converter, ConfigError> {
        self.config.validate()?;

        let mut parsers = default_parsers();
        parsers.extend(self.extra_parsers);

        Ok(Converter::with_parsers(
            self.config,
            parsers,
            self.event_handler,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::LoggingEventHandler;

    struct WordParser;

    impl ValueParser for WordParser {
        fn parse(&self, input: &str) -> Option<f64> {
            (input.eq_ignore_ascii_case("dozen")).then_some(12.0)
        }

        fn name(&self) -> &str {
            "dozen"
        }
    }

    #[test]
    fn test_create_from_default_config() {
        let converter =
            create_from_config(ConverterConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.config(), &ConverterConfig::default());
        assert_eq!(converter.parser_names(), ["shorthand", "plain"]);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = ConverterConfig::default().with_shorthand_decimals(12);
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(matches!(
            result,
            Err(ConfigError::ShorthandDecimalsOutOfRange(12))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let converter = ConverterBuilder::new()
            .round_fractions()
            .with_shorthand_decimals(3)
            .with_event_handler(Arc::new(LoggingEventHandler))
            .build()
            .unwrap();

        assert_eq!(converter.config().fraction_mode, FractionMode::Round);
        assert_eq!(converter.convert("1,234,567").shorthand_form, "1.235M");
    }

    #[test]
    fn test_builder_extra_parser_runs_last() {
        let converter = ConverterBuilder::new().with_parser(WordParser).build().unwrap();
        assert_eq!(converter.parser_names(), ["shorthand", "plain", "dozen"]);

        let result = converter.convert("dozen");
        assert!(result.is_valid);
        assert_eq!(result.words_form, "twelve");

        // Earlier stages still take precedence.
        assert_eq!(converter.convert("3K").numeric_value, 3000.0);
    }

    #[test]
    fn test_builder_from_config() {
        let builder = ConverterBuilder::from_config(
            ConverterConfig::default().with_fraction_mode(FractionMode::Round),
        )
        .truncate_fractions();
        assert_eq!(builder.get_config().fraction_mode, FractionMode::Truncate);
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        assert!(ConverterBuilder::new()
            .with_shorthand_decimals(99)
            .build()
            .is_err());
    }
}
