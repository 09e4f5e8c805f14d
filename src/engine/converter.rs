// ============================================================================
// Converter
// Composes currency extraction, parsing and rendering into one result
// ============================================================================

use crate::domain::result::OVERFLOW_WORDS;
use crate::domain::{ConversionResult, ConverterConfig, Currency};
use crate::engine::parsers::default_parsers;
use crate::interfaces::{
    ConversionEvent, EventHandler, NoOpEventHandler, RejectReason, ValueParser,
};
use crate::numeric::{format_shorthand, number_to_words_with, NumericError};
use chrono::Utc;
use std::sync::Arc;

/// Stateless conversion pipeline with pluggable parser stages.
///
/// A `Converter` holds only immutable configuration, so one instance can be
/// shared across threads.
pub struct Converter {
    /// Rendering options
    config: ConverterConfig,

    /// Parser stages, tried in order
    parsers: Vec<Box<dyn ValueParser>>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default(), Arc::new(NoOpEventHandler))
    }
}

impl Converter {
    /// Create a converter with the default parser chain
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_parsers(config, default_parsers(), event_handler)
    }

    /// Create a converter with an explicit parser chain
    pub fn with_parsers(
        config: ConverterConfig,
        parsers: Vec<Box<dyn ValueParser>>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            config,
            parsers,
            event_handler,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Names of the parser stages, in the order they are tried
    pub fn parser_names(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Convert one input string.
    ///
    /// Never fails; invalid input is reported through `is_valid` and the
    /// sentinel forms.
    pub fn convert(&self, input: &str) -> ConversionResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.reject(input, RejectReason::Empty);
            return ConversionResult::empty(input);
        }

        let currency = Currency::extract(trimmed);

        let Some((parser, value)) = self.decode(trimmed) else {
            self.reject(input, RejectReason::Unparseable);
            return ConversionResult::invalid(input, currency);
        };

        tracing::trace!(parser, value, ?currency, "Decoded input");

        let shorthand = self.render_shorthand(value, currency);
        let words = match number_to_words_with(value, self.config.fraction_mode) {
            Ok(words) => match currency {
                Some(c) => format!("{} {}", words, c.name()),
                None => words,
            },
            Err(NumericError::ScaleOverflow { .. }) => {
                self.event_handler.on_event(ConversionEvent::WordsOverflow {
                    input: input.to_string(),
                    numeric_value: value,
                    timestamp: Utc::now(),
                });
                OVERFLOW_WORDS.to_string()
            },
            Err(err) => {
                // decode() only yields finite values
                tracing::warn!(%err, value, "Unexpected words error");
                OVERFLOW_WORDS.to_string()
            },
        };

        self.event_handler.on_event(ConversionEvent::Converted {
            input: input.to_string(),
            parser: parser.to_string(),
            numeric_value: value,
            timestamp: Utc::now(),
        });

        ConversionResult::valid(input, value, shorthand, words, currency)
    }

    /// Run the parser chain; the first stage that returns a value decides.
    /// Non-finite values are treated as unparseable.
    fn decode(&self, input: &str) -> Option<(&str, f64)> {
        let (parser, value) = self
            .parsers
            .iter()
            .find_map(|p| p.parse(input).map(|v| (p.name(), v)))?;

        if value.is_finite() {
            Some((parser, value))
        } else {
            tracing::trace!(parser, "Discarding non-finite value");
            None
        }
    }

    fn render_shorthand(&self, value: f64, currency: Option<Currency>) -> String {
        let body = format_shorthand(value, self.config.shorthand_decimals);
        match currency {
            Some(c) => format!("{}{}", c.symbol(), body),
            None => body,
        }
    }

    fn reject(&self, input: &str, reason: RejectReason) {
        tracing::debug!(?reason, "Rejecting input");
        self.event_handler.on_event(ConversionEvent::Rejected {
            input: input.to_string(),
            reason,
            timestamp: Utc::now(),
        });
    }
}
