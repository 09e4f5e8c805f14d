// ============================================================================
// Converter Configuration
// Rendering options applied by the converter
// ============================================================================

use crate::numeric::{FractionMode, DEFAULT_SHORTHAND_DECIMALS};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted `shorthand_decimals`.
pub const MAX_SHORTHAND_DECIMALS: u32 = 6;

/// Errors raised while loading or validating a [`ConverterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shorthand decimals must be between 0 and {max}, got {0}", max = MAX_SHORTHAND_DECIMALS)]
    ShorthandDecimalsOutOfRange(u32),

    #[cfg(feature = "serde")]
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options controlling how a decoded value is rendered.
///
/// The defaults reproduce the canonical behavior: one decimal place in the
/// shorthand form and truncation of fractions in the words form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// How fractional values are reduced before spelling
    pub fraction_mode: FractionMode,

    /// Decimal places for non-whole shorthand values ("1.5K")
    pub shorthand_decimals: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            fraction_mode: FractionMode::Truncate,
            shorthand_decimals: DEFAULT_SHORTHAND_DECIMALS,
        }
    }
}

impl ConverterConfig {
    /// Builder method: Set the fraction mode for the words form
    pub fn with_fraction_mode(mut self, mode: FractionMode) -> Self {
        self.fraction_mode = mode;
        self
    }

    /// Builder method: Set shorthand decimal places
    pub fn with_shorthand_decimals(mut self, decimals: u32) -> Self {
        self.shorthand_decimals = decimals;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shorthand_decimals > MAX_SHORTHAND_DECIMALS {
            return Err(ConfigError::ShorthandDecimalsOutOfRange(
                self.shorthand_decimals,
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON. Missing fields take
    /// their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
