// ============================================================================
// Numeric Errors
// Error types for the standalone parse/format functions
// ============================================================================

use thiserror::Error;

/// Errors that can occur while rendering a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericError {
    /// Input value is not a number
    #[error("invalid input: value is not a number")]
    InvalidInput,

    /// Input value is infinite
    #[error("non-finite value: cannot render infinity")]
    NonFinite,

    /// Magnitude has no scale word (|n| >= 10^15)
    #[error("scale overflow: {value} exceeds the largest scale word (trillion)")]
    ScaleOverflow { value: f64 },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
