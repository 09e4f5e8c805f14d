// ============================================================================
// Value Parser Interface
// Defines the contract for pluggable input-decoding stages
// ============================================================================

/// Strategy pattern interface for decoding a number from trimmed input.
/// Implementations: ShorthandParser, PlainNumberParser.
///
/// The converter tries its parsers in order and uses the first `Some`.
pub trait ValueParser: Send + Sync {
    /// Decode `input`, or return `None` to let the next stage try.
    ///
    /// # Arguments
    /// * `input` - Trimmed, non-empty user input
    fn parse(&self, input: &str) -> Option<f64>;

    /// Get the parser name for logging/events
    fn name(&self) -> &str;
}
