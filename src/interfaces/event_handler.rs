// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an input produced an invalid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// Nothing left after trimming
    Empty,
    /// No parser produced a finite number
    Unparseable,
}

/// Events emitted by the converter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// A number was decoded
    Converted {
        input: String,
        parser: String,
        numeric_value: f64,
        timestamp: DateTime<Utc>,
    },

    /// Input produced an invalid result
    Rejected {
        input: String,
        reason: RejectReason,
        timestamp: DateTime<Utc>,
    },

    /// A decoded value was too large to spell
    WordsOverflow {
        input: String,
        numeric_value: f64,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing converter activity
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected { input, reason, .. } => {
                tracing::debug!(?reason, input = %input, "Conversion rejected");
            },
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}
