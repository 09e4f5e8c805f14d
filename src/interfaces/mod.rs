// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod value_parser;

pub use event_handler::{
    ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RejectReason,
};
pub use value_parser::ValueParser;
