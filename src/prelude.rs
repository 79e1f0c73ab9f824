//! Convenient imports for Chronicle.
//!
//! ```
//! use chronicle::prelude::*;
//!
//! let logger = Logger::new();
//! logger.add(Severity::Warning, "disk", "80% full").unwrap();
//! ```

// Main entry point
pub use chronicle_engine::{Logger, LoggerBuilder};

// Error handling
pub use chronicle_core::{Error, ErrorKind, Result};

// Core types
pub use chronicle_core::{Event, EventId, Severity, TimerState};

// Sinks
pub use chronicle_engine::{ConsoleSink, EventSink, TraceSink};

// Export
pub use chronicle_export::{ExportHandle, ExportOptions, ExportReport};
