//! Logger engine for Chronicle
//!
//! This crate ties the stores, the clock and the exporter together:
//! - [`Logger`]: the handle callers record events through
//! - [`Correlator`]: the start/stop timer protocol
//! - [`EventSink`], [`ConsoleSink`], [`TraceSink`]: per-record presentation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logger;
pub mod sink;
pub mod timer;

pub use logger::{Logger, LoggerBuilder};
pub use sink::{ConsoleSink, EventSink, TraceSink};
pub use timer::Correlator;
