//! # Chronicle
//!
//! In-process event logger with start/stop timing.
//!
//! Chronicle records timestamped, typed events under unique identifiers,
//! pairs start and stop events to measure elapsed time, and exports what it
//! has collected as tab-delimited text.
//!
//! ## Quick Start
//!
//! ```
//! use chronicle::prelude::*;
//!
//! let logger = Logger::new();
//!
//! // General events
//! let id = logger.add(Severity::Info, "startup", "listening")?;
//! assert_eq!(logger.get(&id)?.name(), "startup");
//!
//! // Timed events
//! let timer = logger.start_event(Severity::Info, "request", "GET /")?;
//! logger.stop_event(&timer)?;
//! assert_eq!(logger.timer_state(&timer), TimerState::Stopped);
//!
//! // Export
//! let text = String::from_utf8(logger.render_log()?).unwrap();
//! assert_eq!(text.lines().count(), 1);
//! # Ok::<(), chronicle::Error>(())
//! ```
//!
//! ## Stores
//!
//! Each [`Logger`] owns three independent stores, each with its own lock:
//!
//! - the general log ([`Logger::add`], [`Logger::get`])
//! - opened timers ([`Logger::start_event`], [`Logger::get_start`])
//! - closed timers ([`Logger::stop_event`], [`Logger::get_stop`])
//!
//! ## Export
//!
//! - [`Logger::export_log`] / [`Logger::export_persisting`] block until the
//!   file is written
//! - [`Logger::export_log_async`] / [`Logger::export_persisting_async`]
//!   snapshot immediately and write on a tokio task

#![warn(missing_docs)]

pub mod prelude;

pub use chronicle_core::{
    Channel, Clock, Color, Error, ErrorKind, Event, EventId, Result, Severity, StoreKind,
    TimerState, TIMESTAMP_FORMAT,
};
pub use chronicle_engine::{ConsoleSink, Correlator, EventSink, Logger, LoggerBuilder, TraceSink};
pub use chronicle_export::{ExportHandle, ExportOptions, ExportReport, Exporter, TimerPair};
pub use chronicle_storage::{EventStore, StoreSnapshot};
