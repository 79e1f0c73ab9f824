//! Core types for the Chronicle event logger
//!
//! This crate defines the value types shared by every other crate:
//! - [`Event`]: Immutable record of one logged event
//! - [`Severity`]: Criticality of an event, with its console and trace mapping
//! - [`EventId`]: Unique identifier returned when an event is recorded
//! - [`Clock`]: Monotonic milliseconds-since-start clock
//! - [`Error`]: Every failure a logger operation can report

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod event;
pub mod types;

pub use clock::Clock;
pub use error::{Error, ErrorKind, Result};
pub use event::{Channel, Color, Event, Severity, TIMESTAMP_FORMAT};
pub use types::{EventId, StoreKind, TimerState};
