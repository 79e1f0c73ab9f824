//! Core identifier types for the event logger
//!
//! This module defines the fundamental types used throughout the system:
//! - [`EventId`]: Unique identifier for a recorded event
//! - [`StoreKind`]: Which of the three logger stores a record lives in
//! - [`TimerState`]: Per-identifier state of the start/stop protocol

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an event
///
/// EventId is the only handle a caller gets back when recording an event.
/// It is used to:
/// - Look a record up again
/// - Correlate a stop record with its start record
/// - Identify a line in an export file
///
/// Identifiers are always generated by the logger, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Create a new random EventId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_core::EventId;
    ///
    /// let id1 = EventId::new();
    /// let id2 = EventId::new();
    /// assert_ne!(id1, id2); // Each EventId is unique
    /// ```
    pub fn new() -> Self {
        EventId(Uuid::new_v4())
    }

    /// Create EventId from raw bytes
    ///
    /// Lookups by an id built this way are allowed; they simply miss unless
    /// the bytes came from an id the logger issued.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        EventId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The all-zero identifier. Never issued by a logger.
    pub fn nil() -> Self {
        EventId(Uuid::nil())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(EventId)
    }
}

/// The three stores owned by a logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKind {
    /// General log events
    Log,
    /// Opened timers
    Start,
    /// Closed timers, keyed by the id of their start record
    Stop,
}

impl StoreKind {
    /// Human readable store name, as used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Log => "event log",
            StoreKind::Start => "start event log",
            StoreKind::Stop => "stop event log",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one identifier within the start/stop protocol
///
/// Transitions only move forward: `Unknown -> Started -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerState {
    /// Not present in the start store
    Unknown,
    /// Present in the start store, absent from the stop store
    Started,
    /// Present in both stores (terminal)
    Stopped,
}

impl TimerState {
    /// Whether the timer can still be stopped
    pub fn is_open(&self) -> bool {
        matches!(self, TimerState::Started)
    }
}
