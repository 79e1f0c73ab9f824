//! Event record types
//!
//! These types define the immutable records held by the logger stores.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock format used wherever a record timestamp is rendered as text.
///
/// Fixed rather than locale-driven so export files compare byte-for-byte
/// across hosts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Severity of an event
///
/// Variants are declared in increasing order of criticality, so the derived
/// `Ord` gives `Info < Warning < Error < Abort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational event
    Info,
    /// Something unexpected that did not stop the caller
    Warning,
    /// A failed operation
    Error,
    /// A failure the caller could not continue from
    Abort,
}

impl Severity {
    /// All severities, least critical first
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Abort,
    ];

    /// Mixed-case variant name, as written to export files
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Abort => "Abort",
        }
    }

    /// Upper-case variant name, as shown on the console
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Abort => "ABORT",
        }
    }

    /// Presentation channel for trace-style sinks
    pub fn channel(&self) -> Channel {
        match self {
            Severity::Info => Channel::Info,
            Severity::Warning => Channel::Warning,
            Severity::Error | Severity::Abort => Channel::Error,
        }
    }

    /// Console color for terminal sinks
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Abort => Color::DarkRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    /// Case-insensitive parse of a variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .iter()
            .copied()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown severity '{}'", s))
    }
}

/// Output channel a sink routes a record to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Informational output
    Info,
    /// Warning output
    Warning,
    /// Error output (errors and aborts)
    Error,
}

/// Terminal color assigned to a severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Info
    Cyan,
    /// Warning
    Yellow,
    /// Error
    Red,
    /// Abort
    DarkRed,
    /// Default foreground, restored after each colored line
    White,
}

impl Color {
    /// ANSI SGR escape sequence selecting this foreground color
    pub fn ansi(&self) -> &'static str {
        match self {
            Color::Cyan => "\x1b[96m",
            Color::Yellow => "\x1b[93m",
            Color::Red => "\x1b[91m",
            Color::DarkRed => "\x1b[31m",
            Color::White => "\x1b[97m",
        }
    }

    /// ANSI sequence resetting all attributes
    pub const RESET: &'static str = "\x1b[0m";
}

/// An event in the log
///
/// Events are immutable once created. Each event includes:
/// - The wall-clock time it was created
/// - Its severity, name and message
/// - Milliseconds elapsed on the logger's monotonic clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    timestamp: DateTime<Local>,
    severity: Severity,
    name: String,
    message: String,
    elapsed_ms: u64,
}

impl Event {
    /// Create an event stamped with the current wall-clock time
    pub fn new(
        severity: Severity,
        name: impl Into<String>,
        message: impl Into<String>,
        elapsed_ms: u64,
    ) -> Self {
        Self::at(Local::now(), severity, name, message, elapsed_ms)
    }

    /// Create an event with an explicit wall-clock time
    pub fn at(
        timestamp: DateTime<Local>,
        severity: Severity,
        name: impl Into<String>,
        message: impl Into<String>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            timestamp,
            severity,
            name: name.into(),
            message: message.into(),
            elapsed_ms,
        }
    }

    /// A fresh record carrying this event's severity, name and message
    ///
    /// Used to close a timer: the stop record mirrors its start record but
    /// carries its own timestamps.
    pub fn restamp(&self, elapsed_ms: u64) -> Self {
        Self::new(self.severity, self.name.clone(), self.message.clone(), elapsed_ms)
    }

    /// Wall-clock creation time
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Event severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Event name (source or category)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Milliseconds since the logger's clock started
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Event {
    /// `[SEVERITY][timestamp][name][elapsed_ms]: message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}][{}][{}]: {}",
            self.severity.label(),
            self.formatted_timestamp(),
            self.name,
            self.elapsed_ms,
            self.message
        )
    }
}
