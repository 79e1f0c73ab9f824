//! Presentation sinks
//!
//! A sink renders one record somewhere outside the logger. Two are
//! provided:
//! - [`ConsoleSink`]: colored `[SEVERITY][timestamp][name][elapsed]: message`
//!   lines on a terminal
//! - [`TraceSink`]: the same line routed through `tracing`, on the level
//!   matching [`Severity::channel`](chronicle_core::Severity::channel)
//!
//! Sinks hold no record state; the severity alone decides color and
//! channel.

use chronicle_core::{Channel, Color, Event, EventId};
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};
use tracing::{error, info, warn};

/// Destination for individual records
pub trait EventSink: Send + Sync {
    /// Render one record
    fn emit(&self, id: &EventId, event: &Event) -> io::Result<()>;
}

/// Writes records as colored lines
pub struct ConsoleSink<W: Write + Send> {
    out: Mutex<W>,
    colored: bool,
}

impl ConsoleSink<Stdout> {
    /// Colored sink on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Colored sink on any writer
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            colored: true,
        }
    }

    /// Emit plain lines without ANSI color sequences
    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> EventSink for ConsoleSink<W> {
    fn emit(&self, _id: &EventId, event: &Event) -> io::Result<()> {
        let mut out = self.out.lock();
        if self.colored {
            writeln!(
                out,
                "{}{}{}",
                event.severity().color().ansi(),
                event,
                Color::RESET
            )?;
        } else {
            writeln!(out, "{}", event)?;
        }
        out.flush()
    }
}

/// Routes records to `tracing` by severity channel
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl EventSink for TraceSink {
    fn emit(&self, id: &EventId, event: &Event) -> io::Result<()> {
        match event.severity().channel() {
            Channel::Info => info!(
                target: "chronicle::trace",
                %id,
                name = event.name(),
                elapsed_ms = event.elapsed_ms(),
                "{}",
                event
            ),
            Channel::Warning => warn!(
                target: "chronicle::trace",
                %id,
                name = event.name(),
                elapsed_ms = event.elapsed_ms(),
                "{}",
                event
            ),
            Channel::Error => error!(
                target: "chronicle::trace",
                %id,
                name = event.name(),
                elapsed_ms = event.elapsed_ms(),
                "{}",
                event
            ),
        }
        Ok(())
    }
}
