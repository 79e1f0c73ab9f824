//! The logger handle
//!
//! A [`Logger`] owns everything one event log needs: the monotonic clock,
//! the general log store and the start/stop [`Correlator`]. There is no
//! global instance. Share a logger across threads with `Arc<Logger>`;
//! create several for independent logs.

use crate::sink::{ConsoleSink, EventSink, TraceSink};
use crate::timer::Correlator;
use chronicle_core::{Clock, Error, Event, EventId, Result, Severity, StoreKind, TimerState};
use chronicle_export::{ExportHandle, ExportOptions, ExportReport, Exporter};
use chronicle_storage::EventStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Insert `event` into `store` under a freshly generated identifier
pub(crate) fn record(
    operation: &'static str,
    store: &EventStore,
    event: Arc<Event>,
) -> Result<EventId> {
    record_with_id(operation, store, EventId::new(), event)
}

/// Insert `event` into `store` under `id`, failing if `id` is taken
fn record_with_id(
    operation: &'static str,
    store: &EventStore,
    id: EventId,
    event: Arc<Event>,
) -> Result<EventId> {
    if !store.insert_arc(id, event) {
        debug!(operation, %id, store = %store.kind(), "identifier collision");
        return Err(Error::DuplicateIdentifier {
            operation,
            store: store.kind(),
            id,
        });
    }
    Ok(id)
}

/// In-process event logger
///
/// # Example
///
/// ```
/// use chronicle_engine::Logger;
/// use chronicle_core::Severity;
///
/// let logger = Logger::new();
///
/// // General events
/// let id = logger.add(Severity::Info, "boot", "ready").unwrap();
/// assert_eq!(logger.get(&id).unwrap().message(), "ready");
///
/// // Timed events
/// let timer = logger.start_event(Severity::Info, "load", "config").unwrap();
/// logger.stop_event(&timer).unwrap();
/// assert!(logger.duration_ms(&timer).is_ok());
/// ```
pub struct Logger {
    clock: Clock,
    log: EventStore,
    timers: Correlator,
    exporter: Exporter,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl Logger {
    /// Create a logger with default settings, starting its clock now
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for logger configuration
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Milliseconds since this logger was created
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    // =========================================================================
    // General log
    // =========================================================================

    /// Record an event in the general log
    ///
    /// Attached sinks see the record after it is stored. A failing sink is
    /// logged and does not fail the call; the record stays stored.
    pub fn add(
        &self,
        severity: Severity,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<EventId> {
        let event = Arc::new(Event::new(severity, name, message, self.clock.elapsed_ms()));
        let id = record("add", &self.log, Arc::clone(&event))?;
        for sink in &self.sinks {
            if let Err(e) = sink.emit(&id, &event) {
                warn!(%id, error = %e, "sink failed to emit event");
            }
        }
        Ok(id)
    }

    /// Get an event from the general log
    pub fn get(&self, id: &EventId) -> Result<Arc<Event>> {
        self.log.get(id).ok_or(Error::NotFound {
            operation: "get",
            store: StoreKind::Log,
            id: *id,
        })
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Open a timer. See [`Correlator::start_event`].
    pub fn start_event(
        &self,
        severity: Severity,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<EventId> {
        self.timers.start_event(severity, name, message)
    }

    /// Close a timer. See [`Correlator::stop_event`].
    pub fn stop_event(&self, id: &EventId) -> Result<()> {
        self.timers.stop_event(id)
    }

    /// Start record of a timer
    pub fn get_start(&self, id: &EventId) -> Result<Arc<Event>> {
        self.timers.get_start(id)
    }

    /// Stop record of a timer
    pub fn get_stop(&self, id: &EventId) -> Result<Arc<Event>> {
        self.timers.get_stop(id)
    }

    /// Where `id` stands in the timer protocol
    pub fn timer_state(&self, id: &EventId) -> TimerState {
        self.timers.state(id)
    }

    /// Milliseconds between a timer's start and stop
    pub fn duration_ms(&self, id: &EventId) -> Result<u64> {
        self.timers.duration_ms(id)
    }

    // =========================================================================
    // Stores
    // =========================================================================

    /// General log store
    pub fn log_store(&self) -> &EventStore {
        &self.log
    }

    /// Store of opened timers
    pub fn start_store(&self) -> &EventStore {
        self.timers.start_store()
    }

    /// Store of closed timers
    pub fn stop_store(&self) -> &EventStore {
        self.timers.stop_store()
    }

    // =========================================================================
    // Sinks
    // =========================================================================

    /// Render a general log event to any sink
    pub fn emit_to(&self, id: &EventId, sink: &dyn EventSink) -> Result<()> {
        self.emit_with("emit_to", id, sink)
    }

    /// Print a general log event to stdout in its severity color
    pub fn log_to_console(&self, id: &EventId) -> Result<()> {
        self.emit_with("log_to_console", id, &ConsoleSink::stdout())
    }

    /// Send a general log event through `tracing` on its severity channel
    pub fn trace_event(&self, id: &EventId) -> Result<()> {
        self.emit_with("trace_event", id, &TraceSink)
    }

    fn emit_with(&self, operation: &'static str, id: &EventId, sink: &dyn EventSink) -> Result<()> {
        let event = self.log.get(id).ok_or(Error::NotFound {
            operation,
            store: StoreKind::Log,
            id: *id,
        })?;
        sink.emit(id, &event).map_err(|source| Error::Io {
            operation,
            path: PathBuf::new(),
            source,
        })
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Exporter configured for this logger
    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    /// Render the general log into memory
    pub fn render_log(&self) -> Result<Vec<u8>> {
        self.exporter.render_log(&self.log)
    }

    /// Write the general log to any writer, returning the line count
    pub fn write_log<W: Write>(&self, writer: W) -> Result<usize> {
        self.exporter.write_log(&self.log, writer)
    }

    /// Write the general log to a file, blocking until done
    pub fn export_log(&self, path: impl AsRef<Path>) -> Result<ExportReport> {
        self.exporter.log_to_path(&self.log, path)
    }

    /// Write the general log to a file on a tokio task
    pub fn export_log_async(&self, path: impl Into<PathBuf>) -> Result<ExportHandle> {
        self.exporter.spawn_log(&self.log, path)
    }

    /// Render joined start/stop records into memory
    pub fn render_persisting(&self) -> Result<Vec<u8>> {
        self.exporter
            .render_persisting(self.start_store(), self.stop_store())
    }

    /// Write joined start/stop records to any writer, returning the line count
    pub fn write_persisting<W: Write>(&self, writer: W) -> Result<usize> {
        self.exporter
            .write_persisting(self.start_store(), self.stop_store(), writer)
    }

    /// Write joined start/stop records to a file, blocking until done
    pub fn export_persisting(&self, path: impl AsRef<Path>) -> Result<ExportReport> {
        self.exporter
            .persisting_to_path(self.start_store(), self.stop_store(), path)
    }

    /// Write joined start/stop records to a file on a tokio task
    pub fn export_persisting_async(&self, path: impl Into<PathBuf>) -> Result<ExportHandle> {
        self.exporter
            .spawn_persisting(self.start_store(), self.stop_store(), path)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("elapsed_ms", &self.clock.elapsed_ms())
            .field("events", &self.log.len())
            .field("timers", &self.timers)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Builder for logger configuration
///
/// # Example
///
/// ```
/// use chronicle_engine::{Logger, TraceSink};
/// use chronicle_export::ExportOptions;
///
/// let logger = Logger::builder()
///     .capacity(100_000)
///     .export_options(ExportOptions::new().delimiter("\t\t"))
///     .sink(TraceSink)
///     .build();
/// ```
pub struct LoggerBuilder {
    capacity: usize,
    export: ExportOptions,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl LoggerBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self {
            capacity: 0,
            export: ExportOptions::default(),
            sinks: Vec::new(),
        }
    }

    /// Pre-allocate room for this many records per store
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Options used by every export from this logger
    pub fn export_options(mut self, options: ExportOptions) -> Self {
        self.export = options;
        self
    }

    /// Echo every general log event to `sink` as it is added
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Build the logger; its clock starts now
    pub fn build(self) -> Logger {
        let clock = Clock::start();
        Logger {
            clock,
            log: EventStore::with_capacity(StoreKind::Log, self.capacity),
            timers: Correlator::new(clock, self.capacity),
            exporter: Exporter::new(self.export),
            sinks: self.sinks,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
