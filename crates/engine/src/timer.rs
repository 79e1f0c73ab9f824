//! Start/stop correlation
//!
//! A timer is a pair of records sharing one identifier: a start record in
//! the start store and, once closed, a stop record in the stop store.
//!
//! ## State Machine
//!
//! ```text
//! Unknown --start_event--> Started --stop_event--> Stopped
//!    |                                                 |
//!    +--stop_event: NotFound        stop_event: AlreadyStopped
//! ```
//!
//! Transitions only move forward. A new `start_event` always allocates a
//! new identifier, so a `Stopped` timer can never be reopened.

use crate::logger::record;
use chronicle_core::{Clock, Error, Event, EventId, Result, Severity, StoreKind, TimerState};
use chronicle_storage::EventStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the start and stop stores and enforces the timer protocol
pub struct Correlator {
    clock: Clock,
    start: EventStore,
    stop: EventStore,
}

impl Correlator {
    /// Create an empty correlator reading elapsed time from `clock`
    pub fn new(clock: Clock, capacity: usize) -> Self {
        Self {
            clock,
            start: EventStore::with_capacity(StoreKind::Start, capacity),
            stop: EventStore::with_capacity(StoreKind::Stop, capacity),
        }
    }

    /// Open a timer
    pub fn start_event(
        &self,
        severity: Severity,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<EventId> {
        let event = Event::new(severity, name, message, self.clock.elapsed_ms());
        let id = record("start_event", &self.start, Arc::new(event))?;
        debug!(%id, "timer started");
        Ok(id)
    }

    /// Close a timer
    ///
    /// The stop record copies severity, name and message from the start
    /// record and carries its own timestamp and elapsed time.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `id` was never started
    /// - `AlreadyStopped` if `id` was already stopped
    pub fn stop_event(&self, id: &EventId) -> Result<()> {
        const OP: &str = "stop_event";

        let start = self.start.get(id).ok_or_else(|| {
            warn!(%id, "stop requested for an unknown timer");
            Error::NotFound {
                operation: OP,
                store: StoreKind::Start,
                id: *id,
            }
        })?;

        // Check-and-insert happens under the stop store's write lock, so
        // racing stops of one id produce exactly one success.
        if !self.stop.insert(*id, start.restamp(self.clock.elapsed_ms())) {
            warn!(%id, "stop requested for an already stopped timer");
            return Err(Error::AlreadyStopped {
                operation: OP,
                id: *id,
            });
        }
        debug!(%id, "timer stopped");
        Ok(())
    }

    /// Start record of a timer
    pub fn get_start(&self, id: &EventId) -> Result<Arc<Event>> {
        self.start.get(id).ok_or(Error::NotFound {
            operation: "get_start",
            store: StoreKind::Start,
            id: *id,
        })
    }

    /// Stop record of a timer
    pub fn get_stop(&self, id: &EventId) -> Result<Arc<Event>> {
        self.stop.get(id).ok_or(Error::NotFound {
            operation: "get_stop",
            store: StoreKind::Stop,
            id: *id,
        })
    }

    /// Where `id` stands in the timer protocol
    pub fn state(&self, id: &EventId) -> TimerState {
        // A stop record implies a start record.
        if self.stop.contains(id) {
            TimerState::Stopped
        } else if self.start.contains(id) {
            TimerState::Started
        } else {
            TimerState::Unknown
        }
    }

    /// Milliseconds between a timer's start and stop
    ///
    /// # Errors
    ///
    /// - `NotFound` if `id` was never started
    /// - `MissingStopRecord` if `id` is still running
    pub fn duration_ms(&self, id: &EventId) -> Result<u64> {
        const OP: &str = "duration_ms";

        let start = self.start.get(id).ok_or(Error::NotFound {
            operation: OP,
            store: StoreKind::Start,
            id: *id,
        })?;
        let stop = self
            .stop
            .get(id)
            .ok_or(Error::MissingStopRecord { operation: OP, id: *id })?;
        Ok(stop.elapsed_ms().saturating_sub(start.elapsed_ms()))
    }

    /// Store of opened timers
    pub fn start_store(&self) -> &EventStore {
        &self.start
    }

    /// Store of closed timers
    pub fn stop_store(&self) -> &EventStore {
        &self.stop
    }
}

impl std::fmt::Debug for Correlator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Correlator")
            .field("started", &self.start.len())
            .field("stopped", &self.stop.len())
            .finish()
    }
}
