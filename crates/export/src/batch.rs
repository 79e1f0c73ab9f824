//! Validated export batches
//!
//! A batch is everything an export needs, captured from the stores up
//! front. Building one takes the store locks only long enough to copy
//! record pointers; rendering and I/O then run without touching the
//! stores, which is what lets the background export write off-thread.

use crate::format::{format_log_line, format_persisting_line, ExportOptions};
use chronicle_core::{Error, Event, EventId, Result};
use chronicle_storage::{EventStore, StoreSnapshot};
use std::sync::Arc;
use tracing::debug;

/// A start record joined with its stop record
#[derive(Debug, Clone)]
pub struct TimerPair {
    /// Shared identifier of both records
    pub id: EventId,
    /// Record written when the timer was opened
    pub start: Arc<Event>,
    /// Record written when the timer was closed
    pub stop: Arc<Event>,
}

impl TimerPair {
    /// Milliseconds between start and stop
    pub fn duration_ms(&self) -> u64 {
        self.stop.elapsed_ms().saturating_sub(self.start.elapsed_ms())
    }
}

/// Join every start record with its stop record
///
/// Fails with `EmptyStore` if no timer was ever started and with
/// `MissingStopRecord` for the first start (in insertion order) whose stop
/// has not been recorded.
pub fn join_timers(
    operation: &'static str,
    start: &EventStore,
    stop: &EventStore,
) -> Result<Vec<TimerPair>> {
    let starts = start.snapshot();
    if starts.is_empty() {
        return Err(Error::EmptyStore {
            operation,
            store: starts.kind(),
        });
    }

    let mut pairs = Vec::with_capacity(starts.len());
    for (id, start_event) in starts {
        let stop_event = stop
            .get(&id)
            .ok_or_else(|| Error::MissingStopRecord { operation, id })?;
        pairs.push(TimerPair {
            id,
            start: start_event,
            stop: stop_event,
        });
    }
    Ok(pairs)
}

/// Records captured for one export
#[derive(Debug, Clone)]
pub enum Batch {
    /// General log records
    Log(StoreSnapshot),
    /// Joined start/stop records
    Persisting(Vec<TimerPair>),
}

impl Batch {
    /// Snapshot the log store for export
    pub fn log(operation: &'static str, store: &EventStore) -> Result<Self> {
        let snapshot = store.snapshot();
        if snapshot.is_empty() {
            return Err(Error::EmptyStore {
                operation,
                store: snapshot.kind(),
            });
        }
        debug!(operation, records = snapshot.len(), "captured log snapshot");
        Ok(Batch::Log(snapshot))
    }

    /// Snapshot and join the start and stop stores for export
    pub fn persisting(
        operation: &'static str,
        start: &EventStore,
        stop: &EventStore,
    ) -> Result<Self> {
        let pairs = join_timers(operation, start, stop)?;
        debug!(operation, records = pairs.len(), "captured timer snapshot");
        Ok(Batch::Persisting(pairs))
    }

    /// Number of lines the batch renders to
    pub fn len(&self) -> usize {
        match self {
            Batch::Log(snapshot) => snapshot.len(),
            Batch::Persisting(pairs) => pairs.len(),
        }
    }

    /// Check if the batch renders no lines
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lines of the export, without terminators
    pub fn lines(&self, options: &ExportOptions) -> Vec<String> {
        match self {
            Batch::Log(snapshot) => snapshot
                .iter()
                .map(|(id, event)| format_log_line(id, event, options))
                .collect(),
            Batch::Persisting(pairs) => pairs
                .iter()
                .map(|pair| format_persisting_line(&pair.id, &pair.start, &pair.stop, options))
                .collect(),
        }
    }

    /// Full file contents: every line followed by `\n`
    pub fn render(&self, options: &ExportOptions) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * 128);
        for line in self.lines(options) {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        out
    }
}
