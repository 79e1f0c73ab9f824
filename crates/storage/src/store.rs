//! Concurrent event store
//!
//! One `EventStore` backs each of the logger's three logs. The store is a
//! single lock domain: inserts take the write lock, point lookups and
//! snapshots take the read lock. Different stores never contend.
//!
//! # Design
//!
//! - RwLock: readers share, an insert excludes readers for one push
//! - FxHashMap: O(1) id → position lookup, fast non-crypto hash
//! - Vec: records kept in insertion order so exports are deterministic
//!
//! Records are shared as `Arc<Event>`, so a lookup or snapshot copies a
//! pointer, never an event body.

use chronicle_core::{Event, EventId, StoreKind};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Lock-protected contents of one store
#[derive(Debug, Default)]
struct Entries {
    /// Records in insertion order
    records: Vec<(EventId, Arc<Event>)>,
    /// Position of each id within `records`
    index: FxHashMap<EventId, usize>,
}

impl Entries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

/// Identifier-keyed store of immutable events
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): shared read lock, O(1)
/// - insert(): exclusive write lock, O(1) amortized
/// - snapshot(): shared read lock for one O(n) pointer copy
///
/// # Example
///
/// ```
/// use chronicle_core::{Event, EventId, Severity, StoreKind};
/// use chronicle_storage::EventStore;
///
/// let store = EventStore::new(StoreKind::Log);
/// let id = EventId::new();
/// assert!(store.insert(id, Event::new(Severity::Info, "boot", "ready", 0)));
/// assert_eq!(store.get(&id).unwrap().name(), "boot");
/// ```
pub struct EventStore {
    kind: StoreKind,
    entries: RwLock<Entries>,
}

impl EventStore {
    /// Create an empty store
    pub fn new(kind: StoreKind) -> Self {
        Self {
            kind,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Create an empty store with room for `capacity` records
    pub fn with_capacity(kind: StoreKind, capacity: usize) -> Self {
        Self {
            kind,
            entries: RwLock::new(Entries::with_capacity(capacity)),
        }
    }

    /// Which log this store backs
    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    /// Insert a record under a new id
    ///
    /// Returns `false` and leaves the store untouched if `id` is already
    /// present. The check and the insert happen under one write lock, so
    /// of two racing inserts for the same id exactly one wins.
    pub fn insert(&self, id: EventId, event: Event) -> bool {
        self.insert_arc(id, Arc::new(event))
    }

    /// Insert an already shared record
    pub fn insert_arc(&self, id: EventId, event: Arc<Event>) -> bool {
        let mut entries = self.entries.write();
        if entries.index.contains_key(&id) {
            return false;
        }
        let position = entries.records.len();
        entries.records.push((id, event));
        entries.index.insert(id, position);
        true
    }

    /// Get a record by id
    #[inline]
    pub fn get(&self, id: &EventId) -> Option<Arc<Event>> {
        let entries = self.entries.read();
        entries
            .index
            .get(id)
            .map(|&position| Arc::clone(&entries.records[position].1))
    }

    /// Check if an id exists
    #[inline]
    pub fn contains(&self, id: &EventId) -> bool {
        self.entries.read().index.contains_key(id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.read().records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.read().records.is_empty()
    }

    /// Lock-consistent copy of the store contents, in insertion order
    ///
    /// Inserts that race with the snapshot are either fully included or
    /// fully excluded.
    pub fn snapshot(&self) -> StoreSnapshot {
        let entries = self.entries.read();
        StoreSnapshot {
            kind: self.kind,
            records: entries.records.clone(),
        }
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("kind", &self.kind)
            .field("len", &self.len())
            .finish()
    }
}

/// Point-in-time copy of one store
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    kind: StoreKind,
    records: Vec<(EventId, Arc<Event>)>,
}

impl StoreSnapshot {
    /// Which log the snapshot was taken from
    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    /// Number of records captured
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the snapshot captured no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&EventId, &Arc<Event>)> {
        self.records.iter().map(|(id, event)| (id, event))
    }
}

impl IntoIterator for StoreSnapshot {
    type Item = (EventId, Arc<Event>);
    type IntoIter = std::vec::IntoIter<(EventId, Arc<Event>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
