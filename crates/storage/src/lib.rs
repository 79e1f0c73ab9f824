//! Storage layer for Chronicle
//!
//! This crate implements the identifier-keyed event store:
//! - EventStore: RwLock-guarded map with insertion-ordered records
//! - StoreSnapshot: lock-consistent copy used by exporters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{EventStore, StoreSnapshot};
