//! Error types for logger operations
//!
//! Every failure a caller can observe is a variant of [`Error`]. Variants
//! carry the operation that failed and, where one exists, the identifier
//! involved, so a message can be matched back to the triggering call.
//!
//! ## Error Kinds
//!
//! | Kind | Description |
//! |------|-------------|
//! | NotFound | Identifier absent from the store searched |
//! | AlreadyStopped | Timer stopped a second time |
//! | DuplicateIdentifier | Freshly generated identifier already present |
//! | EmptyStore | Export requested on a store with no records |
//! | MissingStopRecord | Timer still open when its stop record was required |
//! | Io | Export file could not be written |
//! | ExportTaskFailed | Background export cancelled or panicked |
//! | NoRuntime | Background export requested outside a tokio runtime |
//! | InvalidDelimiter | Export delimiter could collide with escaped field text |

use crate::types::{EventId, StoreKind};
use std::path::PathBuf;
use thiserror::Error;

/// All logger errors
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier not present in the store searched
    #[error("{operation}: identifier {id} was not present in the {store}")]
    NotFound {
        /// Operation that failed
        operation: &'static str,
        /// Store that was searched
        store: StoreKind,
        /// Identifier looked up
        id: EventId,
    },

    /// Stop requested for a timer that has already been stopped
    #[error("{operation}: stop event for identifier {id} already recorded")]
    AlreadyStopped {
        /// Operation that failed
        operation: &'static str,
        /// Timer identifier
        id: EventId,
    },

    /// A newly generated identifier collided with an existing record
    #[error("{operation}: identifier {id} is already present in the {store}")]
    DuplicateIdentifier {
        /// Operation that failed
        operation: &'static str,
        /// Store the insert targeted
        store: StoreKind,
        /// Colliding identifier
        id: EventId,
    },

    /// Export requested on a store with no records
    #[error("{operation}: the {store} has no events, add events before exporting")]
    EmptyStore {
        /// Operation that failed
        operation: &'static str,
        /// Store that was empty
        store: StoreKind,
    },

    /// A started timer has no stop record
    #[error("{operation}: start event {id} has no matching stop event")]
    MissingStopRecord {
        /// Operation that failed
        operation: &'static str,
        /// Timer identifier
        id: EventId,
    },

    /// Writing an export failed
    #[error("{operation}: I/O error writing {}: {source}", .path.display())]
    Io {
        /// Operation that failed
        operation: &'static str,
        /// Destination path (empty for writer targets)
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Background export did not run to completion
    #[error("{operation}: background export failed: {reason}")]
    ExportTaskFailed {
        /// Operation that failed
        operation: &'static str,
        /// Cancellation or panic description
        reason: String,
    },

    /// Background export requested without a tokio runtime
    #[error("{operation}: no tokio runtime available to run the export")]
    NoRuntime {
        /// Operation that failed
        operation: &'static str,
    },

    /// Export delimiter that escaped fields could still contain
    #[error("{operation}: invalid export delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter {
        /// Operation that failed
        operation: &'static str,
        /// Delimiter as configured
        delimiter: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Fieldless discriminant of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::NotFound`]
    NotFound,
    /// See [`Error::AlreadyStopped`]
    AlreadyStopped,
    /// See [`Error::DuplicateIdentifier`]
    DuplicateIdentifier,
    /// See [`Error::EmptyStore`]
    EmptyStore,
    /// See [`Error::MissingStopRecord`]
    MissingStopRecord,
    /// See [`Error::Io`]
    Io,
    /// See [`Error::ExportTaskFailed`]
    ExportTaskFailed,
    /// See [`Error::NoRuntime`]
    NoRuntime,
    /// See [`Error::InvalidDelimiter`]
    InvalidDelimiter,
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error kind, for branching without matching on fields
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::AlreadyStopped { .. } => ErrorKind::AlreadyStopped,
            Error::DuplicateIdentifier { .. } => ErrorKind::DuplicateIdentifier,
            Error::EmptyStore { .. } => ErrorKind::EmptyStore,
            Error::MissingStopRecord { .. } => ErrorKind::MissingStopRecord,
            Error::Io { .. } => ErrorKind::Io,
            Error::ExportTaskFailed { .. } => ErrorKind::ExportTaskFailed,
            Error::NoRuntime { .. } => ErrorKind::NoRuntime,
            Error::InvalidDelimiter { .. } => ErrorKind::InvalidDelimiter,
        }
    }

    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            Error::NotFound { operation, .. }
            | Error::AlreadyStopped { operation, .. }
            | Error::DuplicateIdentifier { operation, .. }
            | Error::EmptyStore { operation, .. }
            | Error::MissingStopRecord { operation, .. }
            | Error::Io { operation, .. }
            | Error::ExportTaskFailed { operation, .. }
            | Error::NoRuntime { operation }
            | Error::InvalidDelimiter { operation, .. } => operation,
        }
    }

    /// Identifier involved, if the failure concerns one record
    pub fn id(&self) -> Option<EventId> {
        match self {
            Error::NotFound { id, .. }
            | Error::AlreadyStopped { id, .. }
            | Error::DuplicateIdentifier { id, .. }
            | Error::MissingStopRecord { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is an already-stopped error.
    pub fn is_already_stopped(&self) -> bool {
        matches!(self, Error::AlreadyStopped { .. })
    }

    /// Check if this is an empty-store error.
    pub fn is_empty_store(&self) -> bool {
        matches!(self, Error::EmptyStore { .. })
    }

    /// Check if this is a missing-stop-record error.
    pub fn is_missing_stop(&self) -> bool {
        matches!(self, Error::MissingStopRecord { .. })
    }
}
