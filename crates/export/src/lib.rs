//! Export for Chronicle event stores
//!
//! This crate turns store snapshots into the tab-delimited line format
//! described in [`format`], and writes it to a writer, a byte buffer, or a
//! file. File exports come in two flavors:
//!
//! - Blocking: [`Exporter::log_to_path`], [`Exporter::persisting_to_path`]
//! - Background: [`Exporter::spawn_log`], [`Exporter::spawn_persisting`],
//!   which snapshot on the calling thread and write on a tokio task
//!
//! Both flavors render the same bytes for the same snapshot.
//!
//! ## Examples
//!
//! ```
//! use chronicle_core::{Event, EventId, Severity, StoreKind};
//! use chronicle_export::Exporter;
//! use chronicle_storage::EventStore;
//!
//! let start = EventStore::new(StoreKind::Start);
//! let stop = EventStore::new(StoreKind::Stop);
//! let id = EventId::new();
//! start.insert(id, Event::new(Severity::Info, "query", "select", 3));
//! stop.insert(id, Event::new(Severity::Info, "query", "select", 8));
//!
//! let bytes = Exporter::default().render_persisting(&start, &stop).unwrap();
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.trim_end().ends_with("\t3\t8"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod background;
pub mod batch;
pub mod exporter;
pub mod format;

pub use background::ExportHandle;
pub use batch::{join_timers, Batch, TimerPair};
pub use exporter::{ExportReport, Exporter, EXPORT_LOG, EXPORT_PERSISTING};
pub use format::{
    escape_field, format_log_line, format_persisting_line, ExportOptions, DEFAULT_DELIMITER,
};
