//! Synchronous and background export entry points

use crate::background::{self, ExportHandle};
use crate::batch::Batch;
use crate::format::ExportOptions;
use chronicle_core::{Error, Result};
use chronicle_storage::EventStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Operation name reported by general log exports
pub const EXPORT_LOG: &str = "export_log";
/// Operation name reported by start/stop exports
pub const EXPORT_PERSISTING: &str = "export_persisting";

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Destination file (empty for writer targets)
    pub path: PathBuf,
    /// Lines written
    pub lines: usize,
    /// Bytes written
    pub bytes: usize,
}

/// Serializes logger stores to the tab-delimited line format
///
/// Every method snapshots the store(s) under their locks first, so records
/// added while an export runs are either fully in the output or absent.
///
/// # Example
///
/// ```
/// use chronicle_core::{Event, EventId, Severity, StoreKind};
/// use chronicle_export::Exporter;
/// use chronicle_storage::EventStore;
///
/// let store = EventStore::new(StoreKind::Log);
/// store.insert(EventId::new(), Event::new(Severity::Info, "A", "hello", 0));
///
/// let bytes = Exporter::default().render_log(&store).unwrap();
/// assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with the given options
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Options in use
    ///
    /// They are validated by every export call, so an unusable delimiter
    /// fails with `InvalidDelimiter` before any store is read.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    // =========================================================================
    // General log
    // =========================================================================

    /// Render the log store into memory
    pub fn render_log(&self, store: &EventStore) -> Result<Vec<u8>> {
        self.options.validate(EXPORT_LOG)?;
        Ok(Batch::log(EXPORT_LOG, store)?.render(&self.options))
    }

    /// Write the log store to any writer, returning the line count
    pub fn write_log<W: Write>(&self, store: &EventStore, writer: W) -> Result<usize> {
        self.options.validate(EXPORT_LOG)?;
        let batch = Batch::log(EXPORT_LOG, store)?;
        self.write_batch(EXPORT_LOG, &batch, writer)
    }

    /// Write the log store to a file, blocking until the write completes
    pub fn log_to_path(
        &self,
        store: &EventStore,
        path: impl AsRef<Path>,
    ) -> Result<ExportReport> {
        self.options.validate(EXPORT_LOG)?;
        let batch = Batch::log(EXPORT_LOG, store)?;
        self.write_file(EXPORT_LOG, &batch, path.as_ref())
    }

    /// Write the log store to a file on a tokio task
    ///
    /// The snapshot is taken before this returns; formatting and file I/O
    /// happen on the runtime. Must be called from within a tokio runtime.
    pub fn spawn_log(
        &self,
        store: &EventStore,
        path: impl Into<PathBuf>,
    ) -> Result<ExportHandle> {
        self.options.validate(EXPORT_LOG)?;
        let batch = Batch::log(EXPORT_LOG, store)?;
        background::spawn(EXPORT_LOG, batch, self.options.clone(), path.into())
    }

    // =========================================================================
    // Start/stop pairs
    // =========================================================================

    /// Render joined start/stop records into memory
    pub fn render_persisting(&self, start: &EventStore, stop: &EventStore) -> Result<Vec<u8>> {
        self.options.validate(EXPORT_PERSISTING)?;
        Ok(Batch::persisting(EXPORT_PERSISTING, start, stop)?.render(&self.options))
    }

    /// Write joined start/stop records to any writer, returning the line count
    pub fn write_persisting<W: Write>(
        &self,
        start: &EventStore,
        stop: &EventStore,
        writer: W,
    ) -> Result<usize> {
        self.options.validate(EXPORT_PERSISTING)?;
        let batch = Batch::persisting(EXPORT_PERSISTING, start, stop)?;
        self.write_batch(EXPORT_PERSISTING, &batch, writer)
    }

    /// Write joined start/stop records to a file, blocking until done
    pub fn persisting_to_path(
        &self,
        start: &EventStore,
        stop: &EventStore,
        path: impl AsRef<Path>,
    ) -> Result<ExportReport> {
        self.options.validate(EXPORT_PERSISTING)?;
        let batch = Batch::persisting(EXPORT_PERSISTING, start, stop)?;
        self.write_file(EXPORT_PERSISTING, &batch, path.as_ref())
    }

    /// Write joined start/stop records to a file on a tokio task
    pub fn spawn_persisting(
        &self,
        start: &EventStore,
        stop: &EventStore,
        path: impl Into<PathBuf>,
    ) -> Result<ExportHandle> {
        self.options.validate(EXPORT_PERSISTING)?;
        let batch = Batch::persisting(EXPORT_PERSISTING, start, stop)?;
        background::spawn(EXPORT_PERSISTING, batch, self.options.clone(), path.into())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn write_batch<W: Write>(
        &self,
        operation: &'static str,
        batch: &Batch,
        mut writer: W,
    ) -> Result<usize> {
        let bytes = batch.render(&self.options);
        writer
            .write_all(&bytes)
            .and_then(|_| writer.flush())
            .map_err(|source| Error::Io {
                operation,
                path: PathBuf::new(),
                source,
            })?;
        Ok(batch.len())
    }

    fn write_file(
        &self,
        operation: &'static str,
        batch: &Batch,
        path: &Path,
    ) -> Result<ExportReport> {
        let bytes = batch.render(&self.options);
        std::fs::write(path, &bytes).map_err(|source| Error::Io {
            operation,
            path: path.to_path_buf(),
            source,
        })?;

        let report = ExportReport {
            path: path.to_path_buf(),
            lines: batch.len(),
            bytes: bytes.len(),
        };
        info!(
            operation,
            path = %report.path.display(),
            lines = report.lines,
            bytes = report.bytes,
            "export written"
        );
        Ok(report)
    }
}
