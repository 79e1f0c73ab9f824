//! Background export on the tokio runtime

use crate::batch::Batch;
use crate::exporter::ExportReport;
use crate::format::ExportOptions;
use chronicle_core::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A running background export
///
/// Await [`ExportHandle::wait`] for the outcome. Dropping the handle
/// detaches the task; the file is still written.
#[derive(Debug)]
pub struct ExportHandle {
    operation: &'static str,
    path: PathBuf,
    task: JoinHandle<Result<ExportReport>>,
}

impl ExportHandle {
    /// Destination file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the task has finished (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the export
    ///
    /// A cancelled export may leave a partially written file behind.
    /// [`ExportHandle::wait`] then reports `ExportTaskFailed`.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the export to finish
    pub async fn wait(self) -> Result<ExportReport> {
        let operation = self.operation;
        match self.task.await {
            Ok(result) => result,
            Err(join_err) => {
                let reason = if join_err.is_cancelled() {
                    "task was cancelled".to_string()
                } else {
                    format!("task panicked: {}", join_err)
                };
                warn!(
                    operation,
                    path = %self.path.display(),
                    %reason,
                    "background export did not finish"
                );
                Err(Error::ExportTaskFailed { operation, reason })
            }
        }
    }
}

/// Spawn the render-and-write phase of an export onto the current runtime
pub(crate) fn spawn(
    operation: &'static str,
    batch: Batch,
    options: ExportOptions,
    path: PathBuf,
) -> Result<ExportHandle> {
    let runtime = Handle::try_current().map_err(|_| Error::NoRuntime { operation })?;

    let task_path = path.clone();
    let task = runtime.spawn(async move {
        let bytes = batch.render(&options);
        tokio::fs::write(&task_path, &bytes)
            .await
            .map_err(|source| Error::Io {
                operation,
                path: task_path.clone(),
                source,
            })?;

        let report = ExportReport {
            path: task_path,
            lines: batch.len(),
            bytes: bytes.len(),
        };
        info!(
            operation,
            path = %report.path.display(),
            lines = report.lines,
            bytes = report.bytes,
            "background export written"
        );
        Ok(report)
    });

    Ok(ExportHandle {
        operation,
        path,
        task,
    })
}
