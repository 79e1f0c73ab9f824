//! Logger Integration Tests
//!
//! End-to-end tests through the `chronicle` facade: general log, timers,
//! export files and concurrent writers.

mod concurrency;
mod export;
mod log_events;
mod timers;

use chronicle::prelude::*;
use std::path::Path;

/// Logger with default options
pub fn logger() -> Logger {
    Logger::new()
}

/// Read an export file as lines
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("export file readable")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split one tab-delimited line into fields
pub fn fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}
