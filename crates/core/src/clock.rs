//! Monotonic clock shared by every record of one logger

use std::time::{Duration, Instant};

/// Milliseconds-since-start clock
///
/// Captures an [`Instant`] at construction and never resets, so
/// [`Clock::elapsed_ms`] is non-decreasing for the lifetime of the clock.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Start a clock at the current instant
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Time elapsed since the clock started
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Whole milliseconds elapsed since the clock started
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}
