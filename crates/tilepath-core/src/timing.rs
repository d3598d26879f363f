//! Wall-clock timing for search operations.

use std::time::{Duration, Instant};

/// A started timer. Stopping it returns the elapsed time and logs it at
/// `trace` level under the given label.
#[derive(Debug)]
pub struct Stopwatch {
    label: &'static str,
    start: Instant,
}

impl Stopwatch {
    /// Create and start a new stopwatch.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Stop the stopwatch and return the elapsed time.
    pub fn stop(self) -> Duration {
        let elapsed = self.start.elapsed();
        log::trace!("{} took {:?}", self.label, elapsed);
        elapsed
    }
}
