//! Processor metrics for observability
//!
//! Failures inside the writer are swallowed so logging never raises into
//! application code; these counters are where they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by the event processor
///
/// # Example
///
/// ```
/// use rust_console_logger::ProcessorMetrics;
///
/// let metrics = ProcessorMetrics::new();
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.events_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct ProcessorMetrics {
    /// Events formatted and flushed without error
    events_written: AtomicU64,

    /// Events whose format/write/flush failed or panicked
    write_failures: AtomicU64,

    /// Events written on the caller's thread because the queue was complete
    sync_fallbacks: AtomicU64,

    /// Submissions that found the queue full and had to wait
    backpressure_events: AtomicU64,
}

impl ProcessorMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            events_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            sync_fallbacks: AtomicU64::new(0),
            backpressure_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn events_written(&self) -> u64 {
        self.events_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sync_fallbacks(&self) -> u64 {
        self.sync_fallbacks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backpressure_events(&self) -> u64 {
        self.backpressure_events.load(Ordering::Relaxed)
    }

    /// Record a successfully written event
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.events_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed or panicked write
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a synchronous fallback write
    #[inline]
    pub fn record_sync_fallback(&self) -> u64 {
        self.sync_fallbacks.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a submission that waited for queue capacity
    #[inline]
    pub fn record_backpressure(&self) -> u64 {
        self.backpressure_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.events_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.events_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.sync_fallbacks.store(0, Ordering::Relaxed);
        self.backpressure_events.store(0, Ordering::Relaxed);
    }
}

impl Default for ProcessorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ProcessorMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            events_written: AtomicU64::new(self.events_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            sync_fallbacks: AtomicU64::new(self.sync_fallbacks()),
            backpressure_events: AtomicU64::new(self.backpressure_events()),
        }
    }
}
