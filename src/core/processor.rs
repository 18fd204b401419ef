//! Background event processor
//!
//! Producers push `(event, formatter)` pairs into a bounded channel; one named
//! writer thread drains it in order and renders each event to the console
//! selected by the event. When the queue is full producers wait (backpressure);
//! once the queue is complete they write synchronously on their own thread.

use super::{
    console::Console,
    error::{LoggerError, Result},
    formatter::ConsoleFormatter,
    log_event::ConsoleLogEvent,
    metrics::ProcessorMetrics,
};
use crossbeam_channel::{bounded, Receiver, SendError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Maximum number of events buffered between producers and the writer
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// How long shutdown waits for the writer to drain.
///
/// Bounded because the console may be blocked, e.g. by a user holding a
/// terminal selection.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(1500);

pub const WORKER_THREAD_NAME: &str = "Console logger queue processing thread";

type QueuedMessage = (ConsoleLogEvent, Arc<ConsoleFormatter>);

struct Consoles {
    out: Box<dyn Console>,
    err: Box<dyn Console>,
}

/// State reachable from both producers and the writer thread
struct Shared {
    /// Locked only by the writer thread while the queue is open; the
    /// synchronous fallback is the only other writer.
    consoles: Mutex<Consoles>,
    metrics: ProcessorMetrics,
    completed: AtomicBool,
    /// Panics the writer loop outside `write_message` on its next event
    #[cfg(test)]
    fail_loop: AtomicBool,
}

impl Shared {
    fn write_message(&self, event: &ConsoleLogEvent, formatter: &ConsoleFormatter) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.try_write_message(event, formatter)
        }));

        match outcome {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(_)) | Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    fn try_write_message(&self, event: &ConsoleLogEvent, formatter: &ConsoleFormatter) -> Result<()> {
        let mut guard = self.consoles.lock();
        let consoles = &mut *guard;
        let console: &mut dyn Console = if event.write_to_stderr {
            consoles.err.as_mut()
        } else {
            consoles.out.as_mut()
        };

        formatter.format(event, console)?;
        console.flush()
    }
}

pub struct ConsoleLoggerProcessor {
    shared: Arc<Shared>,
    sender: RwLock<Option<Sender<QueuedMessage>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    drained: AtomicBool,
    capacity: usize,
    shutdown_timeout: Duration,
}

impl ConsoleLoggerProcessor {
    /// Start a processor writing to `out` and `err` with the default capacity
    pub fn new<O, E>(out: O, err: E) -> Result<Self>
    where
        O: Console + 'static,
        E: Console + 'static,
    {
        Self::with_capacity(out, err, DEFAULT_QUEUE_CAPACITY)
    }

    /// Start a processor with a custom queue capacity
    pub fn with_capacity<O, E>(out: O, err: E, capacity: usize) -> Result<Self>
    where
        O: Console + 'static,
        E: Console + 'static,
    {
        if capacity == 0 {
            return Err(LoggerError::config(
                "ConsoleLoggerProcessor",
                "queue capacity must be at least 1",
            ));
        }

        let shared = Arc::new(Shared {
            consoles: Mutex::new(Consoles {
                out: Box::new(out),
                err: Box::new(err),
            }),
            metrics: ProcessorMetrics::new(),
            completed: AtomicBool::new(false),
            #[cfg(test)]
            fail_loop: AtomicBool::new(false),
        });

        let (sender, receiver) = bounded(capacity);
        let handle = Self::spawn_worker(receiver, Arc::clone(&shared))?;

        Ok(Self {
            shared,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(handle)),
            drained: AtomicBool::new(false),
            capacity,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        })
    }

    /// Override the timeout used by `shutdown` and on drop
    #[must_use]
    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    fn spawn_worker(
        receiver: Receiver<QueuedMessage>,
        shared: Arc<Shared>,
    ) -> Result<thread::JoinHandle<()>> {
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    for (event, formatter) in receiver.iter() {
                        #[cfg(test)]
                        if shared.fail_loop.load(Ordering::Acquire) {
                            panic!("writer loop fault");
                        }
                        shared.write_message(&event, &formatter);
                    }
                }));

                // write_message contains its own panics, so this only fires
                // for a fault in the loop itself.
                if let Err(panic_info) = result {
                    // Poison the queue: later submissions write synchronously.
                    shared.completed.store(true, Ordering::Release);
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Console writer thread stopped: {}. \
                         Falling back to synchronous writes.",
                        panic_msg
                    );
                }
            })?;
        Ok(handle)
    }

    /// Queue an event for the writer thread.
    ///
    /// Blocks while the queue is full. If the queue is already complete the
    /// event is written on the calling thread instead. Never fails: write
    /// errors are only visible through [`metrics`](Self::metrics).
    pub fn enqueue(&self, event: ConsoleLogEvent, formatter: &Arc<ConsoleFormatter>) {
        let mut message = (event, Arc::clone(formatter));

        if !self.shared.completed.load(Ordering::Acquire) {
            let sender = self.sender.read().clone();
            if let Some(sender) = sender {
                message = match sender.try_send(message) {
                    Ok(()) => return,
                    Err(TrySendError::Full(message)) => {
                        self.shared.metrics.record_backpressure();
                        match sender.send(message) {
                            Ok(()) => return,
                            Err(SendError(message)) => message,
                        }
                    }
                    Err(TrySendError::Disconnected(message)) => message,
                };
            }
        }

        self.shared.metrics.record_sync_fallback();
        let (event, formatter) = message;
        self.shared.write_message(&event, &formatter);
    }

    /// Format `event` to its console and flush, containing any failure
    pub fn write_message(&self, event: &ConsoleLogEvent, formatter: &ConsoleFormatter) {
        self.shared.write_message(event, formatter);
    }

    /// Stop accepting queued events and wait for the writer to drain.
    ///
    /// Returns `true` if every queued event was processed within the
    /// timeout. Calling it again has no further effect.
    pub fn shutdown(&self) -> bool {
        self.shutdown_with_timeout(self.shutdown_timeout)
    }

    pub fn shutdown_with_timeout(&self, timeout: Duration) -> bool {
        self.shared.completed.store(true, Ordering::Release);
        // Dropping the last sender lets the writer finish once the queue is empty
        drop(self.sender.write().take());

        let Some(handle) = self.worker.lock().take() else {
            return self.drained.load(Ordering::Acquire);
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                let joined = handle.join().is_ok();
                self.drained.store(joined, Ordering::Release);
                return joined;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Console writer thread did not drain within {:?}. \
                     Some logs may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }

    /// Whether the queue has stopped accepting events
    pub fn is_completed(&self) -> bool {
        self.shared.completed.load(Ordering::Acquire)
    }

    /// Number of events waiting for the writer
    pub fn queued(&self) -> usize {
        self.sender.read().as_ref().map_or(0, Sender::len)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn metrics(&self) -> &ProcessorMetrics {
        &self.shared.metrics
    }
}

impl Drop for ConsoleLoggerProcessor {
    fn drop(&mut self) {
        self.shutdown_with_timeout(self.shutdown_timeout);
    }
}
