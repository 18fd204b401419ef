//! Provider wiring options, formatter, consoles and the processor together

use super::{
    console::Console,
    error::Result,
    formatter::ConsoleFormatter,
    log_event::{EventId, ExceptionInfo},
    log_level::LogLevel,
    logger::{ConsoleLogger, EventTarget},
    metrics::ProcessorMetrics,
    options::ConsoleLoggerOptions,
    processor::{ConsoleLoggerProcessor, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT},
    scope::ScopeStack,
};
use crate::appenders::AnsiConsole;
use std::sync::Arc;
use std::time::Duration;

/// Owns one processor and hands out per-category loggers.
///
/// Dropping the provider (or calling [`shutdown`](Self::shutdown)) drains the
/// queue; loggers that outlive it keep working by writing synchronously.
///
/// Scopes come from the logging thread's own stack unless the builder was
/// given an explicit one.
pub struct ConsoleLoggerProvider {
    options: Arc<ConsoleLoggerOptions>,
    formatter: Arc<ConsoleFormatter>,
    processor: Arc<ConsoleLoggerProcessor>,
    scopes: Option<ScopeStack>,
}

impl ConsoleLoggerProvider {
    /// Provider writing to the process stdout and stderr
    pub fn new(options: ConsoleLoggerOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    pub fn builder() -> ConsoleLoggerProviderBuilder {
        ConsoleLoggerProviderBuilder::new()
    }

    /// Create a logger for `category`
    pub fn create_logger(&self, category: &str) -> ConsoleLogger {
        ConsoleLogger::new(
            category,
            self.options.min_level_for(category),
            self.options.include_scopes,
            self.options.log_to_standard_error_threshold,
            Arc::clone(&self.formatter),
            Arc::clone(&self.processor),
            self.scopes.clone(),
        )
    }

    /// Filter, snapshot and queue one event for `category`
    pub fn submit<S, F>(
        &self,
        level: LogLevel,
        category: &str,
        event_id: impl Into<EventId>,
        exception: Option<&ExceptionInfo>,
        state: &S,
        renderer: F,
    ) where
        S: ?Sized,
        F: FnOnce(&S, Option<&ExceptionInfo>) -> String,
    {
        if level == LogLevel::None || level < self.options.min_level_for(category) {
            return;
        }
        EventTarget {
            category,
            include_scopes: self.options.include_scopes,
            scopes: self.scopes.as_ref(),
            stderr_threshold: self.options.log_to_standard_error_threshold,
            formatter: &self.formatter,
            processor: &self.processor,
        }
        .emit(level, event_id, state, exception, renderer);
    }

    /// The explicit stack from the builder, or the calling thread's stack
    pub fn scopes(&self) -> ScopeStack {
        self.scopes.clone().unwrap_or_else(ScopeStack::current)
    }

    pub fn options(&self) -> &ConsoleLoggerOptions {
        &self.options
    }

    pub fn formatter(&self) -> &ConsoleFormatter {
        &self.formatter
    }

    pub fn processor(&self) -> &ConsoleLoggerProcessor {
        &self.processor
    }

    pub fn metrics(&self) -> &ProcessorMetrics {
        self.processor.metrics()
    }

    /// Drain queued events and stop the writer thread
    pub fn shutdown(&self) -> bool {
        self.processor.shutdown()
    }
}

impl Drop for ConsoleLoggerProvider {
    fn drop(&mut self) {
        self.processor.shutdown();
    }
}

/// Builder for [`ConsoleLoggerProvider`]
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
///
/// let out = MemoryConsole::new();
/// let provider = ConsoleLoggerProvider::builder()
///     .options(ConsoleLoggerOptions::new().with_format(ConsoleLoggerFormat::Systemd))
///     .consoles(out.clone(), MemoryConsole::new())
///     .build()
///     .unwrap();
///
/// provider.create_logger("App.X").info("hello");
/// provider.shutdown();
/// assert_eq!(out.lines(), vec!["<6>App.X[0] hello"]);
/// ```
pub struct ConsoleLoggerProviderBuilder {
    options: ConsoleLoggerOptions,
    consoles: Option<(Box<dyn Console>, Box<dyn Console>)>,
    capacity: usize,
    shutdown_timeout: Duration,
    scopes: Option<ScopeStack>,
}

impl ConsoleLoggerProviderBuilder {
    pub fn new() -> Self {
        Self {
            options: ConsoleLoggerOptions::default(),
            consoles: None,
            capacity: DEFAULT_QUEUE_CAPACITY,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            scopes: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: ConsoleLoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Write to these consoles instead of the process stdout/stderr
    #[must_use = "builder methods return a new value"]
    pub fn consoles<O, E>(mut self, out: O, err: E) -> Self
    where
        O: Console + 'static,
        E: Console + 'static,
    {
        self.consoles = Some((Box::new(out), Box::new(err)));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Bind every logger to one shared stack instead of per-thread stacks
    #[must_use = "builder methods return a new value"]
    pub fn scopes(mut self, scopes: ScopeStack) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Validate the options and start the writer thread
    pub fn build(self) -> Result<ConsoleLoggerProvider> {
        self.options.validate()?;
        let formatter = self.options.build_formatter()?;

        let (out, err) = self.consoles.unwrap_or_else(|| {
            (
                Box::new(AnsiConsole::stdout()) as Box<dyn Console>,
                Box::new(AnsiConsole::stderr()) as Box<dyn Console>,
            )
        });
        let processor = ConsoleLoggerProcessor::with_capacity(out, err, self.capacity)?
            .with_shutdown_timeout(self.shutdown_timeout);

        Ok(ConsoleLoggerProvider {
            options: Arc::new(self.options),
            formatter: Arc::new(formatter),
            processor: Arc::new(processor),
            scopes: self.scopes,
        })
    }
}

impl Default for ConsoleLoggerProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
