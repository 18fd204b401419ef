//! Per-category logger: builds events on the caller's thread and submits them

use super::{
    formatter::ConsoleFormatter,
    log_event::{ConsoleLogEvent, EventId, ExceptionInfo},
    log_level::LogLevel,
    processor::ConsoleLoggerProcessor,
    scope::{ScopeGuard, ScopeStack},
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Everything needed to turn an enabled log call into a queued event
pub(crate) struct EventTarget<'a> {
    pub category: &'a str,
    pub include_scopes: bool,
    /// Explicit stack; `None` reads the calling thread's stack
    pub scopes: Option<&'a ScopeStack>,
    pub stderr_threshold: LogLevel,
    pub formatter: &'a Arc<ConsoleFormatter>,
    pub processor: &'a ConsoleLoggerProcessor,
}

impl EventTarget<'_> {
    /// Render, snapshot scopes and queue. The caller has already checked the level.
    pub(crate) fn emit<S, F>(
        &self,
        level: LogLevel,
        event_id: impl Into<EventId>,
        state: &S,
        exception: Option<&ExceptionInfo>,
        renderer: F,
    ) where
        S: ?Sized,
        F: FnOnce(&S, Option<&ExceptionInfo>) -> String,
    {
        let message = renderer(state, exception);
        if message.is_empty() && exception.is_none() {
            return;
        }

        let scopes = match (self.include_scopes, self.scopes) {
            (false, _) => Vec::new(),
            (true, Some(stack)) => stack.snapshot(),
            (true, None) => ScopeStack::current().snapshot(),
        };

        let mut event = ConsoleLogEvent::new(level, self.category, event_id, message)
            .with_scopes(scopes)
            .with_stderr(level >= self.stderr_threshold);
        event.exception = exception.cloned();

        self.processor.enqueue(event, self.formatter);
    }
}

/// Logger bound to one category, obtained from
/// [`ConsoleLoggerProvider::create_logger`](super::ConsoleLoggerProvider::create_logger).
///
/// Cheap to clone; all clones share the provider's processor. Unless bound to
/// an explicit stack, scopes are read from the thread that logs.
#[derive(Clone)]
pub struct ConsoleLogger {
    category: Arc<str>,
    min_level: LogLevel,
    include_scopes: bool,
    stderr_threshold: LogLevel,
    formatter: Arc<ConsoleFormatter>,
    processor: Arc<ConsoleLoggerProcessor>,
    scopes: Option<ScopeStack>,
}

impl ConsoleLogger {
    pub(crate) fn new(
        category: &str,
        min_level: LogLevel,
        include_scopes: bool,
        stderr_threshold: LogLevel,
        formatter: Arc<ConsoleFormatter>,
        processor: Arc<ConsoleLoggerProcessor>,
        scopes: Option<ScopeStack>,
    ) -> Self {
        Self {
            category: Arc::from(category),
            min_level,
            include_scopes,
            stderr_threshold,
            formatter,
            processor,
            scopes,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level >= self.min_level
    }

    /// Log `state` rendered by `formatter`.
    ///
    /// Nothing is built or queued when the level is disabled, or when the
    /// rendered message is empty and there is no exception.
    pub fn log<S, F>(
        &self,
        level: LogLevel,
        event_id: impl Into<EventId>,
        state: &S,
        exception: Option<&ExceptionInfo>,
        formatter: F,
    ) where
        S: ?Sized,
        F: FnOnce(&S, Option<&ExceptionInfo>) -> String,
    {
        if !self.is_enabled(level) {
            return;
        }

        EventTarget {
            category: &self.category,
            include_scopes: self.include_scopes,
            scopes: self.scopes.as_ref(),
            stderr_threshold: self.stderr_threshold,
            formatter: &self.formatter,
            processor: &self.processor,
        }
        .emit(level, event_id, state, exception, formatter);
    }

    /// Log a pre-rendered message with event id 0
    pub fn log_message(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        let message = message.into();
        self.log(level, 0, &message, None, |m, _| m.clone());
    }

    /// Log a message together with the full description of `err`
    pub fn log_error<E>(
        &self,
        level: LogLevel,
        event_id: impl Into<EventId>,
        err: &E,
        message: impl Into<String>,
    ) where
        E: Error + ?Sized,
    {
        if !self.is_enabled(level) {
            return;
        }
        let exception = ExceptionInfo::from_error(err);
        let message = message.into();
        self.log(level, event_id, &message, Some(&exception), |m, _| m.clone());
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Information, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Critical, message);
    }

    /// Push a scope onto the stack this logger reads from
    #[must_use = "the scope is removed as soon as the guard is dropped"]
    pub fn begin_scope<T: fmt::Display>(&self, value: T) -> ScopeGuard {
        self.scopes().push(value)
    }

    /// The bound stack, or the calling thread's stack
    pub fn scopes(&self) -> ScopeStack {
        self.scopes.clone().unwrap_or_else(ScopeStack::current)
    }

    /// Same logger, reading scopes from a different stack (e.g. one per request)
    #[must_use]
    pub fn with_scope_stack(&self, scopes: ScopeStack) -> Self {
        Self {
            scopes: Some(scopes),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("category", &self.category)
            .field("min_level", &self.min_level)
            .field("include_scopes", &self.include_scopes)
            .field("stderr_threshold", &self.stderr_threshold)
            .field("format", &self.formatter.kind())
            .finish()
    }
}
