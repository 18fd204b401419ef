//! Log event structure handed from producers to the writer thread

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Identifies a distinct log statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    pub id: i32,
    pub name: Option<String>,
}

impl EventId {
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Full descriptive text of an error attached to a log event.
///
/// Captured eagerly so the event can cross threads without borrowing the
/// original error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    text: String,
}

impl ExceptionInfo {
    /// Describe `err` as `type: message` followed by one line per source
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let mut text = format!("{}: {}", std::any::type_name::<E>(), err);
        let mut source = err.source();
        while let Some(cause) = source {
            text.push_str("\n ---> ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { text }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One log call, immutable once built.
#[derive(Debug, Clone)]
pub struct ConsoleLogEvent {
    pub level: LogLevel,
    pub category: String,
    pub event_id: EventId,
    pub exception: Option<ExceptionInfo>,
    pub message: String,
    /// Outer-to-inner snapshot of the scope stack at log time
    pub scopes: Vec<Arc<str>>,
    pub write_to_stderr: bool,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleLogEvent {
    pub fn new(
        level: LogLevel,
        category: impl Into<String>,
        event_id: impl Into<EventId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            category: category.into(),
            event_id: event_id.into(),
            exception: None,
            message: message.into(),
            scopes: Vec::new(),
            write_to_stderr: false,
            timestamp: Utc::now(),
        }
    }

    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_scopes(mut self, scopes: Vec<Arc<str>>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_stderr(mut self, write_to_stderr: bool) -> Self {
        self.write_to_stderr = write_to_stderr;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
