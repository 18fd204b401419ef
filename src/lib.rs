//! # Rust Console Logger
//!
//! An asynchronous console log sink. Loggers build events on the calling
//! thread and hand them to a bounded queue; a single background thread
//! renders them to stdout or stderr in submission order.
//!
//! ## Features
//!
//! - **Two layouts**: human-readable multi-line output with colored severity
//!   tokens, or one `<pri>`-prefixed line per event for systemd-journald
//! - **Backpressure**: producers wait when the queue is full instead of
//!   dropping events
//! - **Failure isolation**: a failing console never raises into the caller
//!   and never stops the writer thread
//! - **Scopes**: contextual values snapshotted into each event

pub mod appenders;
pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{AnsiConsole, MemoryConsole};
    pub use crate::core::{
        Console, ConsoleColor, ConsoleFormatter, ConsoleLogEvent, ConsoleLogger,
        ConsoleLoggerFormat, ConsoleLoggerOptions, ConsoleLoggerProcessor, ConsoleLoggerProvider,
        EventId, ExceptionInfo, FormatterConfig, LogLevel, LoggerError, ProcessorMetrics, Result,
        ScopeGuard, ScopeStack, TimestampFormat, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use crate::appenders::{AnsiConsole, MemoryConsole};
pub use crate::core::{
    Console, ConsoleColor, ConsoleColors, ConsoleFormatter, ConsoleLogEvent, ConsoleLogger,
    ConsoleLoggerFormat, ConsoleLoggerOptions, ConsoleLoggerProcessor, ConsoleLoggerProvider,
    ConsoleLoggerProviderBuilder, ConsoleTarget, EventId, ExceptionInfo, FormatterConfig,
    LogLevel, LoggerError, ProcessorMetrics, Result, ScopeGuard, ScopeStack, TimestampFormat,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::formatters::{MultiLineFormatter, SystemdFormatter};
