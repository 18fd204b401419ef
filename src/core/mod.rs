//! Core console logger types and traits

pub mod console;
pub mod error;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod processor;
pub mod provider;
pub mod scope;
pub mod timestamp;

pub use console::{Console, ConsoleColor, ConsoleColors, ConsoleTarget, NEW_LINE};
pub use error::{LoggerError, Result};
pub use formatter::{ConsoleFormatter, ConsoleLoggerFormat};
pub use log_event::{ConsoleLogEvent, EventId, ExceptionInfo};
pub use log_level::LogLevel;
pub use logger::ConsoleLogger;
pub use metrics::ProcessorMetrics;
pub use options::ConsoleLoggerOptions;
pub use processor::{ConsoleLoggerProcessor, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use provider::{ConsoleLoggerProvider, ConsoleLoggerProviderBuilder};
pub use scope::{ScopeGuard, ScopeStack};
pub use timestamp::{FormatterConfig, TimestampFormat};
