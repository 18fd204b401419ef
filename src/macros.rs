//! Logging macros for ergonomic log message formatting.
//!
//! The format arguments are only evaluated when the level is enabled for the
//! logger's category.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::info;
//!
//! let provider = ConsoleLoggerProvider::builder()
//!     .consoles(MemoryConsole::new(), MemoryConsole::new())
//!     .build()
//!     .unwrap();
//! let logger = provider.create_logger("Server");
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let provider = ConsoleLoggerProvider::builder()
/// #     .consoles(MemoryConsole::new(), MemoryConsole::new())
/// #     .build()
/// #     .unwrap();
/// # let logger = provider.create_logger("Doc");
/// use rust_console_logger::log;
/// log!(logger, LogLevel::Information, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log_message(level, format!($($arg)+));
        }
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an information-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Information, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let provider = ConsoleLoggerProvider::builder()
/// #     .consoles(MemoryConsole::new(), MemoryConsole::new())
/// #     .build()
/// #     .unwrap();
/// # let logger = provider.create_logger("Doc");
/// use rust_console_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryConsole;
    use crate::core::{ConsoleLoggerFormat, ConsoleLoggerOptions, ConsoleLoggerProvider, LogLevel};
    use std::cell::Cell;

    fn provider(min_level: LogLevel) -> (ConsoleLoggerProvider, MemoryConsole) {
        let out = MemoryConsole::new();
        let provider = ConsoleLoggerProvider::builder()
            .options(
                ConsoleLoggerOptions::new()
                    .with_format(ConsoleLoggerFormat::Systemd)
                    .with_min_level(min_level),
            )
            .consoles(out.clone(), MemoryConsole::new())
            .build()
            .unwrap();
        (provider, out)
    }

    #[test]
    fn test_level_macros() {
        let (provider, out) = provider(LogLevel::Trace);
        let logger = provider.create_logger("Macro");

        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        warn!(logger, "w {}", 4);
        error!(logger, "e {}", 5);
        critical!(logger, "c {}", 6);
        log!(logger, LogLevel::Information, "plain");
        provider.shutdown();

        assert_eq!(
            out.lines(),
            vec![
                "<7>Macro[0] t 1",
                "<7>Macro[0] d 2",
                "<6>Macro[0] i 3",
                "<4>Macro[0] w 4",
                "<3>Macro[0] e 5",
                "<2>Macro[0] c 6",
                "<6>Macro[0] plain",
            ]
        );
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        let (provider, out) = provider(LogLevel::Warning);
        let logger = provider.create_logger("Macro");
        let evaluated = Cell::new(false);
        let expensive = || {
            evaluated.set(true);
            "value"
        };

        debug!(logger, "computed {}", expensive());
        provider.shutdown();

        assert!(!evaluated.get());
        assert!(out.contents().is_empty());
    }
}
