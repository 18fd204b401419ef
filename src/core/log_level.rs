//! Log level definitions and their console presentation

use super::console::{ConsoleColor, ConsoleColors};
use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ordered from least to most important.
///
/// `None` is not a real severity: used as a threshold it disables a
/// category or the stderr routing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Information = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    None = 6,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
            LogLevel::None => "None",
        }
    }

    /// Four character token used by the multi-line formatter
    pub fn console_token(&self) -> Result<&'static str> {
        match self {
            LogLevel::Trace => Ok("trce"),
            LogLevel::Debug => Ok("dbug"),
            LogLevel::Information => Ok("info"),
            LogLevel::Warning => Ok("warn"),
            LogLevel::Error => Ok("fail"),
            LogLevel::Critical => Ok("crit"),
            LogLevel::None => Err(LoggerError::unmapped_level(*self, "severity token")),
        }
    }

    /// Foreground/background pair for the severity token.
    ///
    /// The background is always set alongside the foreground; a lone
    /// foreground renders poorly on some terminal themes.
    pub fn console_colors(&self) -> ConsoleColors {
        use ConsoleColor::*;
        match self {
            LogLevel::Critical => ConsoleColors::new(White, Red),
            LogLevel::Error => ConsoleColors::new(Black, Red),
            LogLevel::Warning => ConsoleColors::new(Yellow, Black),
            LogLevel::Information => ConsoleColors::new(DarkGreen, Black),
            LogLevel::Debug | LogLevel::Trace => ConsoleColors::new(Gray, Black),
            LogLevel::None => ConsoleColors::default(),
        }
    }

    /// RFC 5424 severity prefix, e.g. `<6>` for informational messages
    pub fn syslog_severity(&self) -> Result<&'static str> {
        match self {
            LogLevel::Trace | LogLevel::Debug => Ok("<7>"),
            LogLevel::Information => Ok("<6>"),
            LogLevel::Warning => Ok("<4>"),
            LogLevel::Error => Ok("<3>"),
            LogLevel::Critical => Ok("<2>"),
            LogLevel::None => Err(LoggerError::unmapped_level(*self, "syslog severity")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFORMATION" | "INFO" => Ok(LogLevel::Information),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            "NONE" => Ok(LogLevel::None),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Information);
        assert!(LogLevel::Information < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert!(LogLevel::Critical < LogLevel::None);
    }

    #[test]
    fn test_console_tokens() {
        assert_eq!(LogLevel::Trace.console_token().unwrap(), "trce");
        assert_eq!(LogLevel::Debug.console_token().unwrap(), "dbug");
        assert_eq!(LogLevel::Information.console_token().unwrap(), "info");
        assert_eq!(LogLevel::Warning.console_token().unwrap(), "warn");
        assert_eq!(LogLevel::Error.console_token().unwrap(), "fail");
        assert_eq!(LogLevel::Critical.console_token().unwrap(), "crit");
        assert!(LogLevel::None.console_token().is_err());
    }

    #[test]
    fn test_console_colors() {
        let colors = LogLevel::Critical.console_colors();
        assert_eq!(colors.foreground, Some(ConsoleColor::White));
        assert_eq!(colors.background, Some(ConsoleColor::Red));

        let colors = LogLevel::Information.console_colors();
        assert_eq!(colors.foreground, Some(ConsoleColor::DarkGreen));
        assert_eq!(colors.background, Some(ConsoleColor::Black));

        assert_eq!(
            LogLevel::Trace.console_colors(),
            LogLevel::Debug.console_colors()
        );
    }

    #[test]
    fn test_syslog_severity() {
        assert_eq!(LogLevel::Trace.syslog_severity().unwrap(), "<7>");
        assert_eq!(LogLevel::Debug.syslog_severity().unwrap(), "<7>");
        assert_eq!(LogLevel::Information.syslog_severity().unwrap(), "<6>");
        assert_eq!(LogLevel::Warning.syslog_severity().unwrap(), "<4>");
        assert_eq!(LogLevel::Error.syslog_severity().unwrap(), "<3>");
        assert_eq!(LogLevel::Critical.syslog_severity().unwrap(), "<2>");
        assert!(matches!(
            LogLevel::None.syslog_severity(),
            Err(LoggerError::UnmappedLevel { .. })
        ));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Information);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!("NONE".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
