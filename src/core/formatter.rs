//! Formatter selection for console output
//!
//! Two fixed layouts are supported:
//! - `Default`: human-readable, multi-line, optionally colored
//! - `Systemd`: one `<pri>`-prefixed line per event, for journald and syslog readers

use super::console::Console;
use super::error::{LoggerError, Result};
use super::log_event::ConsoleLogEvent;
use super::timestamp::FormatterConfig;
use crate::formatters::{MultiLineFormatter, SystemdFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Console output layout selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConsoleLoggerFormat {
    /// Human-readable multi-line layout
    #[default]
    Default,
    /// Single-line syslog severity layout
    Systemd,
}

impl ConsoleLoggerFormat {
    pub fn to_str(&self) -> &'static str {
        match self {
            ConsoleLoggerFormat::Default => "default",
            ConsoleLoggerFormat::Systemd => "systemd",
        }
    }
}

impl fmt::Display for ConsoleLoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ConsoleLoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "human" => Ok(ConsoleLoggerFormat::Default),
            "systemd" | "syslog" => Ok(ConsoleLoggerFormat::Systemd),
            _ => Err(LoggerError::config(
                "format",
                format!("Unknown console logger format: '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for ConsoleLoggerFormat {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ConsoleLoggerFormat> for String {
    fn from(format: ConsoleLoggerFormat) -> Self {
        format.to_str().to_string()
    }
}

/// The formatter bound to a provider, chosen once at configuration time
#[derive(Debug, Clone)]
pub enum ConsoleFormatter {
    MultiLine(MultiLineFormatter),
    Systemd(SystemdFormatter),
}

impl ConsoleFormatter {
    pub fn new(format: ConsoleLoggerFormat, config: FormatterConfig) -> Self {
        match format {
            ConsoleLoggerFormat::Default => {
                ConsoleFormatter::MultiLine(MultiLineFormatter::new(config))
            }
            ConsoleLoggerFormat::Systemd => ConsoleFormatter::Systemd(SystemdFormatter::new(config)),
        }
    }

    /// Render one event into `console`
    pub fn format(&self, event: &ConsoleLogEvent, console: &mut dyn Console) -> Result<()> {
        match self {
            ConsoleFormatter::MultiLine(formatter) => formatter.format(event, console),
            ConsoleFormatter::Systemd(formatter) => formatter.format(event, console),
        }
    }

    pub fn kind(&self) -> ConsoleLoggerFormat {
        match self {
            ConsoleFormatter::MultiLine(_) => ConsoleLoggerFormat::Default,
            ConsoleFormatter::Systemd(_) => ConsoleLoggerFormat::Systemd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(
            "human".parse::<ConsoleLoggerFormat>().unwrap(),
            ConsoleLoggerFormat::Default
        );
        assert_eq!(
            "Systemd".parse::<ConsoleLoggerFormat>().unwrap(),
            ConsoleLoggerFormat::Systemd
        );
        assert_eq!(
            "syslog".parse::<ConsoleLoggerFormat>().unwrap(),
            ConsoleLoggerFormat::Systemd
        );
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        let err = "json".parse::<ConsoleLoggerFormat>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&ConsoleLoggerFormat::Systemd).unwrap();
        assert_eq!(json, "\"systemd\"");

        let parsed: ConsoleLoggerFormat = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(parsed, ConsoleLoggerFormat::Default);

        assert!(serde_json::from_str::<ConsoleLoggerFormat>("\"xml\"").is_err());
    }

    #[test]
    fn test_formatter_kind() {
        let formatter = ConsoleFormatter::new(ConsoleLoggerFormat::Systemd, FormatterConfig::new());
        assert_eq!(formatter.kind(), ConsoleLoggerFormat::Systemd);

        let formatter = ConsoleFormatter::new(ConsoleLoggerFormat::Default, FormatterConfig::new());
        assert!(matches!(formatter, ConsoleFormatter::MultiLine(_)));
    }
}
