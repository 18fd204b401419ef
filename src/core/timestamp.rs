//! Timestamp formatting utilities
//!
//! Provides the optional timestamp prefix written by both console formatters.
//! Supports ISO 8601, RFC 3339, Unix timestamps, and custom strftime patterns,
//! rendered on either the UTC or the local clock.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now()).unwrap();
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime pattern, e.g. `"%H:%M:%S "`.
    ///
    /// The pattern is written verbatim in front of the severity token, so a
    /// trailing space must be part of the pattern if one is wanted.
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp in any time zone according to this format
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let formatted = match self {
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Iso8601Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, true)
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::formatter("timestamp", format!("invalid pattern '{}'", pattern))
                })?;
                out
            }
        };
        Ok(formatted)
    }

    /// Check that a custom pattern only contains valid strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }
}

impl FromStr for TimestampFormat {
    type Err = LoggerError;

    /// Named formats are matched case-insensitively; anything else is a
    /// custom strftime pattern.
    fn from_str(s: &str) -> Result<Self> {
        let format = match s.to_ascii_lowercase().as_str() {
            "iso8601" => TimestampFormat::Iso8601,
            "iso8601micros" => TimestampFormat::Iso8601Micros,
            "rfc3339" => TimestampFormat::Rfc3339,
            "unix" => TimestampFormat::Unix,
            "unixmillis" => TimestampFormat::UnixMillis,
            "unixmicros" => TimestampFormat::UnixMicros,
            _ => TimestampFormat::Custom(s.to_string()),
        };
        format.validate()?;
        Ok(format)
    }
}

/// Timestamp and color settings shared by the console formatters
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::{FormatterConfig, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::Rfc3339)
///     .with_utc_timestamp(true);
/// assert!(config.timestamp_format.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Timestamp prefix; `None` writes no timestamp at all
    pub timestamp_format: Option<TimestampFormat>,
    /// Render timestamps on the UTC clock instead of local time
    pub use_utc_timestamp: bool,
    /// Write the severity token without colors
    pub disable_colors: bool,
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Use a custom strftime pattern for the timestamp
    #[must_use]
    pub fn with_custom_timestamp(mut self, pattern: &str) -> Self {
        self.timestamp_format = Some(TimestampFormat::Custom(pattern.to_string()));
        self
    }

    #[must_use]
    pub fn with_utc_timestamp(mut self, use_utc: bool) -> Self {
        self.use_utc_timestamp = use_utc;
        self
    }

    #[must_use]
    pub fn with_disable_colors(mut self, disable: bool) -> Self {
        self.disable_colors = disable;
        self
    }

    /// Render the configured timestamp for an event, if any
    pub fn render_timestamp(&self, timestamp: &DateTime<Utc>) -> Result<Option<String>> {
        let Some(format) = &self.timestamp_format else {
            return Ok(None);
        };
        let rendered = if self.use_utc_timestamp {
            format.format(timestamp)?
        } else {
            format.format(&timestamp.with_timezone(&Local))?
        };
        Ok(Some(rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros
            .format(&fixed_datetime())
            .unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00"));
    }

    #[test]
    fn test_unix_formats_scale() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .unwrap();
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .unwrap();
        let micros: i64 = TimestampFormat::UnixMicros
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(millis / 1000, secs);
        assert_eq!(micros / 1000, millis);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M ".to_string());
        let result = format.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025/01/08 10:30 ");
    }

    #[test]
    fn test_parse_named_and_custom() {
        assert_eq!(
            "rfc3339".parse::<TimestampFormat>().unwrap(),
            TimestampFormat::Rfc3339
        );
        assert_eq!(
            "[%H:%M:%S] ".parse::<TimestampFormat>().unwrap(),
            TimestampFormat::Custom("[%H:%M:%S] ".to_string())
        );
    }

    #[test]
    fn test_invalid_custom_pattern_rejected() {
        let err = "%Q%".parse::<TimestampFormat>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_render_timestamp_absent() {
        let config = FormatterConfig::new();
        assert_eq!(config.render_timestamp(&fixed_datetime()).unwrap(), None);
    }

    #[test]
    fn test_render_timestamp_utc() {
        let config = FormatterConfig::new()
            .with_custom_timestamp("%H:%M:%S ")
            .with_utc_timestamp(true);
        assert_eq!(
            config.render_timestamp(&fixed_datetime()).unwrap().as_deref(),
            Some("10:30:45 ")
        );
    }

    #[test]
    fn test_render_timestamp_local_matches_chrono_local() {
        let config = FormatterConfig::new().with_custom_timestamp("%Y-%m-%d %H:%M");
        let expected = fixed_datetime()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert_eq!(
            config.render_timestamp(&fixed_datetime()).unwrap(),
            Some(expected)
        );
    }
}
