//! Console logger options
//!
//! Options are bound once when a provider is built and are read-only
//! afterwards. They can be assembled with the `with_*` builder methods or
//! loaded from JSON:
//!
//! ```
//! use rust_console_logger::core::{ConsoleLoggerFormat, ConsoleLoggerOptions, LogLevel};
//!
//! let options = ConsoleLoggerOptions::from_json(r#"{
//!     "format": "systemd",
//!     "timestamp_format": "%H:%M:%S ",
//!     "include_scopes": true,
//!     "log_to_standard_error_threshold": "Warning"
//! }"#).unwrap();
//!
//! assert_eq!(options.format, ConsoleLoggerFormat::Systemd);
//! assert_eq!(options.log_to_standard_error_threshold, LogLevel::Warning);
//! ```

use super::error::Result;
use super::formatter::{ConsoleFormatter, ConsoleLoggerFormat};
use super::log_level::LogLevel;
use super::timestamp::{FormatterConfig, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLoggerOptions {
    /// Output layout; an unknown name fails deserialization
    pub format: ConsoleLoggerFormat,
    /// strftime pattern or named format; absent writes no timestamp
    pub timestamp_format: Option<String>,
    pub use_utc_timestamp: bool,
    pub disable_colors: bool,
    pub include_scopes: bool,
    /// Events at or above this level go to stderr
    pub log_to_standard_error_threshold: LogLevel,
    /// Minimum level for categories without a more specific entry
    pub min_level: LogLevel,
    /// Per-category minimum levels, matched on dotted category prefixes
    pub category_levels: HashMap<String, LogLevel>,
}

impl Default for ConsoleLoggerOptions {
    fn default() -> Self {
        Self {
            format: ConsoleLoggerFormat::Default,
            timestamp_format: None,
            use_utc_timestamp: false,
            disable_colors: false,
            include_scopes: false,
            log_to_standard_error_threshold: LogLevel::None,
            min_level: LogLevel::Trace,
            category_levels: HashMap::new(),
        }
    }
}

impl ConsoleLoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check settings that serde cannot, such as the timestamp pattern
    pub fn validate(&self) -> Result<()> {
        self.parsed_timestamp_format().map(|_| ())
    }

    #[must_use]
    pub fn with_format(mut self, format: ConsoleLoggerFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
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

    #[must_use]
    pub fn with_include_scopes(mut self, include: bool) -> Self {
        self.include_scopes = include;
        self
    }

    #[must_use]
    pub fn with_stderr_threshold(mut self, level: LogLevel) -> Self {
        self.log_to_standard_error_threshold = level;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_category_level(mut self, category: impl Into<String>, level: LogLevel) -> Self {
        self.category_levels.insert(category.into(), level);
        self
    }

    /// Minimum level for `category`.
    ///
    /// The longest configured prefix that matches on a `.` boundary wins, so
    /// `"App"` covers `"App.Db"` but not `"Application"`.
    pub fn min_level_for(&self, category: &str) -> LogLevel {
        self.category_levels
            .iter()
            .filter(|(prefix, _)| {
                category == prefix.as_str()
                    || (category.starts_with(prefix.as_str())
                        && category[prefix.len()..].starts_with('.'))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.min_level, |(_, level)| *level)
    }

    fn parsed_timestamp_format(&self) -> Result<Option<TimestampFormat>> {
        self.timestamp_format
            .as_deref()
            .map(str::parse::<TimestampFormat>)
            .transpose()
    }

    /// Build the formatter these options describe
    pub fn build_formatter(&self) -> Result<ConsoleFormatter> {
        let config = FormatterConfig {
            timestamp_format: self.parsed_timestamp_format()?,
            use_utc_timestamp: self.use_utc_timestamp,
            disable_colors: self.disable_colors,
        };
        Ok(ConsoleFormatter::new(self.format, config))
    }
}
