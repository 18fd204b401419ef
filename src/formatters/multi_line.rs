//! Human-readable multi-line console layout
//!
//! ```text
//! info: ConsoleApp.Program[10]
//!       => RequestId:42 => Handler:orders
//!       Request received
//! ```

use crate::core::{
    Console, ConsoleColors, ConsoleLogEvent, FormatterConfig, Result, NEW_LINE,
};

const LOG_LEVEL_PADDING: &str = ": ";
/// Width of a severity token plus `LOG_LEVEL_PADDING`
const MESSAGE_PADDING: &str = "      ";

#[derive(Debug, Clone, Default)]
pub struct MultiLineFormatter {
    config: FormatterConfig,
}

impl MultiLineFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn format(&self, event: &ConsoleLogEvent, console: &mut dyn Console) -> Result<()> {
        let token = event.level.console_token()?;

        // No separator between timestamp and token; users who want one put it
        // in the pattern itself.
        if let Some(timestamp) = self.config.render_timestamp(&event.timestamp)? {
            console.write(&timestamp, None, None)?;
        }

        let colors = self.level_colors(event);
        console.write(token, colors.background, colors.foreground)?;

        let header = format!(
            "{}{}[{}]",
            LOG_LEVEL_PADDING, event.category, event.event_id.id
        );
        console.write_line(&header, None, None)?;

        if !event.scopes.is_empty() {
            let mut line = String::from(MESSAGE_PADDING);
            line.push_str("=> ");
            line.push_str(&event.scopes.join(" => "));
            console.write_line(&line, None, None)?;
        }

        if !event.message.is_empty() {
            let mut line = String::with_capacity(MESSAGE_PADDING.len() + event.message.len());
            line.push_str(MESSAGE_PADDING);
            line.push_str(&pad_continuation_lines(&event.message));
            console.write_line(&line, None, None)?;
        }

        if let Some(exception) = &event.exception {
            console.write_line(exception.text(), None, None)?;
        }

        Ok(())
    }

    fn level_colors(&self, event: &ConsoleLogEvent) -> ConsoleColors {
        if self.config.disable_colors {
            ConsoleColors::default()
        } else {
            event.level.console_colors()
        }
    }
}

/// Re-indent every line after the first so continuation lines stay aligned
/// under the message column. `\r\n`, `\n` and a lone `\r` each count as one
/// line break.
fn pad_continuation_lines(message: &str) -> String {
    if !message.contains(['\n', '\r']) {
        return message.to_string();
    }
    let mut out = String::with_capacity(message.len() + 16);
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(NEW_LINE);
                out.push_str(MESSAGE_PADDING);
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryConsole;
    use crate::core::{ConsoleColor, ExceptionInfo, LogLevel, TimestampFormat};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn render(formatter: &MultiLineFormatter, event: &ConsoleLogEvent) -> MemoryConsole {
        let console = MemoryConsole::new();
        let mut writer = console.clone();
        formatter.format(event, &mut writer).unwrap();
        console
    }

    #[test]
    fn test_basic_layout() {
        let event = ConsoleLogEvent::new(LogLevel::Information, "App.X", 10, "hello");
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(console.lines(), vec!["info: App.X[10]", "      hello"]);
        assert!(!console.contents().contains("<6>"));
    }

    #[test]
    fn test_token_colors() {
        let event = ConsoleLogEvent::new(LogLevel::Critical, "App", 1, "boom");
        let console = render(&MultiLineFormatter::default(), &event);

        let token = &console.writes()[0];
        assert_eq!(token.text, "crit");
        assert_eq!(token.foreground, Some(ConsoleColor::White));
        assert_eq!(token.background, Some(ConsoleColor::Red));
        assert!(console.writes()[1..]
            .iter()
            .all(|w| w.foreground.is_none() && w.background.is_none()));
    }

    #[test]
    fn test_colors_disabled() {
        let formatter = MultiLineFormatter::new(FormatterConfig::new().with_disable_colors(true));
        let event = ConsoleLogEvent::new(LogLevel::Error, "App", 1, "bad");
        let console = render(&formatter, &event);

        assert!(console
            .writes()
            .iter()
            .all(|w| w.foreground.is_none() && w.background.is_none()));
        assert_eq!(console.lines()[0], "fail: App[1]");
    }

    #[test]
    fn test_timestamp_has_no_separator() {
        let formatter = MultiLineFormatter::new(
            FormatterConfig::new()
                .with_timestamp_format(TimestampFormat::Custom("%H:%M:%S".to_string()))
                .with_utc_timestamp(true),
        );
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let event =
            ConsoleLogEvent::new(LogLevel::Warning, "App", 3, "slow").with_timestamp(timestamp);
        let console = render(&formatter, &event);

        assert_eq!(console.lines()[0], "10:30:45warn: App[3]");
    }

    #[test]
    fn test_scopes_line() {
        let event = ConsoleLogEvent::new(LogLevel::Information, "App", 2, "done")
            .with_scopes(vec![Arc::from("RequestId:42"), Arc::from("Handler:orders")]);
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(
            console.lines(),
            vec![
                "info: App[2]",
                "      => RequestId:42 => Handler:orders",
                "      done",
            ]
        );
    }

    #[test]
    fn test_multiline_message_is_padded() {
        let event = ConsoleLogEvent::new(LogLevel::Information, "App", 1, "line1\nline2");
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(
            console.lines(),
            vec!["info: App[1]", "      line1", "      line2"]
        );
    }

    #[test]
    fn test_crlf_message_is_padded() {
        let event = ConsoleLogEvent::new(LogLevel::Debug, "App", 1, "a\r\nb");
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(console.lines(), vec!["dbug: App[1]", "      a", "      b"]);
    }

    #[test]
    fn test_lone_carriage_return_is_a_line_break() {
        let event = ConsoleLogEvent::new(LogLevel::Information, "App", 1, "a\rb\r\nc\n\rd");
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(
            console.lines(),
            vec!["info: App[1]", "      a", "      b", "      c", "      ", "      d"]
        );
        assert!(!console.contents().contains("\rb"));
    }

    #[test]
    fn test_exception_unpadded_and_empty_message_skipped() {
        let event = ConsoleLogEvent::new(LogLevel::Error, "App", 5, "")
            .with_exception(ExceptionInfo::from_text("IoError: disk full\n ---> ENOSPC"));
        let console = render(&MultiLineFormatter::default(), &event);

        assert_eq!(
            console.lines(),
            vec!["fail: App[5]", "IoError: disk full", " ---> ENOSPC"]
        );
    }

    #[test]
    fn test_none_level_rejected() {
        let event = ConsoleLogEvent::new(LogLevel::None, "App", 1, "never");
        let console = MemoryConsole::new();
        let mut writer = console.clone();

        assert!(MultiLineFormatter::default().format(&event, &mut writer).is_err());
        assert!(console.contents().is_empty());
    }
}
