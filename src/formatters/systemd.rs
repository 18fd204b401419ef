//! Single-line layout for systemd-journald and syslog readers
//!
//! journald reads standard output line by line in a `<pri>message` format and
//! crops lines longer than its `LineMax` setting, so every event must stay on
//! exactly one physical line.
//!
//! ```text
//! <6>ConsoleApp.Program[10] Request received
//! ```

use crate::core::{Console, ConsoleLogEvent, FormatterConfig, Result};

#[derive(Debug, Clone, Default)]
pub struct SystemdFormatter {
    config: FormatterConfig,
}

impl SystemdFormatter {
    /// Colors never apply to this layout; `disable_colors` is ignored
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn format(&self, event: &ConsoleLogEvent, console: &mut dyn Console) -> Result<()> {
        let line = self.render(event)?;
        console.write_line(&line, None, None)
    }

    /// Build the line without its terminator
    pub fn render(&self, event: &ConsoleLogEvent) -> Result<String> {
        let mut line = String::with_capacity(64 + event.message.len());

        line.push_str(event.level.syslog_severity()?);

        if let Some(timestamp) = self.config.render_timestamp(&event.timestamp)? {
            line.push_str(&timestamp);
        }

        line.push_str(&event.category);
        line.push('[');
        line.push_str(&event.event_id.id.to_string());
        line.push(']');

        for scope in &event.scopes {
            line.push_str(" => ");
            push_single_line(&mut line, scope);
        }

        if !event.message.is_empty() {
            line.push(' ');
            push_single_line(&mut line, &event.message);
        }

        if let Some(exception) = &event.exception {
            line.push(' ');
            push_single_line(&mut line, exception.text());
        }

        Ok(line)
    }
}

/// Append `text` with every line break (`\r\n`, `\n` or `\r`) replaced by a space
fn push_single_line(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            other => out.push(other),
        }
    }
}
