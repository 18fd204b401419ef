//! Console implementation backed by the process stdout/stderr streams

use crate::core::{Console, ConsoleColor, ConsoleTarget, Result, NEW_LINE};
use std::io::Write;

/// Writes to stdout or stderr, coloring text with ANSI escape sequences.
///
/// Colors are rendered through the `colored` crate and therefore honour its
/// global controls (`NO_COLOR`, `CLICOLOR_FORCE`, `set_override`). Without the
/// `console` feature text is written uncolored.
#[derive(Debug, Clone, Copy)]
pub struct AnsiConsole {
    target: ConsoleTarget,
}

impl AnsiConsole {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn write_raw(&self, text: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(text.as_bytes())?,
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }
}

impl Console for AnsiConsole {
    fn write(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        self.write_raw(&colorize(message, background, foreground))
    }

    fn write_line(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        let mut text = colorize(message, background, foreground);
        text.push_str(NEW_LINE);
        self.write_raw(&text)
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }
}

#[cfg(feature = "console")]
fn colorize(
    message: &str,
    background: Option<ConsoleColor>,
    foreground: Option<ConsoleColor>,
) -> String {
    use colored::Colorize;

    if background.is_none() && foreground.is_none() {
        return message.to_string();
    }
    let mut colored = message.normal();
    if let Some(foreground) = foreground {
        colored = colored.color(ansi_color(foreground));
    }
    if let Some(background) = background {
        colored = colored.on_color(ansi_color(background));
    }
    colored.to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(
    message: &str,
    _background: Option<ConsoleColor>,
    _foreground: Option<ConsoleColor>,
) -> String {
    message.to_string()
}

/// Map the console palette onto the eight normal and eight bright ANSI colors
#[cfg(feature = "console")]
pub fn ansi_color(color: ConsoleColor) -> colored::Color {
    use colored::Color;
    match color {
        ConsoleColor::Black => Color::Black,
        ConsoleColor::DarkBlue => Color::Blue,
        ConsoleColor::DarkGreen => Color::Green,
        ConsoleColor::DarkCyan => Color::Cyan,
        ConsoleColor::DarkRed => Color::Red,
        ConsoleColor::DarkMagenta => Color::Magenta,
        ConsoleColor::DarkYellow => Color::Yellow,
        ConsoleColor::Gray => Color::White,
        ConsoleColor::DarkGray => Color::BrightBlack,
        ConsoleColor::Blue => Color::BrightBlue,
        ConsoleColor::Green => Color::BrightGreen,
        ConsoleColor::Cyan => Color::BrightCyan,
        ConsoleColor::Red => Color::BrightRed,
        ConsoleColor::Magenta => Color::BrightMagenta,
        ConsoleColor::Yellow => Color::BrightYellow,
        ConsoleColor::White => Color::BrightWhite,
    }
}
