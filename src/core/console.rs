//! Console sink abstraction that formatters write through

use super::error::Result;
use serde::{Deserialize, Serialize};

/// Line terminator appended by `write_line`
#[cfg(windows)]
pub const NEW_LINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEW_LINE: &str = "\n";

/// The sixteen-color console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Foreground/background pair; `None` keeps the console's current color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleColors {
    pub foreground: Option<ConsoleColor>,
    pub background: Option<ConsoleColor>,
}

impl ConsoleColors {
    pub const fn new(foreground: ConsoleColor, background: ConsoleColor) -> Self {
        Self {
            foreground: Some(foreground),
            background: Some(background),
        }
    }
}

/// Which process stream a console writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// A text stream that log formatters render into.
///
/// Implementations are driven from a single writer at a time, so they
/// need no internal locking of their own.
pub trait Console: Send {
    /// Write `message`, switching to the given colors first when present
    fn write(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()>;

    /// Write `message` followed by a line break
    fn write_line(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()>;

    /// Push buffered output to the underlying stream
    fn flush(&mut self) -> Result<()>;
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn write(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        (**self).write(message, background, foreground)
    }

    fn write_line(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        (**self).write_line(message, background, foreground)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
