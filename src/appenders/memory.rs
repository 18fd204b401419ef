//! In-memory console that records everything written to it

use crate::core::{Console, ConsoleColor, LoggerError, Result, NEW_LINE};
use parking_lot::Mutex;
use std::sync::Arc;

/// One `write`/`write_line` call as seen by the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleWrite {
    pub text: String,
    pub background: Option<ConsoleColor>,
    pub foreground: Option<ConsoleColor>,
}

#[derive(Debug, Default)]
struct MemoryState {
    writes: Vec<ConsoleWrite>,
    flushes: usize,
    fail_writes: bool,
}

/// Recording console for tests and embedding.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// processor and inspect the other.
///
/// # Example
///
/// ```
/// use rust_console_logger::appenders::MemoryConsole;
/// use rust_console_logger::core::Console;
///
/// let console = MemoryConsole::new();
/// let mut writer = console.clone();
/// writer.write_line("hello", None, None).unwrap();
/// assert_eq!(console.lines(), vec!["hello"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, concatenated
    pub fn contents(&self) -> String {
        self.state
            .lock()
            .writes
            .iter()
            .map(|w| w.text.as_str())
            .collect()
    }

    /// Contents split into lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn writes(&self) -> Vec<ConsoleWrite> {
        self.state.lock().writes.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.state.lock().flushes
    }

    /// Make subsequent writes fail with a writer error
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.writes.clear();
        state.flushes = 0;
    }

    fn record(
        &self,
        text: String,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(LoggerError::writer("memory console is failing writes"));
        }
        state.writes.push(ConsoleWrite {
            text,
            background,
            foreground,
        });
        Ok(())
    }
}

impl Console for MemoryConsole {
    fn write(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        self.record(message.to_string(), background, foreground)
    }

    fn write_line(
        &mut self,
        message: &str,
        background: Option<ConsoleColor>,
        foreground: Option<ConsoleColor>,
    ) -> Result<()> {
        self.record(format!("{}{}", message, NEW_LINE), background, foreground)
    }

    fn flush(&mut self) -> Result<()> {
        self.state.lock().flushes += 1;
        Ok(())
    }
}
