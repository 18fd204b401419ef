//! Console implementations

pub mod console;
pub mod memory;

pub use console::AnsiConsole;
pub use memory::{ConsoleWrite, MemoryConsole};

pub use crate::core::Console;
