//! Standard output is the sink every logger starts with.

use super::Output;
use std::io::{self, Write};

/// Writes whole lines to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        // Holding the stdout lock keeps other `println!` users from splitting the line.
        io::stdout().lock().write_all(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
