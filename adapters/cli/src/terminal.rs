//! Crossterm backend that draws frames on the alternate screen.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use hazard_dash_rendering::{Frame, RenderingBackend};

/// Terminal in raw mode showing the alternate screen.
///
/// Dropping the backend restores the terminal to the state it was found in.
pub(crate) struct TerminalBackend {
    stdout: Stdout,
}

impl TerminalBackend {
    /// Switches the terminal into raw mode on the alternate screen.
    pub(crate) fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw terminal mode")?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(error).context("entering the alternate screen");
        }
        Ok(Self { stdout })
    }
}

impl RenderingBackend for TerminalBackend {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;
        for (row, line) in frame.lines().iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.stdout, MoveTo(0, row), Print(line))?;
        }
        self.stdout.flush().context("flushing frame to the terminal")
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
