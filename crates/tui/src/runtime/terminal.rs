//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, with optional mouse capture.
//! - Ensure terminal state is restored on exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing (see `app::render`).
//! - Reading terminal events (done by the input task in `main.rs`).
//!
//! Invariants / Assumptions:
//! - The guard must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Restores raw mode, the alternate screen and mouse capture on drop,
/// including during a panic unwind.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode and return the guard that undoes it.
    ///
    /// Mouse capture is skipped when `no_mouse` is set.
    pub fn enter(no_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(Self { no_mouse })
    }

    /// Restore the terminal, reporting the first failure.
    pub fn restore(&self) -> io::Result<()> {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.no_mouse {
            execute!(stdout, LeaveAlternateScreen)
        } else {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic. Restoring twice is
        // harmless after a normal exit.
        let _ = self.restore();
    }
}
