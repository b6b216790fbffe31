//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//! - Leave raw mode and the alternate screen via Drop.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the session.
//! - Drop implementation must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores the terminal when dropped.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// `mouse_captured` records whether mouse capture was enabled during setup.
    pub fn new(mouse_captured: bool) -> Self {
        Self { mouse_captured }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}
