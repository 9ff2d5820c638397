//! Terminal session: raw mode and alternate screen for the lifetime of a value.
//!
//! Entering a session puts the terminal into raw mode, optionally switches
//! to the alternate screen and hides the cursor. Dropping the session
//! restores everything, including on early returns.

use super::event::InputEvent;
use super::output::OutputBuffer;
use crate::error::Result;
use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Configuration for a terminal session.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to hide the hardware cursor (widgets draw their own caret).
    pub hide_cursor: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// An active terminal session.
pub struct Terminal {
    config: TerminalConfig,
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    /// Enter a session with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn enter() -> Result<Self> {
        Self::with_config(TerminalConfig::default())
    }

    /// Enter a session with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: TerminalConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }

        debug!(width, height, "terminal session started");

        Ok(Self {
            config,
            stdout,
            width,
            height,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Record a new size after a resize event.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Write an output buffer to the terminal in one syscall.
    pub fn present(&mut self, output: &OutputBuffer) -> Result<()> {
        output.flush_to(&mut self.stdout)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next terminal event.
    ///
    /// Returns `Ok(None)` on timeout or for events that are not reported
    /// (mouse, paste, key releases). Resizes update the stored size.
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let event = InputEvent::from_crossterm(event::read()?);
        if let Some(InputEvent::Resize { width, height }) = event {
            self.handle_resize(width, height);
        }
        Ok(event)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore terminal state
        if self.config.hide_cursor {
            let _ = execute!(self.stdout, cursor::Show);
        }
        if self.config.alternate_screen {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        debug!("terminal session restored");
    }
}
