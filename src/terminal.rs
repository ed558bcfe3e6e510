//! Terminal setup and restoration

use crate::error::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Undoes the setup steps that have completed so far
struct RestoreGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<W: Write> Drop for RestoreGuard<W> {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(self.out, LeaveAlternateScreen, Show);
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}

/// Owns the ratatui terminal for the dashboard's lifetime.
///
/// Raw mode and the alternate screen are released on drop, and also when
/// construction fails part way.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _restore: RestoreGuard<Stdout>,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut restore = RestoreGuard {
            out: io::stdout(),
            raw_mode: true,
            alternate_screen: false,
        };

        execute!(restore.out, EnterAlternateScreen)?;
        restore.alternate_screen = true;

        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            _restore: restore,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        drop(RestoreGuard {
            out: &mut out,
            raw_mode: false,
            alternate_screen: true,
        });

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen not left: {:?}", written);
        assert!(written.contains("\x1b[?25h"), "cursor not shown: {:?}", written);
    }

    #[test]
    fn test_guard_skips_steps_that_never_ran() {
        let mut out = Vec::new();
        drop(RestoreGuard {
            out: &mut out,
            raw_mode: false,
            alternate_screen: false,
        });

        assert!(out.is_empty());
    }
}
