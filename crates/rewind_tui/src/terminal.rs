//! Terminal setup and restore.
//!
//! Raw mode, the alternate screen and mouse capture are undone when the
//! [`RestoreGuard`] returned by [`enter`] drops, on early returns and
//! panics alike.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// Terminal driven by the event loop.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs a cleanup action once, when dropped.
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}

/// Switches the terminal into UI mode.
///
/// The guard is armed right after raw mode is enabled, so a failure in any
/// later step still restores the terminal.
pub fn enter() -> Result<(Tui, RestoreGuard<fn()>)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore as fn());

    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    Ok((terminal, guard))
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}

fn restore() {
    if let Err(e) = restore_terminal() {
        warn!(error = %e, "Failed to restore terminal");
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn setup_then_fail(restored: &Cell<u32>) -> Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        anyhow::bail!("alternate screen unavailable")
    }

    #[test]
    fn test_guard_restores_once_on_drop() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(setup_then_fail(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let restored = Cell::new(0);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            panic!("event loop crashed");
        }));

        assert!(outcome.is_err());
        assert_eq!(restored.get(), 1);
    }
}
