//! Terminal ownership for the interactive form: raw mode on the alternate screen, released
//! exactly once, plus SIGINT/SIGTERM turned into a quit request the event loop polls.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Mode switches the form needs from the terminal.
pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and bracketed paste on stdout.
#[derive(Debug, Default)]
pub struct AltScreen;

impl ScreenMode for AltScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableBracketedPaste;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::Show;
        use crossterm::event::DisableBracketedPaste;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Raw mode first: a broken stdout must still leave a usable shell.
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            Show
        );
        raw.and(screen)
    }
}

struct Screen {
    mode: Box<dyn ScreenMode>,
    active: AtomicBool,
}

impl Screen {
    fn release(&self) -> io::Result<()> {
        if self.active.swap(false, Ordering::SeqCst) {
            self.mode.leave()
        } else {
            Ok(())
        }
    }
}

/// Holds the terminal in form mode until dropped.
pub struct TerminalGuard {
    screen: Arc<Screen>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::enter_with(AltScreen)
    }

    pub fn enter_with(mode: impl ScreenMode) -> io::Result<Self> {
        mode.enter()?;
        Ok(Self {
            screen: Arc::new(Screen {
                mode: Box::new(mode),
                active: AtomicBool::new(true),
            }),
        })
    }

    /// Lets a panic hook give the terminal back before the guard unwinds.
    pub fn release_handle(&self) -> ReleaseHandle {
        ReleaseHandle(Arc::clone(&self.screen))
    }

    pub fn is_active(&self) -> bool {
        self.screen.active.load(Ordering::SeqCst)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.screen.release() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Clone)]
pub struct ReleaseHandle(Arc<Screen>);

impl ReleaseHandle {
    pub fn release(&self) -> io::Result<()> {
        self.0.release()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> u8 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

const NO_SIGNAL: usize = 0;
const INTERRUPT: usize = 1;
const TERMINATE: usize = 2;

/// Pending termination request, set from the signal handler and taken by the event loop.
#[derive(Debug, Clone, Default)]
pub struct QuitSignals {
    pending: Arc<AtomicUsize>,
}

impl QuitSignals {
    #[cfg(unix)]
    pub fn register() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        let signals = Self::default();
        signal_hook::flag::register_usize(SIGINT, Arc::clone(&signals.pending), INTERRUPT)?;
        signal_hook::flag::register_usize(SIGTERM, Arc::clone(&signals.pending), TERMINATE)?;
        Ok(signals)
    }

    pub fn take(&self) -> Option<TerminationSignal> {
        match self.pending.swap(NO_SIGNAL, Ordering::SeqCst) {
            INTERRUPT => Some(TerminationSignal::Interrupt),
            TERMINATE => Some(TerminationSignal::Terminate),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
