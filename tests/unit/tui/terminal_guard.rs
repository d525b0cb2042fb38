use super::*;
use std::sync::Mutex;

#[derive(Clone, Default)]
struct RecordingScreen {
    log: Arc<Mutex<Vec<&'static str>>>,
    refuse_enter: bool,
}

impl RecordingScreen {
    fn entries(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }
}

impl ScreenMode for RecordingScreen {
    fn enter(&self) -> io::Result<()> {
        if self.refuse_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "not a terminal"));
        }
        self.log.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.log.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn dropping_the_guard_leaves_form_mode() {
    let screen = RecordingScreen::default();
    let guard = TerminalGuard::enter_with(screen.clone()).unwrap();
    assert!(guard.is_active());
    assert_eq!(screen.entries(), ["enter"]);

    drop(guard);
    assert_eq!(screen.entries(), ["enter", "leave"]);
}

#[test]
fn release_from_panic_hook_then_drop_leaves_once() {
    let screen = RecordingScreen::default();
    let guard = TerminalGuard::enter_with(screen.clone()).unwrap();
    let handle = guard.release_handle();

    handle.release().unwrap();
    assert!(!guard.is_active());
    handle.release().unwrap();
    drop(guard);

    assert_eq!(screen.entries(), ["enter", "leave"]);
}

#[test]
fn refused_enter_never_leaves() {
    let screen = RecordingScreen {
        refuse_enter: true,
        ..RecordingScreen::default()
    };
    assert!(TerminalGuard::enter_with(screen.clone()).is_err());
    assert!(screen.entries().is_empty());
}

#[test]
fn quit_signal_is_taken_once() {
    let signals = QuitSignals::default();
    assert_eq!(signals.take(), None);

    signals.pending.store(TERMINATE, Ordering::SeqCst);
    let seen_by_loop = signals.clone();
    assert_eq!(seen_by_loop.take(), Some(TerminationSignal::Terminate));
    assert_eq!(signals.take(), None);
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
