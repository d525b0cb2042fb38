use super::*;
use crossterm::event::{
    Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyModifiers as CtMods,
    MouseEvent, MouseEventKind,
};

#[test]
fn key_events_translate() {
    let event = into_input_event(CtEvent::Key(CtKeyEvent::new(
        CtKeyCode::Char('q'),
        CtMods::CONTROL,
    )));
    assert_eq!(
        event,
        Some(InputEvent::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        )))
    );
}

#[test]
fn backtab_drops_shift() {
    let key = into_key_event(CtKeyEvent::new(CtKeyCode::BackTab, CtMods::SHIFT));
    assert_eq!(key.code, KeyCode::BackTab);
    assert!(key.modifiers.is_empty());
}

#[test]
fn unsupported_keys_map_to_unknown() {
    let key = into_key_event(CtKeyEvent::new(CtKeyCode::CapsLock, CtMods::NONE));
    assert_eq!(key.code, KeyCode::Unknown);
}

#[test]
fn mouse_events_are_dropped() {
    let mouse = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: CtMods::NONE,
    });
    assert_eq!(into_input_event(mouse), None);
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(CtEvent::Paste("25".to_string())),
        Some(InputEvent::Paste("25".to_string()))
    );
    assert_eq!(
        into_input_event(CtEvent::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
