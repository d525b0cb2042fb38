use super::*;

#[test]
fn uppercase_chars_normalize_to_shift() {
    let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
    let key = Key::from(event);
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn modifier_set_operations() {
    let mut mods = KeyModifiers::NONE;
    assert!(mods.is_empty());
    mods |= KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::ALT));
    assert!(!mods.contains(KeyModifiers::CONTROL));
    assert!((mods | KeyModifiers::CONTROL).contains(KeyModifiers::ALT | KeyModifiers::CONTROL));
    mods.remove(KeyModifiers::ALT);
    assert!(mods.is_empty());
}
