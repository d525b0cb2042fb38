use super::*;
use crate::kernel::{FormConfig, NoticeSeverity, Unit, UnitPolicy};

fn new_store() -> Store {
    Store::new(AppState::default())
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::InputInsert(ch));
    }
}

#[test]
fn convert_celsius_input_sets_results() {
    let mut store = new_store();
    type_text(&mut store, "25");
    let result = store.dispatch(Action::Convert);

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    let results = store.state().results.unwrap();
    assert_eq!(results.formatted(Unit::Celsius), "25.00 °C");
    assert_eq!(results.formatted(Unit::Fahrenheit), "77.00 °F");
    assert_eq!(results.formatted(Unit::Kelvin), "298.15 K");
    assert!(store.state().notice.is_none());
}

#[test]
fn convert_uses_selected_unit() {
    let mut store = new_store();
    type_text(&mut store, "98.6");
    store.dispatch(Action::SelectUnit(Unit::Fahrenheit));
    store.dispatch(Action::Convert);

    let results = store.state().results.unwrap();
    assert_eq!(results.formatted(Unit::Celsius), "37.00 °C");
    assert_eq!(results.formatted(Unit::Kelvin), "310.15 K");
}

#[test]
fn invalid_input_shows_notice_and_keeps_previous_results() {
    let mut store = new_store();
    type_text(&mut store, "10");
    store.dispatch(Action::Convert);
    let before = store.state().results;

    store.dispatch(Action::InputInsert('x'));
    store.dispatch(Action::Convert);

    let notice = store.state().notice.clone().unwrap();
    assert_eq!(notice.severity, NoticeSeverity::Error);
    assert_eq!(notice.title, "Invalid input");
    assert_eq!(store.state().results, before);
}

#[test]
fn empty_input_is_a_warning() {
    let mut store = new_store();
    store.dispatch(Action::Convert);
    let notice = store.state().notice.clone().unwrap();
    assert_eq!(notice.severity, NoticeSeverity::Warning);
    assert_eq!(notice.message, "Please enter a temperature value.");
}

#[test]
fn negative_kelvin_is_reported() {
    let mut store = new_store();
    type_text(&mut store, "-1");
    store.dispatch(Action::SelectUnit(Unit::Kelvin));
    store.dispatch(Action::Convert);
    assert_eq!(store.state().notice.as_ref().unwrap().title, "Invalid Kelvin");
    assert!(store.state().results.is_none());
}

#[test]
fn modal_notice_swallows_actions_until_dismissed() {
    let mut store = new_store();
    store.dispatch(Action::Convert);
    assert!(store.state().is_modal());

    let result = store.dispatch(Action::InputInsert('5'));
    assert!(!result.state_changed);
    assert_eq!(store.state().input.text, "");

    assert!(store.dispatch(Action::DismissNotice).state_changed);
    assert!(!store.state().is_modal());
    store.dispatch(Action::InputInsert('5'));
    assert_eq!(store.state().input.text, "5");
}

#[test]
fn quit_works_even_while_modal() {
    let mut store = new_store();
    store.dispatch(Action::ToggleAbout);
    assert!(store.state().about_visible);
    store.dispatch(Action::Quit);
    assert!(store.state().should_quit);
}

#[test]
fn about_closes_on_toggle_or_dismiss() {
    let mut store = new_store();
    store.dispatch(Action::ToggleAbout);
    store.dispatch(Action::ToggleAbout);
    assert!(!store.state().about_visible);

    store.dispatch(Action::ToggleAbout);
    store.dispatch(Action::DismissNotice);
    assert!(!store.state().about_visible);
}

#[test]
fn clear_resets_the_form() {
    let mut store = Store::new(AppState::new(FormConfig {
        default_unit: Unit::Fahrenheit,
        unit_policy: UnitPolicy::DefaultCelsius,
    }));
    type_text(&mut store, "300");
    store.dispatch(Action::SelectUnit(Unit::Kelvin));
    store.dispatch(Action::Convert);
    store.dispatch(Action::FocusNext);
    assert!(store.state().results.is_some());

    store.dispatch(Action::Clear);
    let state = store.state();
    assert_eq!(state.input.text, "");
    assert_eq!(state.input.cursor, 0);
    assert_eq!(state.unit, Some(Unit::Fahrenheit));
    assert!(state.results.is_none());
    assert_eq!(state.focus, FocusTarget::Input);
}

#[test]
fn deselected_unit_defaults_to_celsius() {
    let mut store = new_store();
    type_text(&mut store, "100");
    store.dispatch(Action::DeselectUnit);
    assert_eq!(store.state().unit, None);
    store.dispatch(Action::Convert);
    let results = store.state().results.unwrap();
    assert_eq!(results.formatted(Unit::Fahrenheit), "212.00 °F");
}

#[test]
fn deselected_unit_is_an_error_when_strict() {
    let mut store = Store::new(AppState::new(FormConfig {
        default_unit: Unit::Celsius,
        unit_policy: UnitPolicy::Strict,
    }));
    type_text(&mut store, "100");
    store.dispatch(Action::DeselectUnit);
    store.dispatch(Action::Convert);
    assert_eq!(store.state().notice.as_ref().unwrap().title, "Unit required");
}

#[test]
fn unit_cycling_starts_from_default_when_nothing_selected() {
    let mut store = new_store();
    store.dispatch(Action::NextUnit);
    assert_eq!(store.state().unit, Some(Unit::Fahrenheit));
    store.dispatch(Action::PrevUnit);
    store.dispatch(Action::PrevUnit);
    assert_eq!(store.state().unit, Some(Unit::Kelvin));

    store.dispatch(Action::DeselectUnit);
    store.dispatch(Action::NextUnit);
    assert_eq!(store.state().unit, Some(Unit::Celsius));
}

#[test]
fn select_same_unit_is_not_a_change() {
    let mut store = new_store();
    assert!(!store.dispatch(Action::SelectUnit(Unit::Celsius)).state_changed);
    assert!(store.dispatch(Action::SelectUnit(Unit::Kelvin)).state_changed);
}

#[test]
fn activating_buttons() {
    let mut store = new_store();
    type_text(&mut store, "0");
    store.dispatch(Action::SelectButton(Button::Convert));
    assert_eq!(store.state().focus, FocusTarget::Buttons);
    store.dispatch(Action::ActivateButton);
    assert!(store.state().results.is_some());

    store.dispatch(Action::SelectButton(Button::Clear));
    store.dispatch(Action::ActivateButton);
    assert!(store.state().results.is_none());

    store.dispatch(Action::SelectButton(Button::Exit));
    store.dispatch(Action::ActivateButton);
    assert!(store.state().should_quit);
}

#[test]
fn copy_results_emits_clipboard_effect() {
    let mut store = new_store();
    assert!(store.dispatch(Action::CopyResults).effects.is_empty());

    type_text(&mut store, "100");
    store.dispatch(Action::Convert);
    let result = store.dispatch(Action::CopyResults);
    assert_eq!(
        result.effects,
        vec![Effect::SetClipboardText(
            "100.00 °C | 212.00 °F | 373.15 K".to_string()
        )]
    );
}

#[test]
fn paste_inserts_text_at_cursor() {
    let mut store = new_store();
    type_text(&mut store, "5");
    store.dispatch(Action::InputCursorHome);
    store.dispatch(Action::InputPaste("-2".to_string()));
    assert_eq!(store.state().input.text, "-25");
    assert_eq!(store.state().input.cursor, 2);
}
