use super::*;
use crate::app::converter::EventResult;
use crate::app::UiTheme;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::AppState;
use crate::services::KeybindingService;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn new_app() -> ConverterApp {
    ConverterApp::with_parts(
        AppState::default(),
        KeybindingService::new(),
        UiTheme::default(),
    )
}

fn press(app: &mut ConverterApp, code: KeyCode) -> EventResult {
    app.handle_input(&InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(app: &mut ConverterApp, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn render_lines(app: &ConverterApp, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            app.render(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn empty_form_shows_placeholders() {
    let app = new_app();
    let lines = render_lines(&app, 80, 20);

    assert!(screen_contains(&lines, "Temperature Converter"));
    assert!(screen_contains(&lines, "Temperature:"));
    assert!(screen_contains(&lines, "Celsius (°C)"));
    assert!(screen_contains(&lines, "[ Convert ]"));
    assert!(screen_contains(&lines, "[ Clear ]"));
    assert!(screen_contains(&lines, "[ Exit ]"));
    assert!(screen_contains(&lines, "Esc to Clear."));
    let placeholders = lines
        .iter()
        .filter(|line| line.contains(PLACEHOLDER))
        .count();
    // Title contains one dash as well.
    assert!(placeholders >= 3);
}

#[test]
fn results_render_with_two_decimals() {
    let mut app = new_app();
    type_text(&mut app, "25");
    press(&mut app, KeyCode::Enter);

    let lines = render_lines(&app, 80, 20);
    assert!(screen_contains(&lines, "Celsius:     25.00 °C"));
    assert!(screen_contains(&lines, "Fahrenheit:  77.00 °F"));
    assert!(screen_contains(&lines, "Kelvin:      298.15 K"));
}

#[test]
fn notice_popup_shows_title_and_message() {
    let mut app = new_app();
    type_text(&mut app, "-5");
    app.handle_input(&InputEvent::Key(KeyEvent::new(
        KeyCode::Tab,
        KeyModifiers::NONE,
    )));
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Enter);

    let lines = render_lines(&app, 80, 20);
    assert!(screen_contains(&lines, "Invalid Kelvin"));
    assert!(screen_contains(&lines, "Kelvin cannot be negative"));
    assert!(screen_contains(&lines, "[Enter] OK"));
}

#[test]
fn about_popup() {
    let mut app = new_app();
    press(&mut app, KeyCode::F(1));
    let lines = render_lines(&app, 80, 20);
    assert!(screen_contains(&lines, "About"));
    assert!(screen_contains(&lines, "Celsius, Fahrenheit, Kelvin"));
}

#[test]
fn tiny_area_does_not_panic() {
    let app = new_app();
    render_lines(&app, 3, 2);
    render_lines(&app, 20, 5);
}

#[test]
fn visible_field_scrolls_to_keep_cursor_in_view() {
    assert_eq!(visible_field_text("25", 2, 14), ("25".to_string(), 2));

    let long = "1234567890123456";
    let (visible, col) = visible_field_text(long, long.len(), 10);
    assert_eq!(col, 9);
    assert_eq!(visible, "890123456");

    let (visible, col) = visible_field_text(long, 0, 10);
    assert_eq!(col, 0);
    assert_eq!(visible, "1234567890");
}
