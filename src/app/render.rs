use super::converter::ConverterApp;
use crate::kernel::format::PLACEHOLDER;
use crate::kernel::{Button, FocusTarget, NoticeSeverity, Unit};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE: &str = "Temperature Converter — C ⇄ F ⇄ K";
pub const FOOTER_HINT: &str = "Enter value → choose unit → press Convert (Enter). Esc to Clear.";
const MENU_LINE: &str = "File: Exit (Ctrl+Q)   Help: About (F1)   Copy results (Ctrl+Y)";
const ABOUT_LINES: [&str; 3] = [
    "Temperature Converter",
    "Celsius, Fahrenheit, Kelvin",
    "Made with Rust and ratatui",
];

const FIELD_LABEL: &str = "Temperature: ";
const FIELD_WIDTH: u16 = 14;
const LABEL_COLUMN: usize = 12;

impl ConverterApp {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(
                format!(" {TITLE} "),
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // menu
                Constraint::Length(1),
                Constraint::Length(1), // input + unit
                Constraint::Length(1),
                Constraint::Length(1), // buttons
                Constraint::Length(1), // separator
                Constraint::Length(3), // results
                Constraint::Min(0),
                Constraint::Length(1), // footer
            ])
            .split(inner);

        self.render_menu(frame, rows[0]);
        self.render_input_row(frame, rows[2]);
        self.render_buttons(frame, rows[4]);
        frame.render_widget(
            Paragraph::new("─".repeat(rows[5].width as usize))
                .style(Style::default().fg(self.theme.border)),
            rows[5],
        );
        self.render_results(frame, rows[6]);
        frame.render_widget(
            Paragraph::new(FOOTER_HINT).style(Style::default().fg(self.theme.muted_fg)),
            rows[8],
        );

        self.render_notice(frame, area);
        self.render_about(frame, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(MENU_LINE).style(Style::default().fg(self.theme.muted_fg)),
            area,
        );
    }

    fn render_input_row(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let input_focused = state.focus == FocusTarget::Input && !state.is_modal();
        let unit_focused = state.focus == FocusTarget::Unit && !state.is_modal();

        let (visible, cursor_col) = visible_field_text(
            &state.input.text,
            state.input.cursor,
            FIELD_WIDTH as usize,
        );
        let pad = (FIELD_WIDTH as usize).saturating_sub(visible.width());
        let field_style = if input_focused {
            Style::default()
                .fg(self.theme.result_fg)
                .bg(self.theme.selected_bg)
        } else {
            Style::default().fg(self.theme.result_fg)
        };

        let unit_label = state
            .unit
            .map(Unit::selector_label)
            .unwrap_or("(none)");
        let unit_style = if unit_focused {
            Style::default()
                .fg(self.theme.accent_fg)
                .bg(self.theme.selected_bg)
        } else {
            Style::default().fg(self.theme.accent_fg)
        };

        let line = Line::from(vec![
            Span::raw(FIELD_LABEL),
            Span::styled("[", Style::default().fg(self.focus_color(input_focused))),
            Span::styled(format!("{visible}{}", " ".repeat(pad)), field_style),
            Span::styled("]", Style::default().fg(self.focus_color(input_focused))),
            Span::raw("  Unit: "),
            Span::styled(format!("◂ {unit_label} ▸"), unit_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if input_focused {
            let x = area.x + FIELD_LABEL.width() as u16 + 1 + cursor_col as u16;
            if x < area.x + area.width {
                frame.set_cursor_position((x, area.y));
            }
        }
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let buttons_focused = state.focus == FocusTarget::Buttons && !state.is_modal();

        let mut spans = vec![Span::raw(" ".repeat(FIELD_LABEL.width()))];
        for button in Button::ALL {
            let selected = buttons_focused && state.selected_button == button;
            let style = if selected {
                Style::default()
                    .fg(self.theme.focus_border)
                    .bg(self.theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.result_fg)
            };
            spans.push(Span::styled(format!("[ {} ]", button.label()), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let results = self.store.state().results;
        let lines: Vec<Line> = Unit::ALL
            .iter()
            .map(|unit| {
                let value = results
                    .map(|r| r.formatted(*unit))
                    .unwrap_or_else(|| PLACEHOLDER.to_string());
                let label = format!("{}:", unit.label());
                Line::from(vec![
                    Span::raw(format!("{label:<LABEL_COLUMN$} ")),
                    Span::styled(
                        value,
                        Style::default()
                            .fg(self.theme.result_fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect) {
        let Some(notice) = &self.store.state().notice else {
            return;
        };

        let color = match notice.severity {
            NoticeSeverity::Warning => self.theme.warning_fg,
            NoticeSeverity::Error => self.theme.error_fg,
        };
        let lines = vec![
            Line::from(notice.message.as_str()),
            Line::raw(""),
            self.hint_line(),
        ];
        self.render_popup(frame, area, &notice.title, color, lines);
    }

    fn render_about(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        if !state.about_visible || state.notice.is_some() {
            return;
        }

        let mut lines: Vec<Line> = ABOUT_LINES.iter().map(|l| Line::from(*l)).collect();
        lines.push(Line::raw(""));
        lines.push(self.hint_line());
        self.render_popup(frame, area, "About", self.theme.focus_border, lines);
    }

    fn hint_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(self.theme.accent_fg)),
            Span::raw(" OK"),
        ])
    }

    fn render_popup(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        border: ratatui::style::Color,
        lines: Vec<Line>,
    ) {
        let width = 56.min(area.width.saturating_sub(4));
        let height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));
        if width < 20 || height < 3 {
            return;
        }

        let popup = centered(area, width, height);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(border).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }

    fn focus_color(&self, focused: bool) -> ratatui::style::Color {
        if focused {
            self.theme.focus_border
        } else {
            self.theme.border
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Slice of `text` that fits `width` columns with the cursor kept in view, plus the cursor
/// column inside that slice.
pub(super) fn visible_field_text(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let cursor = cursor.min(text.len());
    let before = &text[..cursor];

    // Reserve one column for the cursor cell when it sits at the end.
    let budget = width.saturating_sub(1).max(1);
    let mut start = 0;
    while before[start..].width() > budget {
        let step = before[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        start += step;
    }

    let cursor_col = before[start..].width();
    let mut visible = String::new();
    let mut used = 0;
    for ch in text[start..].chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(ch);
    }
    (visible, cursor_col)
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
