//! Form colors, overridable from settings and downgraded for limited terminals.

use crate::services::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub border: Color,
    pub focus_border: Color,
    pub header_fg: Color,
    pub accent_fg: Color,
    pub result_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
    pub selected_bg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TCONV_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),       // DarkGray
            focus_border: Color::Indexed(6), // Cyan
            header_fg: Color::Indexed(6),
            accent_fg: Color::Indexed(3),  // Yellow
            result_fg: Color::Indexed(15), // White
            muted_fg: Color::Indexed(8),
            error_fg: Color::Indexed(1),
            warning_fg: Color::Indexed(3),
            selected_bg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme.adapt_to_terminal_capabilities();
        theme
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&mut self.border, &settings.border),
            (&mut self.focus_border, &settings.focus_border),
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.accent_fg, &settings.accent_fg),
            (&mut self.result_fg, &settings.result_fg),
            (&mut self.muted_fg, &settings.muted_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.warning_fg, &settings.warning_fg),
            (&mut self.selected_bg, &settings.selected_bg),
        ];

        for (slot, value) in overrides {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(color = %value, "ignoring unknown theme color"),
            }
        }
    }

    fn colors_mut(&mut self) -> [&mut Color; 9] {
        [
            &mut self.border,
            &mut self.focus_border,
            &mut self.header_fg,
            &mut self.accent_fg,
            &mut self.result_fg,
            &mut self.muted_fg,
            &mut self.error_fg,
            &mut self.warning_fg,
            &mut self.selected_bg,
        ]
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(nearest_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..=255)
        .min_by_key(|index| {
            let (pr, pg, pb) = ansi256_index_to_rgb(*index);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn nearest_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..16)
        .min_by_key(|index| color_distance_sq((r, g, b), ANSI16_RGB[*index as usize]))
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" | "dark_grey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
