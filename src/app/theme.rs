//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub border: Color,
    pub header_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub hidden_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(6),
            header_fg: Color::Indexed(3),
            selected_bg: Color::Indexed(8),
            selected_fg: Color::Indexed(15),
            hidden_fg: Color::Indexed(8),
            muted_fg: Color::Indexed(7),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 6] = [
            (&settings.border, &mut self.border),
            (&settings.header_fg, &mut self.header_fg),
            (&settings.selected_bg, &mut self.selected_bg),
            (&settings.selected_fg, &mut self.selected_fg),
            (&settings.hidden_fg, &mut self.hidden_fg),
            (&settings.muted_fg, &mut self.muted_fg),
        ];
        for (value, slot) in slots {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *slot = c;
            }
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
