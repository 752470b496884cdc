use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    /// Focused borders and the active form field.
    pub accent: Style,
    /// Days of the grid that fall outside the displayed month.
    pub outside: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_light(&self) -> bool {
        self.name == "light"
    }

    /// Name of the preset the runtime toggle switches to.
    pub fn opposite_preset(&self) -> &'static str {
        if self.is_light() {
            "dark"
        } else {
            "light"
        }
    }

    fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Cyan),
            outside: Style::default().fg(Color::DarkGray),
        }
    }

    fn light() -> Self {
        Self {
            name: "light".to_string(),
            today: Style::default().fg(Color::White).bg(Color::Rgb(37, 99, 235)), // blue-600
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(191, 219, 254)), // blue-200
            header: Style::default().fg(Color::Rgb(17, 24, 39)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(107, 114, 128)),
            border: Style::default().fg(Color::Rgb(209, 213, 219)),
            status: Style::default()
                .fg(Color::Rgb(17, 24, 39))
                .bg(Color::Rgb(229, 231, 235)),
            highlight: Style::default()
                .bg(Color::Rgb(219, 234, 254))
                .add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Rgb(37, 99, 235)),
            outside: Style::default().fg(Color::Rgb(156, 163, 175)),
        }
    }
}

// ── TOML config types ──

/// `[theme]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub highlight_bg: Option<String>,
    pub accent_fg: Option<String>,
}

impl ThemeConfig {
    /// Preset (dark when unset or unknown) with per-color overrides on top.
    pub fn to_theme(&self) -> Theme {
        let mut theme = Theme::preset(self.preset.as_deref().unwrap_or("dark"));

        let fg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.fg(c);
            }
        };
        fg(&mut theme.today, &self.today_fg);
        fg(&mut theme.selected, &self.selected_fg);
        fg(&mut theme.header, &self.header_fg);
        fg(&mut theme.dim, &self.dim_fg);
        fg(&mut theme.border, &self.border_fg);
        fg(&mut theme.status, &self.status_fg);
        fg(&mut theme.accent, &self.accent_fg);

        let bg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.bg(c);
            }
        };
        bg(&mut theme.today, &self.today_bg);
        bg(&mut theme.selected, &self.selected_bg);
        bg(&mut theme.status, &self.status_bg);
        bg(&mut theme.highlight, &self.highlight_bg);

        theme
    }
}

/// `#rrggbb` or one of the 16 terminal color names, case-insensitive.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let color = match s.to_ascii_lowercase().replace("grey", "gray").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_color("#3B82F6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_color(" red "), Some(Color::Red));
        assert_eq!(parse_color("DarkGrey"), Some(Color::DarkGray));
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#fff"), None);
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = ThemeConfig {
            preset: Some("light".to_string()),
            today_bg: Some("#000000".to_string()),
            accent_fg: Some("magenta".to_string()),
            ..Default::default()
        };
        let theme = config.to_theme();
        assert_eq!(theme.name, "light");
        assert_eq!(theme.today.bg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(theme.today.fg, Some(Color::White));
        assert_eq!(theme.accent.fg, Some(Color::Magenta));
    }

    #[test]
    fn opposite_preset_alternates_light_and_dark() {
        let dark = Theme::default();
        assert!(!dark.is_light());
        assert_eq!(dark.opposite_preset(), "light");
        assert_eq!(Theme::preset("light").opposite_preset(), "dark");
        assert_eq!(Theme::preset("solarized").name, "dark");
    }
}
