//! Color themes
//!
//! A theme supplies ratatui styles for the player and SGR-colored strings
//! for `trace` and `config` output.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme preset, as stored in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Studio,
    Classic,
    Ocean,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeName::Studio => "studio",
            ThemeName::Classic => "classic",
            ThemeName::Ocean => "ocean",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "studio" => Ok(ThemeName::Studio),
            "classic" => Ok(ThemeName::Classic),
            "ocean" => Ok(ThemeName::Ocean),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Colors for the player widgets and the plain-text CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Body text
    pub text_primary: Color,
    /// Hints, narration, key descriptions
    pub text_secondary: Color,
    /// Headings, key names, the highlighted listing line
    pub accent: Color,
    /// Bars outside the active range
    pub bar_idle: Color,
    /// Bars inside the active range
    pub bar_range: Color,
    /// Bars under inspection (i / j pointers)
    pub bar_selected: Color,
    /// The pivot bar
    pub bar_pivot: Color,
    /// Every bar once sorting is complete
    pub bar_sorted: Color,
    /// Confirmation messages
    pub success: Color,
    /// Whether the text helpers emit SGR escapes
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::studio()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Studio => Self::studio(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    /// Emerald accents, cyan pointers, amber pivot.
    pub fn studio() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            bar_idle: Color::DarkGray,
            bar_range: Color::Gray,
            bar_selected: Color::Cyan,
            bar_pivot: Color::Yellow,
            bar_sorted: Color::LightGreen,
            success: Color::Green,
            ansi: true,
        }
    }

    /// White text, blue pointers, red pivot.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            accent: Color::Yellow,
            bar_range: Color::White,
            bar_selected: Color::Blue,
            bar_pivot: Color::Red,
            bar_sorted: Color::Green,
            ..Self::studio()
        }
    }

    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            accent: Color::LightCyan,
            bar_range: Color::Blue,
            bar_selected: Color::LightCyan,
            bar_pivot: Color::LightMagenta,
            bar_sorted: Color::LightBlue,
            ..Self::studio()
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    // === Widget styles ===

    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::new().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    /// Key names in the footer, the highlighted listing line.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    // === Plain-text output ===

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    /// Wrap `text` in the SGR foreground code for `color`. Colors with no
    /// 16-color code (RGB, indexed) leave the text untouched.
    fn paint(&self, color: Color, text: &str) -> String {
        match sgr_foreground(color) {
            Some(code) if self.ansi => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }
}

/// SGR foreground parameter for the 16 standard terminal colors.
fn sgr_foreground(color: Color) -> Option<u8> {
    let code = match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
        _ => return None,
    };
    Some(code)
}

/// Whether CLI output on stdout should be colored.
///
/// Honors `NO_COLOR` and turns color off when stdout is not a terminal.
pub fn stdout_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}
