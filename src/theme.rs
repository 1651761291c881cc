//! Light/dark theme context shared by every view

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Where the active theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    CommandLine,
    Config,
    Terminal,
    Default,
    Toggled,
}

/// Resolved colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                surface: Color::Rgb(31, 41, 55),
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                focus: Color::Cyan,
                primary: Color::LightBlue,
                secondary: Color::LightMagenta,
                accent: Color::LightGreen,
                warning: Color::Yellow,
                danger: Color::LightRed,
            },
            Theme::Light => Self {
                background: Color::White,
                surface: Color::Rgb(243, 244, 246),
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Gray,
                focus: Color::Blue,
                primary: Color::Blue,
                secondary: Color::Magenta,
                accent: Color::Green,
                warning: Color::Rgb(161, 98, 7),
                danger: Color::Red,
            },
        }
    }
}

/// Parse the `COLORFGBG` convention ("fg;bg" or "fg;default;bg").
/// Background indices 0-6 and 8 are dark, the rest light.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

/// Process-wide theme state. Owned by the app, read by every draw call,
/// written only by the toggle action.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Theme,
    source: ThemeSource,
}

impl ThemeContext {
    pub fn new(theme: Theme, source: ThemeSource) -> Self {
        Self { theme, source }
    }

    /// Pick the initial theme: command line, then config, then the
    /// terminal's own hint, then dark.
    pub fn resolve(
        cli: Option<Theme>,
        config: Option<Theme>,
        colorfgbg: Option<&str>,
    ) -> Self {
        if let Some(theme) = cli {
            return Self::new(theme, ThemeSource::CommandLine);
        }
        if let Some(theme) = config {
            return Self::new(theme, ThemeSource::Config);
        }
        if let Some(theme) = colorfgbg.and_then(theme_from_colorfgbg) {
            return Self::new(theme, ThemeSource::Terminal);
        }
        Self::new(Theme::default(), ThemeSource::Default)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.source = ThemeSource::Toggled;
        tracing::info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default(), ThemeSource::Default)
    }
}
