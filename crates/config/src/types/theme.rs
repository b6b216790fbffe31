//! Theme types for the guided tour.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` consumed by the renderer.
//!
//! Does NOT handle:
//! - Actual rendering (see the tour crate's `ui` module).
//!
//! Invariants:
//! - `ColorTheme` is the serialized representation; `Theme` is runtime only.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!(
                "unknown theme '{other}' (expected default, light, high_contrast or monochrome)"
            )),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,

    // Host page content
    pub content_border: Color,
    pub content_label: Color,

    // Tour chrome
    pub backdrop: Color,
    pub highlight: Color,
    pub panel_border: Color,
    pub panel_title: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub disabled: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                content_border: Color::Blue,
                content_label: Color::White,
                backdrop: Color::DarkGray,
                highlight: Color::Yellow,
                panel_border: Color::Cyan,
                panel_title: Color::Cyan,
                button_fg: Color::Black,
                button_bg: Color::Cyan,
                disabled: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                content_border: Color::Blue,
                content_label: Color::Black,
                backdrop: Color::Gray,
                highlight: Color::Magenta,
                panel_border: Color::Blue,
                panel_title: Color::Blue,
                button_fg: Color::White,
                button_bg: Color::Blue,
                disabled: Color::Gray,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                content_border: Color::White,
                content_label: Color::White,
                backdrop: Color::Gray,
                highlight: Color::LightYellow,
                panel_border: Color::White,
                panel_title: Color::LightYellow,
                button_fg: Color::Black,
                button_bg: Color::White,
                disabled: Color::Gray,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::Reset,
                text_dim: Color::Reset,
                content_border: Color::Reset,
                content_label: Color::Reset,
                backdrop: Color::Reset,
                highlight: Color::Reset,
                panel_border: Color::Reset,
                panel_title: Color::Reset,
                button_fg: Color::Reset,
                button_bg: Color::Reset,
                disabled: Color::Reset,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
