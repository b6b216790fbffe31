//! Presentation settings for a tour.
//!
//! Invariants:
//! - Every field has a default so partial `settings` blocks deserialize.
//! - Validation of ranges happens in the loader, not at deserialization.

use serde::{Deserialize, Serialize};

use super::theme::ColorTheme;
use crate::constants::{
    DEFAULT_BACK_LABEL, DEFAULT_DONE_LABEL, DEFAULT_HIGHLIGHT_PADDING, DEFAULT_NEXT_LABEL,
    DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_OFFSET_X, DEFAULT_PANEL_OFFSET_Y, DEFAULT_PANEL_WIDTH,
};

/// Geometry, labels and theme used while presenting a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourSettings {
    /// Cells added around the highlighted target on every side.
    pub highlight_padding: i32,
    /// Horizontal gap between the target and the panel.
    pub panel_offset_x: i32,
    /// Vertical gap between the target's bottom edge and the panel.
    pub panel_offset_y: i32,
    pub panel_width: u16,
    pub panel_height: u16,
    pub next_label: String,
    pub done_label: String,
    pub back_label: String,
    /// Show a "Step i of N" caption in the panel footer.
    pub show_progress: bool,
    pub theme: ColorTheme,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            highlight_padding: DEFAULT_HIGHLIGHT_PADDING,
            panel_offset_x: DEFAULT_PANEL_OFFSET_X,
            panel_offset_y: DEFAULT_PANEL_OFFSET_Y,
            panel_width: DEFAULT_PANEL_WIDTH,
            panel_height: DEFAULT_PANEL_HEIGHT,
            next_label: DEFAULT_NEXT_LABEL.to_string(),
            done_label: DEFAULT_DONE_LABEL.to_string(),
            back_label: DEFAULT_BACK_LABEL.to_string(),
            show_progress: true,
            theme: ColorTheme::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: TourSettings =
            serde_json::from_str(r#"{"highlight_padding": 2, "theme": "high_contrast"}"#).unwrap();
        assert_eq!(settings.highlight_padding, 2);
        assert_eq!(settings.theme, ColorTheme::HighContrast);
        assert_eq!(settings.next_label, "Next");
        assert_eq!(settings.panel_width, DEFAULT_PANEL_WIDTH);
    }

    #[test]
    fn test_default_labels() {
        let settings = TourSettings::default();
        assert_eq!(settings.next_label, "Next");
        assert_eq!(settings.done_label, "Done");
        assert_eq!(settings.back_label, "Back");
    }
}
