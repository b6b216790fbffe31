//! Tour loader builder implementation.
//!
//! Responsibilities:
//! - Merge a tour file, environment overrides and explicit builder overrides.
//! - Validate the merged `TourFile`.
//!
//! Does NOT handle:
//! - Parsing individual environment variables (delegated to env.rs).
//! - Reading files from disk (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder setters take precedence over environment variables.
//! - Environment variables take precedence over file values.
//! - Steps from a file replace fallback steps given via `with_steps`.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::read_tour_file;
use crate::constants::{MAX_HIGHLIGHT_PADDING, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};
use crate::types::{ColorTheme, StepSpec, TourFile, TourSettings};

#[derive(Debug, Default, Clone)]
struct SettingsOverrides {
    highlight_padding: Option<i32>,
    panel_width: Option<u16>,
    panel_height: Option<u16>,
    show_progress: Option<bool>,
    theme: Option<ColorTheme>,
}

impl SettingsOverrides {
    fn apply(&self, settings: &mut TourSettings) {
        if let Some(padding) = self.highlight_padding {
            settings.highlight_padding = padding;
        }
        if let Some(width) = self.panel_width {
            settings.panel_width = width;
        }
        if let Some(height) = self.panel_height {
            settings.panel_height = height;
        }
        if let Some(show) = self.show_progress {
            settings.show_progress = show;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
    }
}

/// Loader that builds a `TourFile` from a file, the environment and explicit overrides.
#[derive(Debug, Default)]
pub struct TourLoader {
    path: Option<PathBuf>,
    file: Option<TourFile>,
    fallback_steps: Option<Vec<StepSpec>>,
    env: SettingsOverrides,
    explicit: SettingsOverrides,
}

impl TourLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the tour file read by [`TourLoader::from_file`].
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Steps used when no tour file provides any.
    pub fn with_steps(mut self, steps: Vec<StepSpec>) -> Self {
        self.fallback_steps = Some(steps);
        self
    }

    pub fn with_highlight_padding(mut self, padding: i32) -> Self {
        self.explicit.highlight_padding = Some(padding);
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.explicit.theme = Some(theme);
        self
    }

    /// Read the tour file, if a path was configured.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = &self.path {
            let file = read_tour_file(path)?;
            tracing::debug!(
                path = %path.display(),
                steps = file.steps.len(),
                "Loaded tour file"
            );
            self.file = Some(file);
        }
        Ok(self)
    }

    /// Apply `TOUR_*` environment variable overrides.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub(crate) fn set_highlight_padding(&mut self, padding: Option<i32>) {
        self.env.highlight_padding = padding;
    }

    pub(crate) fn set_panel_width(&mut self, width: Option<u16>) {
        self.env.panel_width = width;
    }

    pub(crate) fn set_panel_height(&mut self, height: Option<u16>) {
        self.env.panel_height = height;
    }

    pub(crate) fn set_show_progress(&mut self, show: Option<bool>) {
        self.env.show_progress = show;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.env.theme = theme;
    }

    /// Merge all sources and validate the result.
    pub fn build(self) -> Result<TourFile, ConfigError> {
        let (mut settings, steps) = match self.file {
            Some(file) => (file.settings, file.steps),
            None => (
                TourSettings::default(),
                self.fallback_steps.unwrap_or_default(),
            ),
        };

        self.env.apply(&mut settings);
        self.explicit.apply(&mut settings);

        validate_settings(&settings)?;
        validate_steps(&steps)?;

        Ok(TourFile { settings, steps })
    }
}

fn validate_settings(settings: &TourSettings) -> Result<(), ConfigError> {
    if !(0..=MAX_HIGHLIGHT_PADDING).contains(&settings.highlight_padding) {
        return Err(ConfigError::InvalidSettings {
            message: format!(
                "highlight_padding must be between 0 and {} (got {})",
                MAX_HIGHLIGHT_PADDING, settings.highlight_padding
            ),
        });
    }
    if settings.panel_offset_x < 0 || settings.panel_offset_y < 0 {
        return Err(ConfigError::InvalidSettings {
            message: "panel offsets must not be negative".to_string(),
        });
    }
    if settings.panel_width < MIN_PANEL_WIDTH || settings.panel_height < MIN_PANEL_HEIGHT {
        return Err(ConfigError::InvalidSettings {
            message: format!(
                "panel must be at least {}x{} (got {}x{})",
                MIN_PANEL_WIDTH, MIN_PANEL_HEIGHT, settings.panel_width, settings.panel_height
            ),
        });
    }
    for (name, label) in [
        ("next_label", &settings.next_label),
        ("done_label", &settings.done_label),
        ("back_label", &settings.back_label),
    ] {
        if label.trim().is_empty() {
            return Err(ConfigError::InvalidSettings {
                message: format!("{name} must not be blank"),
            });
        }
    }
    Ok(())
}

fn validate_steps(steps: &[StepSpec]) -> Result<(), ConfigError> {
    if steps.is_empty() {
        return Err(ConfigError::EmptyTour);
    }
    for (index, step) in steps.iter().enumerate() {
        if step.title.trim().is_empty() {
            return Err(ConfigError::InvalidStep {
                index,
                message: "title must not be blank".to_string(),
            });
        }
        if step.target.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidStep {
                index,
                message: "target selector must not be blank".to_string(),
            });
        }
    }
    Ok(())
}
