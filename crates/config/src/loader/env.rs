//! Environment variable parsing for tour settings.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable values return `ConfigError::InvalidValue`.

use std::str::FromStr;

use super::builder::TourLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_HIGHLIGHT_PADDING, ENV_PANEL_HEIGHT, ENV_PANEL_WIDTH, ENV_SHOW_PROGRESS, ENV_THEME,
};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable overrides to the loader.
pub fn apply_env(loader: &mut TourLoader) -> Result<(), ConfigError> {
    if let Some(padding) = parse_env::<i32>(ENV_HIGHLIGHT_PADDING, "must be an integer")? {
        loader.set_highlight_padding(Some(padding));
    }
    if let Some(width) = parse_env::<u16>(ENV_PANEL_WIDTH, "must be a positive integer")? {
        loader.set_panel_width(Some(width));
    }
    if let Some(height) = parse_env::<u16>(ENV_PANEL_HEIGHT, "must be a positive integer")? {
        loader.set_panel_height(Some(height));
    }
    if let Some(show) = parse_env::<bool>(ENV_SHOW_PROGRESS, "must be true or false")? {
        loader.set_show_progress(Some(show));
    }
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme = theme
            .parse::<ColorTheme>()
            .map_err(|message| ConfigError::InvalidValue {
                var: ENV_THEME.to_string(),
                message,
            })?;
        loader.set_theme(Some(theme));
    }
    Ok(())
}
