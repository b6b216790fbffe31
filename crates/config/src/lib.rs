//! Configuration management for the guided tour.
//!
//! This crate provides the tour definition types (steps, presentation
//! settings, colour themes) and a loader that reads them from JSON or YAML
//! tour files and applies environment variable overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, TourLoader, env_var_or_none, read_tour_file};
pub use types::{ColorTheme, StepSpec, Theme, TourFile, TourSettings};
