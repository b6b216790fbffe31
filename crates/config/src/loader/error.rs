//! Error types for tour loading.
//!
//! Invariants:
//! - All variants carry enough context (path, variable, step index) to act on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a tour definition.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read tour file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tour file at {path}: {message}")]
    FileParse { path: PathBuf, message: String },

    #[error("Unsupported tour file format at {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Tour has no steps")]
    EmptyTour,

    #[error("Invalid step {index}: {message}")]
    InvalidStep { index: usize, message: String },

    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}
