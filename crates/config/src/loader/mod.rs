//! Tour loader for files and environment variables.
//!
//! Responsibilities:
//! - Read tour files (JSON or YAML, chosen by extension).
//! - Apply environment variable overrides to the settings.
//! - Validate the final `TourFile`.
//!
//! Invariants / Assumptions:
//! - Precedence: builder setters > environment variables > file values > defaults.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::TourLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::read_tour_file;
