//! Command-line argument parsing for guided-tour.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Tour file loading or validation (see `tour_config::TourLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - CLI values take precedence over `TOUR_*` environment variables and the tour file.

use clap::Parser;
use std::path::PathBuf;
use tour_config::ColorTheme;

/// Command-line arguments for guided-tour.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --padding, --theme)
/// 2. Environment variables (e.g., TOUR_HIGHLIGHT_PADDING, TOUR_THEME)
/// 3. Tour file settings
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "guided-tour",
    about = "Step-by-step guided tour over a terminal page",
    version,
    after_help = "Examples:\n  guided-tour\n  guided-tour --tour onboarding.yaml\n  guided-tour --padding 2 --no-mouse\n"
)]
pub struct Cli {
    /// Tour file to load (JSON or YAML); the built-in sample tour is used otherwise
    #[arg(long)]
    pub tour: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Padding around the highlighted element, in cells
    #[arg(long)]
    pub padding: Option<i32>,

    /// Color theme (default, light, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,
}
