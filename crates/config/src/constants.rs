//! Centralized constants for the guided tour workspace.
//!
//! Geometry values are expressed in terminal cells.

// =============================================================================
// Highlight & Panel Geometry
// =============================================================================

/// Padding added on every side of the highlighted target.
pub const DEFAULT_HIGHLIGHT_PADDING: i32 = 1;

/// Horizontal gap between the target's left edge and the panel.
pub const DEFAULT_PANEL_OFFSET_X: i32 = 1;

/// Vertical gap between the target's bottom edge and the panel.
pub const DEFAULT_PANEL_OFFSET_Y: i32 = 1;

/// Default panel width, borders included.
pub const DEFAULT_PANEL_WIDTH: u16 = 44;

/// Default panel height, borders included.
pub const DEFAULT_PANEL_HEIGHT: u16 = 9;

/// Smallest panel that still fits a title row, a body row and the footer.
pub const MIN_PANEL_WIDTH: u16 = 24;
pub const MIN_PANEL_HEIGHT: u16 = 6;

/// Upper bound for the highlight padding.
pub const MAX_HIGHLIGHT_PADDING: i32 = 8;

// =============================================================================
// Control Labels
// =============================================================================

pub const DEFAULT_NEXT_LABEL: &str = "Next";
pub const DEFAULT_DONE_LABEL: &str = "Done";
pub const DEFAULT_BACK_LABEL: &str = "Back";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HIGHLIGHT_PADDING: &str = "TOUR_HIGHLIGHT_PADDING";
pub const ENV_PANEL_WIDTH: &str = "TOUR_PANEL_WIDTH";
pub const ENV_PANEL_HEIGHT: &str = "TOUR_PANEL_HEIGHT";
pub const ENV_THEME: &str = "TOUR_THEME";
pub const ENV_SHOW_PROGRESS: &str = "TOUR_SHOW_PROGRESS";
