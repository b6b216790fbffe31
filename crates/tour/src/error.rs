//! Error types for the tour controller.

use thiserror::Error;

/// Reasons a tour cannot start.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourError {
    #[error("Cannot start a tour with no steps")]
    EmptyTour,

    #[error("Tour is already running")]
    AlreadyActive,
}
