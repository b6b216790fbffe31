//! Actions produced by input handlers and consumed by `App::update`.

use crate::controller::TourAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Navigate the running tour
    Tour(TourAction),
    /// Start the tour from its first step
    StartTour,
    /// State already changed; only a redraw is needed
    Redraw,
}
