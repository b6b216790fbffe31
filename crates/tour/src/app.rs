//! Application state for the demo host.
//!
//! The module is organized into submodules:
//! - `input`: keyboard handling
//! - `mouse`: mouse handling (clicks and wheel scrolling)
//! - `render`: drawing the page and the tour chrome
//!
//! Invariants:
//! - The page viewport always matches the last known terminal size.
//! - Page events are dispatched through the page first and then offered to the tour.

mod input;
mod mouse;
mod render;

use ratatui::layout::Rect;
use tour_config::Theme;

use crate::action::Action;
use crate::controller::Tour;
use crate::page::{Page, PageEvent};

/// Rows scrolled per wheel notch or arrow key.
pub const SCROLL_STEP: i32 = 3;

/// Demo host: a page with a tour running over it.
#[derive(Debug)]
pub struct App {
    pub page: Page,
    pub tour: Tour,
    pub theme: Theme,
    pub last_area: Rect,
}

impl App {
    pub fn new(page: Page, tour: Tour, theme: Theme) -> Self {
        let (width, height) = page.viewport_size();
        Self {
            page,
            tour,
            theme,
            last_area: Rect::new(0, 0, width, height),
        }
    }

    /// Apply an action. `Quit` is left to the caller.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tour(tour_action) => self.tour.apply(&mut self.page, tour_action),
            Action::StartTour => {
                if let Err(e) = self.tour.start(&mut self.page) {
                    tracing::warn!(error = %e, "Could not start tour");
                }
            }
            Action::Quit | Action::Redraw => {}
        }
    }

    /// Terminal resized.
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.last_area = Rect::new(0, 0, width, height);
        self.dispatch(PageEvent::Resize { width, height });
        Some(Action::Redraw)
    }

    /// Deliver a page event and let the tour react to it.
    fn dispatch(&mut self, event: PageEvent) -> Option<Action> {
        let dispatch = self.page.dispatch(event);
        self.tour
            .handle(&mut self.page, &dispatch)
            .map(|_| Action::Redraw)
    }
}
