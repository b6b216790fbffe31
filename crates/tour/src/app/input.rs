//! Keyboard handling.
//!
//! While the tour runs, Esc closes it, Enter and Right advance and Left goes
//! back (only when the Back control is enabled). Arrow and page keys scroll
//! the document. `s` starts the tour again once it has finished.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::{App, SCROLL_STEP};
use crate::controller::TourAction;
use crate::geometry::Offset;
use crate::page::{PageEvent, ScrollSource};

impl App {
    /// Map a key press to an action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if let Some(action) = self.tour_key(key.code) {
            return Some(action);
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') if !self.tour.is_active() => Some(Action::StartTour),
            KeyCode::Up => self.scroll_document(-SCROLL_STEP),
            KeyCode::Down => self.scroll_document(SCROLL_STEP),
            KeyCode::PageUp => self.scroll_document(-i32::from(self.last_area.height)),
            KeyCode::PageDown => self.scroll_document(i32::from(self.last_area.height)),
            _ => None,
        }
    }

    fn tour_key(&self, code: KeyCode) -> Option<Action> {
        let presenter = self.tour.presenter()?;
        let action = match code {
            KeyCode::Esc => TourAction::Close,
            KeyCode::Enter | KeyCode::Right => TourAction::Advance,
            KeyCode::Left if presenter.back_enabled() => TourAction::Back,
            _ => return None,
        };
        Some(Action::Tour(action))
    }

    fn scroll_document(&mut self, dy: i32) -> Option<Action> {
        self.dispatch(PageEvent::Scroll {
            source: ScrollSource::Document,
            delta: Offset::new(0, dy),
        });
        Some(Action::Redraw)
    }
}
