//! Mouse handling.
//!
//! Responsibilities:
//! - Turn left clicks into page clicks (panel controls and outside clicks are resolved by the tour).
//! - Scroll the container under the pointer, or the document, on wheel events.
//!
//! Does NOT handle:
//! - Keyboard input (see `input`).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::{App, SCROLL_STEP};
use crate::geometry::{Offset, Point};
use crate::page::{ElementId, ElementKind, PageEvent, ScrollSource};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let point = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.dispatch(PageEvent::Click(point)),
            MouseEventKind::ScrollUp => self.scroll_at(point, -SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll_at(point, SCROLL_STEP),
            _ => None,
        }
    }

    fn scroll_at(&mut self, point: Point, dy: i32) -> Option<Action> {
        let source = self
            .container_at(point)
            .map_or(ScrollSource::Document, ScrollSource::Container);
        self.dispatch(PageEvent::Scroll {
            source,
            delta: Offset::new(0, dy),
        });
        Some(Action::Redraw)
    }

    /// Innermost scroll container under a viewport point.
    fn container_at(&self, point: Point) -> Option<ElementId> {
        let mut current = self
            .page
            .hit_test(point.offset_by(self.page.scroll_offset()));
        while let Some(id) = current {
            let element = self.page.element(id)?;
            if element.kind() == ElementKind::Container {
                return Some(id);
            }
            current = element.parent();
        }
        None
    }
}
