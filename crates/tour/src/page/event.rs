//! Page-level events and their dispatch results.

use super::{ElementId, ListenerId};
use crate::geometry::{Offset, Point};

/// An input event delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Primary-button click at a viewport-relative point.
    Click(Point),
    /// The viewport changed size.
    Resize { width: u16, height: u16 },
    /// The document or a container scrolled by `delta`.
    Scroll { source: ScrollSource, delta: Offset },
}

/// What scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    Document,
    Container(ElementId),
}

/// Event type a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Click,
    Resize,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Listener {
    pub kind: ListenerKind,
    pub capture: bool,
}

/// Outcome of delivering one event to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub event: PageEvent,
    /// Hit-test result for clicks.
    pub target: Option<ElementId>,
    /// Click position in document coordinates.
    pub point: Option<Point>,
    /// Listeners that hear this event, in registration order.
    pub listeners: Vec<ListenerId>,
}

impl Dispatch {
    pub fn reaches(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }
}
