//! Tour state machine.
//!
//! Responsibilities:
//! - Own the ordered steps and the current index while a tour runs.
//! - Acquire the presenter, highlight and page listeners on `start`, release them on `finish`.
//! - Render the current step: panel text, control state, highlight frame and positioning.
//! - React to page events: panel controls, outside clicks, resize and scroll.
//!
//! Does NOT handle:
//! - Terminal input decoding (see `app`).
//! - Drawing (see `ui`).
//!
//! Invariants:
//! - Everything acquired by `start` is owned by the active session and released by `finish`.
//! - Navigation while inactive is a no-op; `finish` is idempotent.
//! - Repositioning never changes the current index.

use std::mem;

use tour_config::TourSettings;

use crate::error::TourError;
use crate::geometry::{Bounds, highlight_bounds};
use crate::page::style::HIDE;
use crate::page::{Dispatch, ElementId, ElementKind, ListenerId, ListenerKind, Page, PageEvent};
use crate::presenter::{ControlBindings, Presenter};
use crate::step::Step;

/// Navigation requests produced by the panel controls and the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    Back,
    Advance,
    Close,
}

impl TourAction {
    fn bindings() -> ControlBindings<Self> {
        ControlBindings {
            back: Self::Back,
            advance: Self::Advance,
            close: Self::Close,
        }
    }
}

/// Page listeners owned by a running tour.
#[derive(Debug, Clone, Copy)]
struct Listeners {
    click: ListenerId,
    resize: ListenerId,
    scroll: ListenerId,
}

impl Listeners {
    fn subscribe(page: &mut Page) -> Self {
        Self {
            click: page.add_listener(ListenerKind::Click, false),
            resize: page.add_listener(ListenerKind::Resize, false),
            // Capture phase, so scrolls inside nested containers are heard too.
            scroll: page.add_listener(ListenerKind::Scroll, true),
        }
    }

    fn unsubscribe(self, page: &mut Page) {
        for id in [self.click, self.resize, self.scroll] {
            page.remove_listener(id);
        }
    }
}

/// Whether rendering a step first scrolls its target into view.
///
/// Repositioning after a resize or scroll keeps the user's scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reveal {
    ScrollIntoView,
    InPlace,
}

#[derive(Debug)]
struct Session {
    index: usize,
    presenter: Presenter<TourAction>,
    highlight: ElementId,
    listeners: Listeners,
}

#[derive(Debug, Default)]
enum TourState {
    #[default]
    Inactive,
    Active(Session),
}

/// A guided tour over a fixed list of steps.
#[derive(Debug)]
pub struct Tour {
    steps: Vec<Step>,
    settings: TourSettings,
    state: TourState,
}

impl Tour {
    /// Store the steps. Nothing is rendered until [`Tour::start`].
    pub fn new(steps: Vec<Step>, settings: TourSettings) -> Self {
        Self {
            steps,
            settings,
            state: TourState::Inactive,
        }
    }

    /// Show the first step.
    ///
    /// An empty tour is rejected and stays inactive.
    pub fn start(&mut self, page: &mut Page) -> Result<(), TourError> {
        if self.is_active() {
            return Err(TourError::AlreadyActive);
        }
        if self.steps.is_empty() {
            return Err(TourError::EmptyTour);
        }

        let presenter = Presenter::new(page, &self.settings, TourAction::bindings());
        let highlight = page.insert_overlay(ElementKind::Highlight);
        let listeners = Listeners::subscribe(page);

        self.state = TourState::Active(Session {
            index: 0,
            presenter,
            highlight,
            listeners,
        });
        tracing::info!(steps = self.steps.len(), "Tour started");
        self.render(page, Reveal::ScrollIntoView);
        Ok(())
    }

    /// Go to the previous step.
    ///
    /// The Back control is disabled on the first step, so index 0 is only
    /// reachable through a caller bypassing it; that case is ignored.
    pub fn back(&mut self, page: &mut Page) {
        let TourState::Active(session) = &mut self.state else {
            return;
        };
        if session.index == 0 {
            tracing::debug!("Back requested on first step; ignoring");
            return;
        }
        session.index -= 1;
        tracing::debug!(index = session.index, "Tour moved back");
        self.render(page, Reveal::ScrollIntoView);
    }

    /// Go to the next step, finishing after the last one.
    pub fn advance(&mut self, page: &mut Page) {
        let TourState::Active(session) = &mut self.state else {
            return;
        };
        session.index += 1;
        if session.index >= self.steps.len() {
            self.finish(page);
            return;
        }
        tracing::debug!(index = session.index, "Tour advanced");
        self.render(page, Reveal::ScrollIntoView);
    }

    pub fn close(&mut self, page: &mut Page) {
        self.finish(page);
    }

    /// Tear down everything `start` created. Calling it again is a no-op.
    pub fn finish(&mut self, page: &mut Page) {
        let TourState::Active(session) = mem::take(&mut self.state) else {
            return;
        };
        session.listeners.unsubscribe(page);
        session.presenter.destroy(page);
        page.remove(session.highlight);
        tracing::info!(index = session.index, "Tour finished");
    }

    /// Run a navigation action.
    pub fn apply(&mut self, page: &mut Page, action: TourAction) {
        match action {
            TourAction::Back => self.back(page),
            TourAction::Advance => self.advance(page),
            TourAction::Close => self.close(page),
        }
    }

    /// React to a dispatched page event. Returns the action taken, if any.
    pub fn handle(&mut self, page: &mut Page, dispatch: &Dispatch) -> Option<TourAction> {
        let TourState::Active(session) = &self.state else {
            return None;
        };
        let listeners = session.listeners;

        match dispatch.event {
            PageEvent::Click(_) => {
                let point = dispatch.point?;
                let panel = session.presenter.panel_id();
                if dispatch.target.is_some_and(|t| page.contains(panel, t)) {
                    let action = session.presenter.click(page, point)?;
                    self.apply(page, action);
                    return Some(action);
                }
                if dispatch.reaches(listeners.click) && !self.click_is_inside(page, dispatch.target)
                {
                    tracing::debug!(?point, "Click outside the tour; finishing");
                    self.finish(page);
                    return Some(TourAction::Close);
                }
                None
            }
            PageEvent::Resize { .. } if dispatch.reaches(listeners.resize) => {
                self.render(page, Reveal::InPlace);
                None
            }
            PageEvent::Scroll { .. } if dispatch.reaches(listeners.scroll) => {
                self.render(page, Reveal::InPlace);
                None
            }
            PageEvent::Resize { .. } | PageEvent::Scroll { .. } => None,
        }
    }

    /// Whether a click target lies within the current target, the highlight or the panel.
    ///
    /// A step without a live target never contains the click.
    fn click_is_inside(&self, page: &Page, target: Option<ElementId>) -> bool {
        let (TourState::Active(session), Some(target)) = (&self.state, target) else {
            return false;
        };
        let in_step_target = self
            .live_target(page)
            .is_some_and(|step_target| page.contains(step_target, target));
        in_step_target
            || target == session.highlight
            || page.contains(session.presenter.panel_id(), target)
    }

    /// The current step's target, if it is still on the page.
    fn live_target(&self, page: &Page) -> Option<ElementId> {
        self.current_step()?
            .target()
            .filter(|id| page.element(*id).is_some())
    }

    fn render(&mut self, page: &mut Page, reveal: Reveal) {
        let target = self.live_target(page);
        let TourState::Active(session) = &mut self.state else {
            return;
        };
        let Some(step) = self.steps.get(session.index) else {
            return;
        };
        let total = self.steps.len();
        let presenter = &mut session.presenter;

        presenter.set_visible(page, true);
        presenter.set_back_enabled(session.index > 0);
        presenter.set_title(step.title());
        presenter.set_body(step.body());
        presenter.reset_advance_label();
        presenter.set_progress(
            self.settings
                .show_progress
                .then_some((session.index + 1, total)),
        );

        match target.and_then(|id| {
            if reveal == Reveal::ScrollIntoView {
                page.scroll_into_view(id);
            }
            page.bounding_rect(id)
        }) {
            Some(rect) => {
                presenter.set_centered(page, false);
                presenter.position_at(page, rect);
                if let Some(classes) = page.classes_mut(session.highlight) {
                    classes.remove(HIDE);
                }
                let frame =
                    highlight_bounds(rect, page.scroll_offset(), self.settings.highlight_padding);
                page.set_style_box(session.highlight, frame);
            }
            None => {
                if let Some(classes) = page.classes_mut(session.highlight) {
                    classes.add(HIDE);
                }
                page.set_style_box(session.highlight, Bounds::ZERO);
                presenter.set_centered(page, true);
            }
        }

        if session.index + 1 == total {
            presenter.set_advance_label_final();
        }
        tracing::debug!(index = session.index, targeted = target.is_some(), "Rendered tour step");
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TourState::Active(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            TourState::Active(session) => Some(session.index),
            TourState::Inactive => None,
        }
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current_index()?)
    }

    pub fn presenter(&self) -> Option<&Presenter<TourAction>> {
        match &self.state {
            TourState::Active(session) => Some(&session.presenter),
            TourState::Inactive => None,
        }
    }

    pub fn highlight(&self) -> Option<ElementId> {
        match &self.state {
            TourState::Active(session) => Some(session.highlight),
            TourState::Inactive => None,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn settings(&self) -> &TourSettings {
        &self.settings
    }
}
