//! Floating panel that shows the current step.
//!
//! Responsibilities:
//! - Insert and remove the backdrop and panel elements.
//! - Hold the displayed text, control state and advance label.
//! - Position the panel below-and-right of an anchor rectangle, or centre it.
//! - Map clicks on the panel to the action bound to each control.
//!
//! Does NOT handle:
//! - Which step is shown or when (see `controller`).
//! - Drawing (see `ui::panel`), which reads the state and `PanelLayout` from here.
//!
//! Invariants:
//! - The backdrop and the panel are shown and hidden together.
//! - Title and body are stored verbatim and only ever drawn as plain text.
//! - `destroy` consumes the presenter, so nothing can touch it afterwards.

use tour_config::TourSettings;

use crate::geometry::{Bounds, Point, panel_anchor};
use crate::page::style::{CENTER, SHOW};
use crate::page::{ElementId, ElementKind, Page};

/// The clickable controls of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    Close,
    Back,
    Advance,
}

/// Action produced by each control when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBindings<A> {
    pub back: A,
    pub advance: A,
    pub close: A,
}

impl<A: Clone> ControlBindings<A> {
    fn action(&self, control: PanelControl) -> A {
        match control {
            PanelControl::Back => self.back.clone(),
            PanelControl::Advance => self.advance.clone(),
            PanelControl::Close => self.close.clone(),
        }
    }
}

/// Glyph drawn for the close control.
pub const CLOSE_GLYPH: &str = " × ";

/// Regions of a laid-out panel, in the same coordinate space as the panel box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub frame: Bounds,
    pub title: Bounds,
    pub close: Bounds,
    pub body: Bounds,
    pub back: Bounds,
    pub progress: Bounds,
    pub advance: Bounds,
}

impl PanelLayout {
    /// Split a panel box into its regions.
    ///
    /// Inside the border: the title row (close control on the right), one
    /// blank row, the body, then the footer with Back on the left, Advance
    /// on the right and the progress caption between them.
    pub fn compute(frame: Bounds, back_label: &str, advance_label: &str) -> Self {
        let inner = frame.expand(-1);
        let close_width = CLOSE_GLYPH.chars().count() as i32;
        let footer_y = inner.bottom() - 1;

        let back_width = button_width(back_label);
        let advance_width = button_width(advance_label);
        let back = Bounds::new(inner.x, footer_y, back_width, 1);
        let advance = Bounds::new(inner.right() - advance_width, footer_y, advance_width, 1);
        let progress_x = back.right() + 1;

        Self {
            frame,
            title: Bounds::new(inner.x, inner.y, (inner.width - close_width - 1).max(0), 1),
            close: Bounds::new(inner.right() - close_width, inner.y, close_width, 1),
            body: Bounds::new(inner.x, inner.y + 2, inner.width, (inner.height - 3).max(0)),
            back,
            progress: Bounds::new(progress_x, footer_y, (advance.x - 1 - progress_x).max(0), 1),
            advance,
        }
    }

    /// Control under `point`, if any.
    pub fn control_at(&self, point: Point) -> Option<PanelControl> {
        [
            (self.close, PanelControl::Close),
            (self.back, PanelControl::Back),
            (self.advance, PanelControl::Advance),
        ]
        .into_iter()
        .find(|(bounds, _)| bounds.contains(point))
        .map(|(_, control)| control)
    }
}

/// Buttons are drawn as the label padded by one cell on each side.
fn button_width(label: &str) -> i32 {
    label.chars().count() as i32 + 2
}

/// The floating panel and its backdrop.
#[derive(Debug)]
pub struct Presenter<A> {
    panel: ElementId,
    backdrop: ElementId,
    bindings: ControlBindings<A>,
    title: String,
    body: String,
    back_enabled: bool,
    advance_label: String,
    progress: Option<(usize, usize)>,
    next_label: String,
    done_label: String,
    back_label: String,
    offset_x: i32,
    offset_y: i32,
}

impl<A: Clone> Presenter<A> {
    /// Insert the backdrop and the panel, hidden, and wire the controls.
    pub fn new(page: &mut Page, settings: &TourSettings, bindings: ControlBindings<A>) -> Self {
        let backdrop = page.insert_overlay(ElementKind::Backdrop);
        let panel = page.insert_overlay(ElementKind::Panel);
        page.set_style_box(
            panel,
            Bounds::new(
                0,
                0,
                i32::from(settings.panel_width),
                i32::from(settings.panel_height),
            ),
        );

        Self {
            panel,
            backdrop,
            bindings,
            title: String::new(),
            body: String::new(),
            back_enabled: true,
            advance_label: settings.next_label.clone(),
            progress: None,
            next_label: settings.next_label.clone(),
            done_label: settings.done_label.clone(),
            back_label: settings.back_label.clone(),
            offset_x: settings.panel_offset_x,
            offset_y: settings.panel_offset_y,
        }
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn set_body(&mut self, text: impl Into<String>) {
        self.body = text.into();
    }

    pub fn reset_advance_label(&mut self) {
        self.advance_label.clone_from(&self.next_label);
    }

    /// Label the advance control for the last step.
    pub fn set_advance_label_final(&mut self) {
        self.advance_label.clone_from(&self.done_label);
    }

    pub fn set_back_enabled(&mut self, enabled: bool) {
        self.back_enabled = enabled;
    }

    /// Position within the tour, shown as "Step i of N". `None` hides it.
    pub fn set_progress(&mut self, progress: Option<(usize, usize)>) {
        self.progress = progress;
    }

    pub fn set_visible(&self, page: &mut Page, visible: bool) {
        for id in [self.backdrop, self.panel] {
            if let Some(classes) = page.classes_mut(id) {
                classes.toggle(SHOW, visible);
            }
        }
    }

    pub fn set_centered(&self, page: &mut Page, centered: bool) {
        if let Some(classes) = page.classes_mut(self.panel) {
            classes.toggle(CENTER, centered);
        }
    }

    /// Anchor the panel below-and-right of a viewport-relative rectangle.
    ///
    /// When the panel would run past the bottom of the viewport it is placed
    /// above the rectangle instead, and it is shifted left to stay on screen.
    /// The result depends only on `rect`, the scroll offset and the viewport.
    pub fn position_at(&self, page: &mut Page, rect: Bounds) {
        let scroll = page.scroll_offset();
        let viewport = page.viewport_bounds();
        let size = page.style_box(self.panel).unwrap_or(Bounds::ZERO);
        let anchor = panel_anchor(rect, scroll, self.offset_x, self.offset_y);

        let mut y = anchor.y;
        if y + size.height > viewport.bottom() {
            let above = rect.top() + scroll.y - self.offset_y - size.height;
            if above >= viewport.top() {
                y = above;
            }
        }
        let x = anchor
            .x
            .min(viewport.right() - size.width)
            .max(viewport.left());

        page.set_style_box(self.panel, Bounds::new(x, y, size.width, size.height));
    }

    /// Remove the panel and the backdrop from the page.
    pub fn destroy(self, page: &mut Page) {
        page.remove(self.panel);
        page.remove(self.backdrop);
    }

    /// Layout of the panel as currently resolved on the page.
    pub fn layout(&self, page: &Page) -> Option<PanelLayout> {
        page.resolve_box(self.panel)
            .map(|frame| PanelLayout::compute(frame, &self.back_label, &self.advance_label))
    }

    /// Action bound to the control under a document-space point.
    ///
    /// A disabled Back control produces nothing.
    pub fn click(&self, page: &Page, point: Point) -> Option<A> {
        let control = self.layout(page)?.control_at(point)?;
        if control == PanelControl::Back && !self.back_enabled {
            return None;
        }
        Some(self.bindings.action(control))
    }

    pub fn panel_id(&self) -> ElementId {
        self.panel
    }

    pub fn backdrop_id(&self) -> ElementId {
        self.backdrop
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn back_enabled(&self) -> bool {
        self.back_enabled
    }

    pub fn back_label(&self) -> &str {
        &self.back_label
    }

    pub fn advance_label(&self) -> &str {
        &self.advance_label
    }

    pub fn progress(&self) -> Option<(usize, usize)> {
        self.progress
    }

    pub fn is_visible(&self, page: &Page) -> bool {
        page.element(self.panel)
            .is_some_and(|e| e.classes().contains(SHOW))
    }

    pub fn is_centered(&self, page: &Page) -> bool {
        page.element(self.panel)
            .is_some_and(|e| e.classes().contains(CENTER))
    }
}
